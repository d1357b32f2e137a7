//! Symbol names and the category that produced them.

use serde::{Deserialize, Serialize};

/// The declaration category a matcher recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    Constant,
    Define,
    Enum,
    Struct,
    Typedef,
    Function,
    Interface,
    Protocol,
}

impl MatcherKind {
    /// Every kind, in aggregation order.
    pub const ALL: [Self; 8] = [
        Self::Constant,
        Self::Define,
        Self::Enum,
        Self::Struct,
        Self::Typedef,
        Self::Function,
        Self::Interface,
        Self::Protocol,
    ];
}

impl std::fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Constant => "constant",
            Self::Define => "define",
            Self::Enum => "enum",
            Self::Struct => "struct",
            Self::Typedef => "typedef",
            Self::Function => "function",
            Self::Interface => "interface",
            Self::Protocol => "protocol",
        };
        write!(f, "{s}")
    }
}

/// A candidate symbol tagged with the matcher that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: MatcherKind,
}
