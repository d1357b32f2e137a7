//! Enum type names and enumerators.
//!
//! Three shapes are recognized:
//! - `NS_ENUM(Backing, Name) { body };`
//! - `NS_OPTIONS(Backing, Name) { body };`
//! - `enum { body } OptionalName;`
//!
//! The macro forms name the type before the body, the legacy form after it.
//! A literal `{...}` body is required, so forward declarations yield nothing.
//! Bodies end at the first `}`; nested braces truncate the body.

use std::sync::LazyLock;

use hsym_core::MatcherKind;
use regex::Regex;

use super::{Matcher, body_identifiers};
use crate::scrub::Scrub;

pub static ENUM: EnumMatcher = EnumMatcher;

/// A recognized enum declaration shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumShape {
    NsEnum,
    NsOptions,
    Legacy,
}

impl EnumShape {
    pub const ALL: [Self; 3] = [Self::NsEnum, Self::NsOptions, Self::Legacy];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::NsEnum => &NS_ENUM_RE,
            Self::NsOptions => &NS_OPTIONS_RE,
            Self::Legacy => &LEGACY_ENUM_RE,
        }
    }
}

// The gap between the macro's `)` and `{` may not cross a `;`, so a forward
// declaration never borrows the body of a later declaration.
static NS_ENUM_RE: LazyLock<Regex> = LazyLock::new(|| macro_enum_regex("NS_ENUM"));

static NS_OPTIONS_RE: LazyLock<Regex> = LazyLock::new(|| macro_enum_regex("NS_OPTIONS"));

static LEGACY_ENUM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\benum\b[^{;]*?\{(?P<body>[^}]+?)\}\W*?(?:(?P<name>\w+)\W*)?;")
        .expect("valid legacy enum regex")
});

fn macro_enum_regex(keyword: &str) -> Regex {
    Regex::new(&format!(
        r"{keyword}[^(]*?\(\W*?\w+[^,]*?,\W*?(?P<name>\w+)[^)]*?\)[^{{;]*?\{{(?P<body>[^}}]+?)\}}[^;]*?;"
    ))
    .expect("valid macro enum regex")
}

/// Matcher for enum names and their enumerators.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumMatcher;

impl EnumMatcher {
    /// Symbols from one shape: for each declaration, the type name (when
    /// present) followed by every identifier in its body.
    #[must_use]
    pub fn find_shape(shape: EnumShape, text: &str) -> Vec<String> {
        let mut symbols = Vec::new();
        for caps in shape.pattern().captures_iter(text) {
            if let Some(name) = caps.name("name") {
                symbols.push(name.as_str().to_string());
            }
            if let Some(body) = caps.name("body") {
                symbols.extend(body_identifiers(body.as_str()));
            }
        }
        symbols
    }
}

impl Matcher for EnumMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Enum
    }

    fn scrub(&self) -> Scrub {
        Scrub::Comments
    }

    fn find(&self, text: &str) -> Vec<String> {
        EnumShape::ALL
            .into_iter()
            .flat_map(|shape| Self::find_shape(shape, text))
            .collect()
    }
}
