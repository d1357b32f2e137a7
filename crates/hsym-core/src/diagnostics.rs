//! Heuristic checks for likely matcher false positives.
//!
//! The checks only report. A flagged symbol stays in the result and a run with
//! problems still succeeds.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::report::ScanResult;

/// Symbols shorter than this are flagged.
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Substrings that rarely belong in a declared name but often leak in from
/// annotations, control flow or directives.
pub const DEFAULT_SUSPICIOUS: &[&str] = &[
    "@",
    "void",
    "while",
    "if",
    "switch",
    "property",
    "interface",
    "protocol",
    "class",
    "implementation",
    "typedef",
    "#",
    "define",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRules {
    pub min_length: usize,
    pub suspicious: Vec<String>,
}

impl Default for CheckRules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            suspicious: DEFAULT_SUSPICIOUS.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "token", rename_all = "snake_case")]
pub enum ProblemReason {
    TooShort,
    /// The first suspicious substring found.
    Suspicious(String),
}

/// One flagged symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub path: PathBuf,
    pub symbol: String,
    pub reason: ProblemReason,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Problem: {} in {}", self.symbol, self.path.display())
    }
}

/// Flag suspicious symbols, in path order then symbol order.
///
/// A symbol that is both too short and suspicious yields two problems.
#[must_use]
pub fn check(result: &ScanResult, rules: &CheckRules) -> Vec<Problem> {
    let mut problems = Vec::new();
    for (path, symbols) in result.iter() {
        for symbol in symbols {
            let name = symbol.name.as_str();
            let problem = |reason| Problem {
                path: path.to_path_buf(),
                symbol: name.to_string(),
                reason,
            };
            if name.chars().count() < rules.min_length {
                problems.push(problem(ProblemReason::TooShort));
            }
            if let Some(token) = rules.suspicious.iter().find(|t| name.contains(t.as_str())) {
                problems.push(problem(ProblemReason::Suspicious(token.clone())));
            }
        }
    }
    problems
}
