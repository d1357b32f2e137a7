//! Named exclusion predicates.
//!
//! Matchers reject candidates by consulting a table of named rules instead of
//! burying the rules in one pattern. Each table is public so its entries can
//! be listed and tested one by one.

use std::sync::LazyLock;

use regex::Regex;

/// How an exclusion rule inspects text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text contains the literal anywhere.
    Contains(&'static str),
    /// Text contains the literal as a whole identifier token.
    Word(&'static str),
    /// Text, ignoring leading whitespace, starts with an Objective-C method
    /// marker (`-` or `+`) followed by optional space and `(`.
    MethodMarker,
}

/// A named exclusion predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclusion {
    pub name: &'static str,
    pub rule: Rule,
}

impl Exclusion {
    #[must_use]
    pub const fn contains(name: &'static str, literal: &'static str) -> Self {
        Self {
            name,
            rule: Rule::Contains(literal),
        }
    }

    #[must_use]
    pub const fn word(name: &'static str, word: &'static str) -> Self {
        Self {
            name,
            rule: Rule::Word(word),
        }
    }

    #[must_use]
    pub const fn method_marker(name: &'static str) -> Self {
        Self {
            name,
            rule: Rule::MethodMarker,
        }
    }

    /// Whether this rule fires on `text`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self.rule {
            Rule::Contains(literal) => text.contains(literal),
            Rule::Word(word) => contains_word(text, word),
            Rule::MethodMarker => METHOD_MARKER_RE.is_match(text),
        }
    }
}

static METHOD_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-+]\s*\(").expect("valid method marker regex"));

/// First exclusion in `table` that fires on `text`, if any.
#[must_use]
pub fn first_match<'a>(table: &'a [Exclusion], text: &str) -> Option<&'a Exclusion> {
    table.iter().find(|exclusion| exclusion.matches(text))
}

/// Whether `word` occurs in `text` with no identifier character on either side.
fn contains_word(text: &str, word: &str) -> bool {
    let is_ident = |c: char| c == '_' || c.is_ascii_alphanumeric();
    text.match_indices(word).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + word.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}
