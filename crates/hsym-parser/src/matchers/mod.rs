//! Category matchers.
//!
//! Each matcher recognizes one declaration shape and returns the candidate
//! symbol names it introduces. Matchers are stateless zero-sized types with a
//! `static` instance; any state a matcher needs while scanning lives on its
//! own stack frame.

mod constant;
mod define;
mod enums;
mod function;
mod interface;
mod protocol;
mod structs;
mod typedef;

use std::collections::HashSet;
use std::sync::LazyLock;

use hsym_core::MatcherKind;
use regex::Regex;

use crate::scrub::{Scrub, scrub_preprocessor};

pub use constant::{AtSpan, CONSTANT, ConstantMatcher, LINE_EXCLUSIONS};
pub use define::{DEFINE, DefineMatcher};
pub use enums::{ENUM, EnumMatcher, EnumShape};
pub use function::{FUNCTION, FUNCTION_EXCLUSIONS, FunctionMatcher};
pub use interface::{INTERFACE, InterfaceMatcher};
pub use protocol::{PROTOCOL, ProtocolMatcher};
pub use structs::{STRUCT, StructMatcher};
pub use typedef::{TYPEDEF, TypedefMatcher};

/// A lexical recognizer for one declaration category.
pub trait Matcher: Send + Sync {
    /// The category this matcher recognizes.
    fn kind(&self) -> MatcherKind;

    /// Preprocessing that must run on raw text before [`Matcher::find`].
    fn scrub(&self) -> Scrub;

    /// Find candidate symbols in already-scrubbed text.
    fn find(&self, text: &str) -> Vec<String>;

    /// Raw text → scrub → find.
    fn extract(&self, source: &str) -> Vec<String> {
        let text = self.scrub().apply(source);
        self.find(&text)
    }
}

/// The static matcher for `kind`.
#[must_use]
pub fn matcher(kind: MatcherKind) -> &'static dyn Matcher {
    match kind {
        MatcherKind::Constant => &CONSTANT,
        MatcherKind::Define => &DEFINE,
        MatcherKind::Enum => &ENUM,
        MatcherKind::Struct => &STRUCT,
        MatcherKind::Typedef => &TYPEDEF,
        MatcherKind::Function => &FUNCTION,
        MatcherKind::Interface => &INTERFACE,
        MatcherKind::Protocol => &PROTOCOL,
    }
}

// ── Shared helpers ─────────────────────────────────────────────────

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z_]\w*").expect("valid identifier regex"));

/// Every identifier-shaped token in a declaration body, after its
/// preprocessor lines are stripped.
pub(crate) fn body_identifiers(body: &str) -> Vec<String> {
    let body = scrub_preprocessor(body);
    IDENTIFIER_RE
        .find_iter(&body)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Drop repeats, keeping the first occurrence of each name.
pub(crate) fn dedup_in_order<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_returns_matching_kind() {
        for kind in MatcherKind::ALL {
            assert_eq!(matcher(kind).kind(), kind);
        }
    }

    #[test]
    fn every_matcher_scrubs_comments() {
        for kind in MatcherKind::ALL {
            assert_eq!(matcher(kind).scrub(), Scrub::Comments, "{kind}");
        }
    }

    #[test]
    fn every_matcher_returns_nothing_for_empty_input() {
        for kind in MatcherKind::ALL {
            assert!(matcher(kind).extract("").is_empty(), "{kind}");
        }
    }

    #[test]
    fn every_matcher_ignores_commented_declarations() {
        let source = "// const kFoo = 1;\n/* #define kBar 2\n@interface Baz : NSObject */";
        for kind in MatcherKind::ALL {
            assert!(matcher(kind).extract(source).is_empty(), "{kind}");
        }
    }

    #[test]
    fn body_identifiers_skip_numbers_and_directives() {
        let body = "\n  A = 1 << 2,\n#if DEBUG\n  _B = 0x1F,\n#endif\n";
        assert_eq!(body_identifiers(body), vec!["A", "_B"]);
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let names = ["b", "a", "b", "c", "a"].map(String::from);
        assert_eq!(dedup_in_order(names), vec!["b", "a", "c"]);
    }
}
