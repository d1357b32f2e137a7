//! Class interfaces.

use std::sync::LazyLock;

use hsym_core::MatcherKind;
use regex::Regex;

use super::{Matcher, dedup_in_order};
use crate::scrub::Scrub;

pub static INTERFACE: InterfaceMatcher = InterfaceMatcher;

// The superclass colon separates a class from a category `(Name)` or an
// extension `()`, neither of which declares a new type.
static INTERFACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@interface\s*(\w+)\s*:").expect("valid interface regex"));

/// Matcher for `@interface Name : Superclass`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceMatcher;

impl Matcher for InterfaceMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Interface
    }

    fn scrub(&self) -> Scrub {
        Scrub::Comments
    }

    fn find(&self, text: &str) -> Vec<String> {
        dedup_in_order(
            INTERFACE_RE
                .captures_iter(text)
                .map(|caps| caps[1].to_string()),
        )
    }
}
