//! Protocol definitions.

use std::sync::LazyLock;

use hsym_core::MatcherKind;
use regex::Regex;

use super::{Matcher, dedup_in_order};
use crate::scrub::Scrub;

pub static PROTOCOL: ProtocolMatcher = ProtocolMatcher;

static PROTOCOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@protocol\s*(\w+)").expect("valid protocol regex"));

/// Whether the text after a protocol name continues a definition.
///
/// A definition continues with `<`, `:`, whitespace then another token, or
/// nothing at all. A forward declaration reaches `;` or `,`, possibly after
/// whitespace.
fn continues_definition(rest: &str) -> bool {
    let trimmed = rest.trim_start();
    match trimmed.chars().next() {
        None | Some('<' | ':') => true,
        Some(';' | ',' | '(') => false,
        Some(_) => trimmed.len() < rest.len(),
    }
}

/// Matcher for `@protocol Name ...` definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtocolMatcher;

impl Matcher for ProtocolMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Protocol
    }

    fn scrub(&self) -> Scrub {
        Scrub::Comments
    }

    fn find(&self, text: &str) -> Vec<String> {
        dedup_in_order(
            PROTOCOL_RE
                .captures_iter(text)
                .filter(|caps| caps.get(0).is_some_and(|m| continues_definition(&text[m.end()..])))
                .map(|caps| caps[1].to_string()),
        )
    }
}
