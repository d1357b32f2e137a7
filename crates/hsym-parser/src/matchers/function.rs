//! Free function declarations and definitions.
//!
//! Any identifier directly followed by `(` (and not by `(^`) is a candidate.
//! The text from the start of its line up to the identifier is its prefix; a
//! candidate is dropped when an entry of [`FUNCTION_EXCLUSIONS`] fires on its
//! prefix or on the identifier itself.
//!
//! Lines inside an `@interface`/`@protocol`/`@implementation` ... `@end` span
//! are skipped, so continuation lines of multi-line method declarations and
//! their availability macros never yield candidates.

use std::collections::HashSet;
use std::sync::LazyLock;

use hsym_core::MatcherKind;
use regex::Regex;

use super::{AtSpan, Matcher};
use crate::exclusion::{self, Exclusion};
use crate::scrub::Scrub;

pub static FUNCTION: FunctionMatcher = FunctionMatcher;

/// Rules that reject a candidate.
pub const FUNCTION_EXCLUSIONS: &[Exclusion] = &[
    Exclusion::contains("annotation", "@"),
    Exclusion::contains("preprocessor", "#"),
    Exclusion::word("typedef", "typedef"),
    Exclusion::word("while", "while"),
    Exclusion::word("if", "if"),
    Exclusion::word("switch", "switch"),
    Exclusion::method_marker("method-declaration"),
];

// The character after `(` is consumed by the match but lies beyond the name,
// and scanning resumes at the end of the name.
static CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<name>[A-Za-z_]\w*)\s*\([^\^]")
        .expect("valid function regex")
});

/// Byte offsets of the lines that start inside an at-definition span.
fn lines_inside_at_spans(text: &str) -> HashSet<usize> {
    let mut inside = HashSet::new();
    let mut state = AtSpan::Outside;
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if state == AtSpan::Inside {
            inside.insert(offset);
        }
        state = state.after(line);
        offset += line.len();
    }
    inside
}

/// Matcher for C function names.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionMatcher;

impl Matcher for FunctionMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Function
    }

    fn scrub(&self) -> Scrub {
        Scrub::Comments
    }

    fn find(&self, text: &str) -> Vec<String> {
        let inside = lines_inside_at_spans(text);
        let mut symbols = Vec::new();
        let mut pos = 0;

        while let Some(caps) = CALL_RE.captures_at(text, pos) {
            let Some(name) = caps.name("name") else {
                break;
            };
            pos = name.end();

            let line_start = text[..name.start()].rfind('\n').map_or(0, |i| i + 1);
            if inside.contains(&line_start) {
                tracing::trace!(name = name.as_str(), "function candidate inside @end span");
                continue;
            }
            let prefix = &text[line_start..name.start()];
            let rejected = exclusion::first_match(FUNCTION_EXCLUSIONS, prefix)
                .or_else(|| exclusion::first_match(FUNCTION_EXCLUSIONS, name.as_str()));
            if let Some(exclusion) = rejected {
                tracing::trace!(
                    rule = exclusion.name,
                    name = name.as_str(),
                    "function candidate excluded"
                );
                continue;
            }
            symbols.push(name.as_str().to_string());
        }

        symbols
    }
}
