//! Top-level constant declarations.
//!
//! Recognizes `extern NSString *const Name;` and `static const T name = 1.0;`
//! by scanning line by line. A line is a candidate only when no exclusion in
//! [`LINE_EXCLUSIONS`] fires and the scan is outside an
//! `@interface`/`@protocol`/`@implementation` ... `@end` span.

use std::sync::LazyLock;

use hsym_core::MatcherKind;
use regex::Regex;

use super::{Matcher, dedup_in_order};
use crate::exclusion::{self, Exclusion};
use crate::scrub::Scrub;

pub static CONSTANT: ConstantMatcher = ConstantMatcher;

/// Rules that disqualify a whole line.
pub const LINE_EXCLUSIONS: &[Exclusion] = &[
    Exclusion::contains("preprocessor", "#"),
    Exclusion::contains("typedef", "typedef"),
    Exclusion::contains("annotation", "@"),
    Exclusion::contains("closing-brace", "}"),
    Exclusion::contains("property", "property"),
    Exclusion::contains("class-method", "+"),
    Exclusion::contains("instance-method", "-"),
    Exclusion::contains("call-or-prototype", "("),
    Exclusion::contains("bitfield", ":"),
];

static CONSTANT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*?(\w+)[\s=\d.]*;").expect("valid constant regex"));

static AT_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(?:interface|implementation|protocol)\s+\w+").expect("valid at-open regex")
});

static PROTOCOL_FORWARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@protocol\s+\w+(?:\s*,\s*\w+)*\s*;").expect("valid forward protocol regex")
});

static AT_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@end\b").expect("valid at-end regex"));

/// Where the line scan currently sits relative to an at-definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtSpan {
    Outside,
    Inside,
}

impl AtSpan {
    /// State after reading `line`. The later of an opener and an `@end` on
    /// the same line decides.
    #[must_use]
    pub fn after(self, line: &str) -> Self {
        let opened = AT_OPEN_RE
            .find_iter(line)
            .filter(|m| !PROTOCOL_FORWARD_RE.is_match(&line[m.start()..]))
            .map(|m| m.start())
            .last();
        let closed = AT_END_RE.find_iter(line).map(|m| m.start()).last();
        match (opened, closed) {
            (Some(open), Some(close)) if close > open => Self::Outside,
            (Some(_), _) => Self::Inside,
            (None, Some(_)) => Self::Outside,
            (None, None) => self,
        }
    }
}

/// Matcher for top-level constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantMatcher;

impl ConstantMatcher {
    fn line_symbols(line: &str) -> Vec<String> {
        let names = CONSTANT_RE
            .captures_iter(line)
            .map(|caps| caps[1].to_string());
        dedup_in_order(names)
    }
}

impl Matcher for ConstantMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Constant
    }

    fn scrub(&self) -> Scrub {
        Scrub::Comments
    }

    fn find(&self, text: &str) -> Vec<String> {
        let mut state = AtSpan::Outside;
        let mut symbols = Vec::new();

        for line in text.lines() {
            let before = state;
            state = state.after(line);
            if before == AtSpan::Inside || state == AtSpan::Inside {
                continue;
            }
            if let Some(exclusion) = exclusion::first_match(LINE_EXCLUSIONS, line) {
                tracing::trace!(rule = exclusion.name, line, "constant line excluded");
                continue;
            }
            symbols.extend(Self::line_symbols(line));
        }

        symbols
    }
}
