//! Type aliases introduced with `typedef`.
//!
//! Two forms, tried in order at each `typedef`:
//! - callable: `typedef R (^Name)(...);` or `typedef R (*Name)(...);`
//! - alias: `typedef T Name;`, the last identifier before the semicolon
//!
//! An alias whose name sits inside an unclosed parenthesis (the forward
//! `typedef NS_ENUM(NSInteger, E);`) is rejected. Enum and struct bodies are
//! never crossed, so `typedef NS_ENUM(...) { ... };` and
//! `typedef struct { ... } Name;` are left to their own matchers.

use std::sync::LazyLock;

use hsym_core::MatcherKind;
use regex::Regex;

use super::Matcher;
use crate::scrub::Scrub;

pub static TYPEDEF: TypedefMatcher = TypedefMatcher;

static TYPEDEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"typedef[^(;{]*\([^\^*;)]*[\^*]\s*(?P<callable>[A-Za-z_]\w*)[^;]*;",
        r"|typedef[^;{\n]*?\b(?P<alias>[A-Za-z_]\w*)[^\w{]*;",
    ))
    .expect("valid typedef regex")
});

/// Matcher for block, function-pointer and plain typedefs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedefMatcher;

/// Whether `text` opens more parentheses than it closes.
fn has_open_paren(text: &str) -> bool {
    let depth = text.chars().fold(0_i32, |depth, c| match c {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    });
    depth > 0
}

impl Matcher for TypedefMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Typedef
    }

    fn scrub(&self) -> Scrub {
        Scrub::Comments
    }

    fn find(&self, text: &str) -> Vec<String> {
        let mut symbols = Vec::new();
        for caps in TYPEDEF_RE.captures_iter(text) {
            if let Some(callable) = caps.name("callable") {
                symbols.push(callable.as_str().to_string());
                continue;
            }
            let Some(alias) = caps.name("alias") else {
                continue;
            };
            let lead = &text[caps.get(0).map_or(alias.start(), |m| m.start())..alias.start()];
            if has_open_paren(lead) {
                tracing::trace!(alias = alias.as_str(), "typedef alias inside parentheses");
                continue;
            }
            symbols.push(alias.as_str().to_string());
        }
        symbols
    }
}
