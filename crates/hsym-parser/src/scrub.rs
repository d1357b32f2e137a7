//! Comment and preprocessor scrubbing.
//!
//! Matchers never see symbol-like text that lives inside a comment. Block
//! comments are non-nesting and end at the first `*/`. A removed block comment
//! leaves a single space behind so that removal cannot splice a `/` and a `/`
//! into a new line comment.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").expect("valid comment regex"));

static PREPROCESSOR_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#[^\n]*").expect("valid preprocessor regex"));

/// Preprocessing a matcher requires before its pattern runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scrub {
    None,
    Comments,
    Preprocessor,
    CommentsAndPreprocessor,
}

impl Scrub {
    /// Apply this preprocessing step to `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::None => Cow::Borrowed(text),
            Self::Comments => scrub_comments(text),
            Self::Preprocessor => scrub_preprocessor(text),
            Self::CommentsAndPreprocessor => {
                Cow::Owned(scrub_preprocessor(&scrub_comments(text)).into_owned())
            }
        }
    }
}

/// Remove `//` line comments and `/* ... */` block comments.
///
/// Whichever comment opener appears first wins, so `// a /* b` is a line
/// comment and `/* a // b */` is a single block comment. Line breaks that end
/// line comments are kept.
#[must_use]
pub fn scrub_comments(text: &str) -> Cow<'_, str> {
    COMMENT_RE.replace_all(text, |caps: &regex::Captures<'_>| {
        if caps[0].starts_with("/*") { " " } else { "" }
    })
}

/// Remove every line whose first non-blank character is `#`.
///
/// The line break itself survives, keeping line structure intact.
#[must_use]
pub fn scrub_preprocessor(text: &str) -> Cow<'_, str> {
    PREPROCESSOR_LINE_RE.replace_all(text, "")
}
