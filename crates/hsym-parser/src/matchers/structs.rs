//! Struct names and bitfield members.

use std::sync::LazyLock;

use hsym_core::MatcherKind;
use regex::Regex;

use super::Matcher;
use crate::scrub::{Scrub, scrub_preprocessor};

pub static STRUCT: StructMatcher = StructMatcher;

static STRUCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bstruct\b[^{;]*?\{(?P<body>[^}]+?)\}\W*?(?:(?P<name>\w+)\W*)?;")
        .expect("valid struct regex")
});

// `name : width`; plain `type name;` members are not recognized.
static BITFIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z_]\w*)\s*:").expect("valid bitfield regex"));

/// Matcher for `struct { ... } Name;`, including its `typedef` form.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructMatcher;

impl StructMatcher {
    /// Bitfield member names in a struct body.
    #[must_use]
    pub fn members(body: &str) -> Vec<String> {
        let body = scrub_preprocessor(body);
        BITFIELD_RE
            .captures_iter(&body)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

impl Matcher for StructMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Struct
    }

    fn scrub(&self) -> Scrub {
        Scrub::Comments
    }

    fn find(&self, text: &str) -> Vec<String> {
        let mut symbols = Vec::new();
        for caps in STRUCT_RE.captures_iter(text) {
            if let Some(name) = caps.name("name") {
                symbols.push(name.as_str().to_string());
            }
            symbols.extend(Self::members(&caps["body"]));
        }
        symbols
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(source: &str) -> Vec<String> {
        STRUCT.extract(source)
    }

    #[test]
    fn typedef_struct_with_bitfields() {
        let source = r"
        // Options for displaying localized distances
        typedef struct {
          unsigned int appendUnits : 1;               // If YES, append units
          unsigned int leadingZero : 1;               // If YES, allow leading zero (0.3 instead of .3)
          unsigned int newlineSeparatorNonMetric : 1; // If YES, add newline in between value and units
          unsigned int unicodeFractions : 1;          // If YES, show unicode fractions
          unsigned int useLabels : 1;
          unsigned int hideZero : 1;        // If YES and the value evaluates to 0, then return empty string
          unsigned int abbreviateUnits : 1; // If YES use unit abbreviations (i.e. miles -> mi)
        } YPLocalizationDistanceOptions;
        ";
        assert_eq!(
            parse(source),
            vec![
                "YPLocalizationDistanceOptions",
                "appendUnits",
                "leadingZero",
                "newlineSeparatorNonMetric",
                "unicodeFractions",
                "useLabels",
                "hideZero",
                "abbreviateUnits",
            ]
        );
    }

    #[test]
    fn plain_members_are_not_symbols() {
        let source = "struct Point {\n  int x;\n  int y;\n};";
        assert!(parse(source).is_empty());
    }

    #[test]
    fn anonymous_struct_yields_members_only() {
        let source = "struct {\n  unsigned flag : 1;\n};";
        assert_eq!(parse(source), vec!["flag"]);
    }

    #[test]
    fn guarded_members() {
        let source = r"
        typedef struct {
          unsigned int a : 1;
        #if DEBUG
          unsigned int b : 1;
        #endif
        } Flags;
        ";
        assert_eq!(parse(source), vec!["Flags", "a", "b"]);
    }

    #[test]
    fn struct_in_a_signature_does_not_reach_a_later_body() {
        let source = "- (struct CGPoint)origin;\nenum {\n  kA : 1\n};";
        assert!(parse(source).is_empty());
    }

    #[test]
    fn enums_are_not_structs() {
        let source = "typedef NS_ENUM(NSInteger, E) { A = 0, B = 1 };";
        assert!(parse(source).is_empty());
    }

    #[test]
    fn members_helper() {
        assert_eq!(
            StructMatcher::members("int a : 2;\n#define X :\nint _b:1;"),
            vec!["a", "_b"]
        );
    }
}
