//! `#define` macro names.

use std::sync::LazyLock;

use hsym_core::MatcherKind;
use regex::Regex;

use super::{Matcher, dedup_in_order};
use crate::scrub::Scrub;

pub static DEFINE: DefineMatcher = DefineMatcher;

// Only the name matters; the rest of the logical line, continuation
// backslashes included, is never inspected.
static DEFINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[ \t]*define\s+(\w+)").expect("valid define regex"));

/// Matcher for object-like and function-like macro definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefineMatcher;

impl Matcher for DefineMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Define
    }

    fn scrub(&self) -> Scrub {
        Scrub::Comments
    }

    fn find(&self, text: &str) -> Vec<String> {
        dedup_in_order(
            DEFINE_RE
                .captures_iter(text)
                .map(|caps| caps[1].to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(source: &str) -> Vec<String> {
        DEFINE.extract(source)
    }

    #[test]
    fn object_and_function_like_macros() {
        let source = r"
        #define YPDistanceInMetersInvalid DBL_MAX
        #define kButtonHeight 37
        #define YPRangeZero NSMakeRange(0, 0)
        #define kBusinessUpdaterDaysStale -7 // Days before business becomes stale
        #define YPDebugSearch(...) [[YPDebug searchLogger] logFuncDebug:__func__ msg:__VA_ARGS__]
        #define YPDemoMode (YES)
        #define PROPERTY(propName) NSStringFromSelector(@selector(propName))
        ";
        assert_eq!(
            parse(source),
            vec![
                "YPDistanceInMetersInvalid",
                "kButtonHeight",
                "YPRangeZero",
                "kBusinessUpdaterDaysStale",
                "YPDebugSearch",
                "YPDemoMode",
                "PROPERTY",
            ]
        );
    }

    #[test]
    fn multiline_macro_yields_only_its_name() {
        let source = r"
        #define YP_GA_SET_DIMENSION(gaTracker, value, dimension)       \
          do {                                                         \
            if (value) {                                               \
              [self.cleared addObject:@(dimension)];                   \
            }                                                          \
          } while (0)
        ";
        assert_eq!(parse(source), vec!["YP_GA_SET_DIMENSION"]);
    }

    #[test]
    fn spaced_directive() {
        assert_eq!(parse("#  define GUARD_H\n"), vec!["GUARD_H"]);
    }

    #[test]
    fn duplicate_definitions_collapse() {
        let source = "#ifndef X\n#define X 1\n#else\n#define X 2\n#endif\n";
        assert_eq!(parse(source), vec!["X"]);
    }

    #[test]
    fn commented_define_is_ignored() {
        assert!(parse("// #define OLD 1\n/* #define OLDER 2 */").is_empty());
    }

    #[test]
    fn properties_are_not_macros() {
        let source = r"
        @interface YPWeeklyYelp : NSObject
        @property (readonly, copy, nonatomic) NSString *marketId;
        + (YPWeeklyYelp *)weeklyYelpFromJSONDictionary:(NSDictionary *)dict;
        @end
        ";
        assert!(parse(source).is_empty());
    }
}
