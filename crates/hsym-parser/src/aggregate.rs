//! Per-file aggregation across every category.

use hsym_core::{MatcherKind, Symbol};

use crate::matchers::matcher;

/// Symbols of one category.
#[must_use]
pub fn extract(kind: MatcherKind, text: &str) -> Vec<String> {
    matcher(kind).extract(text)
}

/// Union of every matcher's output in [`MatcherKind::ALL`] order.
///
/// Each matcher's internal order is kept and duplicates across categories are
/// not removed.
#[must_use]
pub fn extract_all(text: &str) -> Vec<String> {
    MatcherKind::ALL
        .into_iter()
        .flat_map(|kind| extract(kind, text))
        .collect()
}

/// Same union as [`extract_all`], each symbol tagged with the category that
/// produced it.
#[must_use]
pub fn extract_tagged(text: &str) -> Vec<Symbol> {
    MatcherKind::ALL
        .into_iter()
        .flat_map(|kind| {
            extract(kind, text)
                .into_iter()
                .map(move |name| Symbol { name, kind })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const HEADER: &str = r"
#import <Foundation/Foundation.h>

#define kMaxRetries 3

extern NSString *const YPDidLoadNotification;

typedef NS_ENUM(NSInteger, YPState) {
  YPStateIdle = 0,
  YPStateBusy,
};

typedef struct {
  unsigned int visible : 1;
} YPFlags;

typedef void (^YPCompletion)(BOOL finished);

NSString *YPStringFromState(YPState state);

@protocol YPLoaderDelegate <NSObject>
- (void)loaderDidFinish:(id)loader;
@end

@interface YPLoader : NSObject
@property (weak, nonatomic) id<YPLoaderDelegate> delegate;
- (void)start;
@end
";

    #[test]
    fn union_follows_category_order() {
        assert_eq!(
            extract_all(HEADER),
            vec![
                "YPDidLoadNotification",
                "kMaxRetries",
                "YPState",
                "YPStateIdle",
                "YPStateBusy",
                "YPFlags",
                "visible",
                "YPCompletion",
                "YPStringFromState",
                "YPLoader",
                "YPLoaderDelegate",
            ]
        );
    }

    #[test]
    fn tags_match_the_producing_matcher() {
        let tagged = extract_tagged(HEADER);
        let names: Vec<_> = tagged.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, extract_all(HEADER));

        let kind_of = |name: &str| tagged.iter().find(|s| s.name == name).map(|s| s.kind);
        assert_eq!(kind_of("kMaxRetries"), Some(MatcherKind::Define));
        assert_eq!(kind_of("visible"), Some(MatcherKind::Struct));
        assert_eq!(kind_of("YPCompletion"), Some(MatcherKind::Typedef));
        assert_eq!(kind_of("YPLoaderDelegate"), Some(MatcherKind::Protocol));
    }

    #[test]
    fn legacy_enum_and_typedef_are_complementary() {
        let source = "enum { X, Y }; typedef NSInteger Z;";
        assert_eq!(extract(MatcherKind::Enum, source), vec!["X", "Y"]);
        assert_eq!(extract(MatcherKind::Typedef, source), vec!["Z"]);
    }

    #[test]
    fn define_and_constant_disagree_on_directives() {
        let source = "#define kFoo 1";
        assert!(extract(MatcherKind::Constant, source).is_empty());
        assert_eq!(extract(MatcherKind::Define, source), vec!["kFoo"]);
    }

    #[test]
    fn duplicates_across_categories_are_kept() {
        let source = "#define Foo 1\nvoid Foo(int x);";
        assert_eq!(extract_all(source), vec!["Foo", "Foo"]);
    }

    #[test]
    fn commented_constant_yields_nothing() {
        assert!(extract_all("// const kFoo = 1;").is_empty());
    }

    #[test]
    fn repeated_runs_are_identical() {
        assert_eq!(extract_all(HEADER), extract_all(HEADER));
        assert_eq!(extract_tagged(HEADER), extract_tagged(HEADER));
    }
}
