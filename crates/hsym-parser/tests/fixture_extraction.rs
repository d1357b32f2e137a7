use hsym_parser::{MatcherKind, extract, extract_all, extract_tagged};
use pretty_assertions::assert_eq;
use rstest::rstest;

const HEADER: &str = include_str!("fixtures/YPBusinessController.h");

#[rstest]
#[case::constant(
    MatcherKind::Constant,
    &[
        "YPBusinessDidLoadNotification",
        "YPBusinessDidFailNotification",
        "kYPBusinessHeaderHeight",
    ]
)]
#[case::define(MatcherKind::Define, &["kYPBusinessCacheSize", "YPBusinessLog"])]
#[case::enumeration(
    MatcherKind::Enum,
    &[
        "YPBusinessSection",
        "YPBusinessSectionHeader",
        "YPBusinessSectionReviews",
        "YPBusinessSectionDebug",
        "YPBusinessOptions",
        "YPBusinessOptionsNone",
        "YPBusinessOptionsShowMap",
        "YPBusinessOptionsShowPhotos",
        "YPBusinessLegacyA",
        "YPBusinessLegacyB",
    ]
)]
#[case::structure(MatcherKind::Struct, &["YPBusinessFlags", "hasPhotos", "isClaimed"])]
#[case::typedef(MatcherKind::Typedef, &["YPBusinessLegacy", "YPBusinessCompletionBlock"])]
#[case::function(
    MatcherKind::Function,
    &["YPNSStringFromBusinessSection", "YPBusinessSectionIsValid"]
)]
#[case::interface(MatcherKind::Interface, &["YPBusinessController"])]
#[case::protocol(MatcherKind::Protocol, &["YPBusinessControllerDelegate"])]
fn fixture_symbols_by_kind(#[case] kind: MatcherKind, #[case] expected: &[&str]) {
    assert_eq!(extract(kind, HEADER), expected);
}

#[test]
fn union_is_the_concatenation_of_every_kind() {
    let concatenated: Vec<String> = MatcherKind::ALL
        .into_iter()
        .flat_map(|kind| extract(kind, HEADER))
        .collect();
    assert_eq!(extract_all(HEADER), concatenated);
    assert_eq!(concatenated.len(), 24);
}

#[test]
fn forward_declarations_never_surface() {
    let all = extract_all(HEADER);
    for forward in ["Business", "YKError", "YPMapBusinessAnnotation", "YPBusinessForward"] {
        assert!(!all.iter().any(|s| s == forward), "{forward} leaked");
    }
}

#[test]
fn category_methods_and_properties_never_surface() {
    let all = extract_all(HEADER);
    for member in ["sendPageView", "delegate", "business", "cancel", "sharedController"] {
        assert!(!all.iter().any(|s| s == member), "{member} leaked");
    }
}

#[test]
fn tagged_symbols_carry_their_kind() {
    let tagged = extract_tagged(HEADER);
    let defines: Vec<_> = tagged
        .iter()
        .filter(|s| s.kind == MatcherKind::Define)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(defines, vec!["kYPBusinessCacheSize", "YPBusinessLog"]);
}
