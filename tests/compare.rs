//! Ordering of names in `.DS_Store` records.

use kodegen_bundler_dsstore::bundler::platform::macos::dsstore::fast_unicode_compare;
use std::cmp::Ordering;

#[test]
fn test_empty_names() {
    assert_eq!(fast_unicode_compare("", ""), Ordering::Equal);
    assert_eq!(fast_unicode_compare("", "a"), Ordering::Less);
    assert_eq!(fast_unicode_compare("a", ""), Ordering::Greater);
}

#[test]
fn test_ascii_case_is_folded() {
    assert_eq!(
        fast_unicode_compare("Applications", "applications"),
        Ordering::Equal
    );
    assert_eq!(fast_unicode_compare("ABC", "abd"), Ordering::Less);
    assert_eq!(fast_unicode_compare("Zebra", "apple"), Ordering::Greater);
}

#[test]
fn test_prefix_sorts_first() {
    assert_eq!(fast_unicode_compare("App", "Apple"), Ordering::Less);
    assert_eq!(fast_unicode_compare("Apple", "App"), Ordering::Greater);
}

#[test]
fn test_self_marker_sorts_before_names() {
    assert_eq!(fast_unicode_compare(".", "Applications"), Ordering::Less);
    assert_eq!(fast_unicode_compare(".", "MyApp.app"), Ordering::Less);
}

#[test]
fn test_entry_type_codes() {
    // BKGD < bwsp < icvp < Iloc < vSrn once case is folded
    let codes = ["BKGD", "bwsp", "icvp", "Iloc", "vSrn"];
    for pair in codes.windows(2) {
        assert_eq!(
            fast_unicode_compare(pair[0], pair[1]),
            Ordering::Less,
            "{} should sort before {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_combining_marks() {
    // Decomposed e + acute compares through the base letter
    assert_eq!(fast_unicode_compare("e\u{301}", "f"), Ordering::Less);
    assert_eq!(fast_unicode_compare("e\u{301}", "e"), Ordering::Greater);
    assert_eq!(
        fast_unicode_compare("E\u{301}cole", "e\u{301}cole"),
        Ordering::Equal
    );
}

#[test]
fn test_precomposed_letters_are_not_folded() {
    assert_eq!(fast_unicode_compare("\u{C9}", "\u{E9}"), Ordering::Less);
}

#[test]
fn test_letters_without_decomposition_are_folded() {
    assert_eq!(fast_unicode_compare("\u{C6}", "\u{E6}"), Ordering::Equal);
    assert_eq!(fast_unicode_compare("\u{3A3}", "\u{3C3}"), Ordering::Equal);
    assert_eq!(fast_unicode_compare("\u{414}", "\u{434}"), Ordering::Equal);
}

#[test]
fn test_ignorable_characters_are_skipped() {
    assert_eq!(fast_unicode_compare("a\u{200D}b", "ab"), Ordering::Equal);
    assert_eq!(fast_unicode_compare("\u{FEFF}name", "name"), Ordering::Equal);
    assert_eq!(fast_unicode_compare("a\u{202A}", "a"), Ordering::Equal);
}

#[test]
fn test_nul_sorts_last() {
    assert_eq!(fast_unicode_compare("a\0", "ab"), Ordering::Greater);
    assert_eq!(fast_unicode_compare("a\0", "a\u{FFFD}"), Ordering::Greater);
}

#[test]
fn test_antisymmetric_over_distinct_names() {
    let names = [
        ".",
        ".background",
        "Applications",
        "MyApp.app",
        "README.txt",
        "e\u{301}cole",
        "ecole",
        "\u{C9}cole",
        "\u{3A3}igma",
        "z",
        "a\0",
    ];

    for a in &names {
        assert_eq!(fast_unicode_compare(a, a), Ordering::Equal);
        for b in &names {
            if a == b {
                continue;
            }
            let forward = fast_unicode_compare(a, b);
            let backward = fast_unicode_compare(b, a);
            assert_ne!(forward, Ordering::Equal, "{a:?} vs {b:?}");
            assert_eq!(forward, backward.reverse(), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn test_sorting_is_transitive() {
    let mut names = vec!["zeta", "Applications", "MyApp.app", ".", "alpha", "Beta"];
    names.sort_by(|a, b| fast_unicode_compare(a, b));
    assert_eq!(
        names,
        vec![".", "alpha", "Applications", "Beta", "MyApp.app", "zeta"]
    );
}
