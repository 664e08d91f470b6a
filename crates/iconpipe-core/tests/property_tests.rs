//! Property-based tests for manifest diffing.
//!
//! These tests use proptest to generate arbitrary manifests and verify the
//! prefix-matching rule holds across a wide range of names.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use iconpipe_core::IcomoonManifest;
use iconpipe_core::IconRecord;
use iconpipe_core::diff::is_published;
use iconpipe_core::find_new_icons;
use proptest::prelude::*;

fn records(names: &[String]) -> Vec<IconRecord> {
    names
        .iter()
        .map(|name| IconRecord::new(name.clone(), ["plain"]))
        .collect()
}

fn names(records: &[IconRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

proptest! {
    /// Icons whose names never prefix a published glyph are all new.
    #[test]
    fn prop_disjoint_manifests_keep_everything(
        icons in prop::collection::vec("a[a-z0-9]{0,8}", 0..20),
        glyphs in prop::collection::vec("b[a-z0-9]{0,8}-[a-z]{1,8}", 0..20),
    ) {
        let icons = records(&icons);
        let published = IcomoonManifest::from_names(glyphs);
        prop_assert_eq!(find_new_icons(&icons, &published), icons);
    }

    /// Publishing one `<name>-<variant>` glyph per icon leaves nothing new.
    #[test]
    fn prop_fully_published_is_empty(
        icons in prop::collection::vec("[a-z][a-z0-9]{0,8}", 0..20),
        variant in "[a-z]{1,10}",
    ) {
        let glyphs: Vec<String> = icons.iter().map(|name| format!("{name}-{variant}")).collect();
        let icons = records(&icons);
        let published = IcomoonManifest::from_names(glyphs);
        prop_assert!(find_new_icons(&icons, &published).is_empty());
    }

    /// A glyph named exactly like the icon, without a dash, never counts.
    #[test]
    fn prop_exact_names_do_not_suppress(
        icons in prop::collection::vec("[a-z][a-z0-9]{0,8}", 0..20),
    ) {
        let expected = records(&icons);
        let published = IcomoonManifest::from_names(icons);
        prop_assert_eq!(find_new_icons(&expected, &published), expected);
    }

    /// The result is the in-order subsequence of unpublished icons.
    #[test]
    fn prop_result_is_ordered_filter(
        icons in prop::collection::vec("[a-c]{1,3}", 0..20),
        glyphs in prop::collection::vec("[a-c]{1,3}(-[a-z]{1,3})?", 0..20),
    ) {
        let icons = records(&icons);
        let published = IcomoonManifest::from_names(glyphs);

        let expected: Vec<String> = icons
            .iter()
            .filter(|r| !is_published(r, &published))
            .map(|r| r.name.clone())
            .collect();
        prop_assert_eq!(names(&find_new_icons(&icons, &published)), expected);
    }

    /// A longer icon name sharing a prefix never hides the shorter one.
    #[test]
    fn prop_name_boundary(
        short in "[a-z]{1,5}",
        tail in "[a-z]{1,5}",
        variant in "[a-z]{1,5}",
    ) {
        let long = format!("{short}{tail}");
        let icons = vec![
            IconRecord::new(short.clone(), ["plain"]),
            IconRecord::new(long.clone(), ["plain"]),
        ];
        let published = IcomoonManifest::from_names([format!("{long}-{variant}")]);

        prop_assert_eq!(names(&find_new_icons(&icons, &published)), vec![short]);
    }
}
