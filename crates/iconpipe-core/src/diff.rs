//! Finding icons that are not in the published font yet.

use std::path::Path;

use crate::Result;
use crate::manifest::IcomoonManifest;
use crate::manifest::IconRecord;
use crate::manifest::load_icomoon_manifest;
use crate::manifest::load_icon_manifest;

/// Returns `true` if any published glyph belongs to `record`.
///
/// A glyph belongs to an icon when its name starts with `"<icon>-"`. A glyph
/// named exactly `"<icon>"` does not count, and `"a"` never matches
/// `"ab-solid"`.
///
/// # Examples
///
/// ```
/// use iconpipe_core::IcomoonManifest;
/// use iconpipe_core::IconRecord;
/// use iconpipe_core::diff::is_published;
///
/// let published = IcomoonManifest::from_names(["rust-plain"]);
/// assert!(is_published(&IconRecord::new("rust", ["plain"]), &published));
/// assert!(!is_published(&IconRecord::new("ru", ["plain"]), &published));
/// ```
#[must_use]
pub fn is_published(record: &IconRecord, published: &IcomoonManifest) -> bool {
    published.names().any(|name| {
        name.strip_prefix(record.name.as_str())
            .is_some_and(|rest| rest.starts_with('-'))
    })
}

/// Returns the records of `icons` that have no glyph in `published`, in
/// manifest order.
///
/// An empty result is a valid outcome, not an error.
#[must_use]
pub fn find_new_icons(icons: &[IconRecord], published: &IcomoonManifest) -> Vec<IconRecord> {
    icons
        .iter()
        .filter(|record| !is_published(record, published))
        .cloned()
        .collect()
}

/// Loads both manifests and diffs them.
///
/// # Examples
///
/// ```no_run
/// use iconpipe_core::find_new_icons_in_files;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let new_icons = find_new_icons_in_files("devicon.json", "icomoon.json")?;
/// for icon in &new_icons {
///     println!("{}", icon.name);
/// }
/// # Ok(())
/// # }
/// ```
pub fn find_new_icons_in_files<P: AsRef<Path>, Q: AsRef<Path>>(
    devicon_json: P,
    icomoon_json: Q,
) -> Result<Vec<IconRecord>> {
    let icons = load_icon_manifest(devicon_json)?;
    let published = load_icomoon_manifest(icomoon_json)?;
    let new_icons = find_new_icons(&icons, &published);
    tracing::debug!(
        total = icons.len(),
        published = published.icons.len(),
        new = new_icons.len(),
        "manifests diffed"
    );
    Ok(new_icons)
}
