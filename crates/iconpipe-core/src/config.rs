//! Fixed file layout of the icon-font export and extraction settings.

/// Entries pulled out of the icon-font export archive.
///
/// The `fonts/` directory entry comes before the files inside it.
pub const ARCHIVE_ENTRIES: [&str; 7] = [
    "selection.json",
    "fonts/",
    "fonts/devicon.ttf",
    "fonts/devicon.woff",
    "fonts/devicon.eot",
    "fonts/devicon.svg",
    "style.css",
];

/// Extracted files and the names consumers expect them under.
pub const RENAMES: [(&str, &str); 2] = [
    ("selection.json", "icomoon.json"),
    ("style.css", "devicon.css"),
];

/// Default name of the screenshot folder.
pub const DEFAULT_SCREENSHOT_FOLDER: &str = "screenshots/";

/// Settings for [`extract_files`](crate::extract_files).
///
/// # Examples
///
/// ```
/// use iconpipe_core::ExtractConfig;
///
/// let config = ExtractConfig::default();
/// assert!(config.delete_archive);
///
/// let keep = ExtractConfig::default().with_delete_archive(false);
/// assert!(!keep.delete_archive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Remove the source archive after a successful extraction.
    pub delete_archive: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            delete_archive: true,
        }
    }
}

impl ExtractConfig {
    /// Sets whether the source archive is removed afterwards.
    #[must_use]
    pub fn with_delete_archive(mut self, delete: bool) -> Self {
        self.delete_archive = delete;
        self
    }
}
