//! Extraction operation reporting.

use std::path::PathBuf;
use std::time::Duration;

/// Report of an icon-font archive extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Files written to the destination, in extraction order.
    pub files: Vec<PathBuf>,

    /// Number of directory entries created.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Whether the source archive was removed.
    pub archive_deleted: bool,

    /// Duration of the extraction.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files written.
    #[must_use]
    pub fn files_extracted(&self) -> usize {
        self.files.len()
    }

    /// Returns total number of entries processed.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files.len() + self.directories_created
    }
}
