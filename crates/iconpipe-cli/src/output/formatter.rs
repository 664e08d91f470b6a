//! Output formatter trait for CLI results.

use anyhow::Result;
use iconpipe_core::ExtractionReport;
use iconpipe_core::IconRecord;
use iconpipe_core::PipelineEvent;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the icons found by the manifest diff
    fn format_new_icons(&self, icons: &[IconRecord]) -> Result<()>;

    /// Format resolved SVG paths
    fn format_svg_paths(&self, paths: &[PathBuf]) -> Result<()>;

    /// Format extraction result
    fn format_extraction_result(
        &self,
        output_dir: &Path,
        report: &ExtractionReport,
        renamed: bool,
    ) -> Result<()>;

    /// Format rename result
    fn format_rename_result(&self, dir: &Path) -> Result<()>;

    /// Format the screenshot folder path
    fn format_screenshot_folder(&self, folder: &Path) -> Result<()>;

    /// Show a pipeline event while an operation runs
    fn format_event(&self, event: &PipelineEvent);

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}

impl JsonOutput<()> {
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
