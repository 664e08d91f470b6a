//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use iconpipe_core::ExtractionReport;
use iconpipe_core::IconRecord;
use iconpipe_core::PipelineEvent;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

pub struct JsonFormatter {
    operation: &'static str,
}

impl JsonFormatter {
    /// `operation` names the command in the error envelope.
    pub fn new(operation: &'static str) -> Self {
        Self { operation }
    }

    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_new_icons(&self, icons: &[IconRecord]) -> Result<()> {
        Self::output(&JsonOutput::success("new-icons", icons))
    }

    fn format_svg_paths(&self, paths: &[PathBuf]) -> Result<()> {
        let data: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        Self::output(&JsonOutput::success("svg-paths", data))
    }

    fn format_extraction_result(
        &self,
        output_dir: &Path,
        report: &ExtractionReport,
        renamed: bool,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct ExtractionOutput {
            output_dir: String,
            files: Vec<String>,
            directories_created: usize,
            bytes_written: u64,
            archive_deleted: bool,
            renamed: bool,
            duration_ms: u128,
        }

        let data = ExtractionOutput {
            output_dir: output_dir.display().to_string(),
            files: report
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            archive_deleted: report.archive_deleted,
            renamed,
            duration_ms: report.duration.as_millis(),
        };

        Self::output(&JsonOutput::success("extract", data))
    }

    fn format_rename_result(&self, dir: &Path) -> Result<()> {
        #[derive(Serialize)]
        struct RenameOutput {
            icomoon_json: String,
            devicon_css: String,
        }

        let data = RenameOutput {
            icomoon_json: dir.join("icomoon.json").display().to_string(),
            devicon_css: dir.join("devicon.css").display().to_string(),
        };
        Self::output(&JsonOutput::success("rename", data))
    }

    fn format_screenshot_folder(&self, folder: &Path) -> Result<()> {
        #[derive(Serialize)]
        struct ScreenshotOutput {
            path: String,
        }

        let data = ScreenshotOutput {
            path: folder.display().to_string(),
        };
        Self::output(&JsonOutput::success("screenshots", data))
    }

    // Diagnostics go to stderr so stdout stays one JSON document.
    fn format_event(&self, event: &PipelineEvent) {
        if matches!(event, PipelineEvent::EntryExtracted { .. }) {
            return;
        }
        let _ = writeln!(io::stderr(), "{event}");
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error(self.operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
