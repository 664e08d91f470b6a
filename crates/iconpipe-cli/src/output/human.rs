//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use iconpipe_core::ExtractionReport;
use iconpipe_core::IconRecord;
use iconpipe_core::PipelineEvent;
use std::path::Path;
use std::path::PathBuf;

/// Results go to stdout so they can be piped; progress and errors to stderr.
pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;

        if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn write_success(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_new_icons(&self, icons: &[IconRecord]) -> Result<()> {
        if icons.is_empty() {
            if !self.quiet {
                let _ = self.err_term.write_line("No new icons found");
            }
            return Ok(());
        }

        for icon in icons {
            let _ = self.term.write_line(&icon.name);
        }
        Ok(())
    }

    fn format_svg_paths(&self, paths: &[PathBuf]) -> Result<()> {
        for path in paths {
            let _ = self.term.write_line(&path.display().to_string());
        }
        if self.verbose {
            let _ = self
                .err_term
                .write_line(&format!("{} SVG files", paths.len()));
        }
        Ok(())
    }

    fn format_extraction_result(
        &self,
        output_dir: &Path,
        report: &ExtractionReport,
        renamed: bool,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_success(&format!("Extraction complete: {}", output_dir.display()));

        let _ = self
            .term
            .write_line(&format!("  Files extracted: {}", report.files_extracted()));
        let _ = self.term.write_line(&format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written)
        ));
        let archive_state = if report.archive_deleted {
            "deleted"
        } else {
            "kept"
        };
        let _ = self
            .term
            .write_line(&format!("  Archive: {archive_state}"));
        if renamed {
            let _ = self.term.write_line("  Renamed: icomoon.json, devicon.css");
        }

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }

    fn format_rename_result(&self, dir: &Path) -> Result<()> {
        if !self.quiet {
            self.write_success(&format!("Files renamed in {}", dir.display()));
        }
        Ok(())
    }

    fn format_screenshot_folder(&self, folder: &Path) -> Result<()> {
        let _ = self.term.write_line(&folder.display().to_string());
        Ok(())
    }

    fn format_event(&self, event: &PipelineEvent) {
        if self.quiet {
            return;
        }
        if matches!(event, PipelineEvent::EntryExtracted { .. }) && !self.verbose {
            return;
        }

        let line = event.to_string();
        if self.use_colors {
            let _ = self.err_term.write_line(&style(line).dim().to_string());
        } else {
            let _ = self.err_term.write_line(&line);
        }
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }
}
