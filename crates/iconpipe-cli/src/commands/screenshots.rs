//! Screenshots command implementation.

use crate::cli::ScreenshotsArgs;
use crate::diagnostics::CliObserver;
use crate::error::add_pipeline_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use iconpipe_core::create_screenshot_folder;

pub fn execute(args: &ScreenshotsArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut observer = CliObserver::new(formatter);
    let folder = add_pipeline_context(create_screenshot_folder(
        &args.dir,
        Some(args.name.as_str()),
        &mut observer,
    ))?;

    formatter.format_screenshot_folder(&folder)
}
