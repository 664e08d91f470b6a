//! Rename command implementation.

use crate::cli::RenameArgs;
use crate::diagnostics::CliObserver;
use crate::error::add_pipeline_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use iconpipe_core::rename_extracted_files;

pub fn execute(args: &RenameArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut observer = CliObserver::new(formatter);
    add_pipeline_context(rename_extracted_files(&args.dir, &mut observer))?;

    formatter.format_rename_result(&args.dir)
}
