//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::diagnostics::CliObserver;
use crate::error::add_pipeline_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use iconpipe_core::ExtractConfig;
use iconpipe_core::extract_files;
use iconpipe_core::rename_extracted_files;
use std::env;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let config = ExtractConfig::default().with_delete_archive(!args.keep_archive);
    let mut observer = CliObserver::new(formatter);

    let report = add_pipeline_context(extract_files(
        &args.archive,
        &output_dir,
        &config,
        &mut observer,
    ))?;

    if args.rename {
        add_pipeline_context(rename_extracted_files(&output_dir, &mut observer))?;
    }

    formatter.format_extraction_result(&output_dir, &report, args.rename)
}
