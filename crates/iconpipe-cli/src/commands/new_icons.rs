//! New-icons command implementation.

use crate::cli::NewIconsArgs;
use crate::error::add_pipeline_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use iconpipe_core::find_new_icons_in_files;

pub fn execute(args: &NewIconsArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let new_icons = add_pipeline_context(find_new_icons_in_files(
        &args.devicon_json,
        &args.icomoon_json,
    ))?;

    formatter.format_new_icons(&new_icons)
}
