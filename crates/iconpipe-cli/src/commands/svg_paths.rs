//! SVG-paths command implementation.

use crate::cli::SvgPathsArgs;
use crate::diagnostics::CliObserver;
use crate::error::add_pipeline_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use iconpipe_core::find_new_icons_in_files;
use iconpipe_core::get_svg_paths;

pub fn execute(args: &SvgPathsArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let new_icons = add_pipeline_context(find_new_icons_in_files(
        &args.devicon_json,
        &args.icomoon_json,
    ))?;
    tracing::debug!(count = new_icons.len(), "resolving SVG paths");

    let mut observer = CliObserver::new(formatter);
    let paths = add_pipeline_context(get_svg_paths(
        &new_icons,
        &args.icons_folder,
        &mut observer,
    ))?;

    formatter.format_svg_paths(&paths)
}
