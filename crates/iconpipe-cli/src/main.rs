//! Iconpipe CLI - Command-line helper for icon-font build pipelines.

mod cli;
mod commands;
mod diagnostics;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    logging::init();

    let operation = match &cli.command {
        cli::Commands::NewIcons(_) => "new-icons",
        cli::Commands::SvgPaths(_) => "svg-paths",
        cli::Commands::Extract(_) => "extract",
        cli::Commands::Rename(_) => "rename",
        cli::Commands::Screenshots(_) => "screenshots",
        cli::Commands::Completion(_) => "completion",
    };
    let formatter = output::create_formatter(operation, cli.json, cli.verbose, cli.quiet);

    let result = match &cli.command {
        cli::Commands::NewIcons(args) => commands::new_icons::execute(args, &*formatter),
        cli::Commands::SvgPaths(args) => commands::svg_paths::execute(args, &*formatter),
        cli::Commands::Extract(args) => commands::extract::execute(args, &*formatter),
        cli::Commands::Rename(args) => commands::rename::execute(args, &*formatter),
        cli::Commands::Screenshots(args) => commands::screenshots::execute(args, &*formatter),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "{operation} failed");
            formatter.format_error(&err);
            ExitCode::FAILURE
        }
    }
}
