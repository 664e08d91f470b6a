//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iconpipe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List icons of devicon.json that are not in icomoon.json yet
    NewIcons(NewIconsArgs),
    /// List the SVG files of new icons
    SvgPaths(SvgPathsArgs),
    /// Extract fonts and stylesheet from an icon-font export archive
    Extract(ExtractArgs),
    /// Rename extracted files to icomoon.json and devicon.css
    Rename(RenameArgs),
    /// Create the screenshot output folder
    Screenshots(ScreenshotsArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct NewIconsArgs {
    /// Path to devicon.json
    #[arg(value_name = "DEVICON_JSON")]
    pub devicon_json: PathBuf,

    /// Path to icomoon.json
    #[arg(value_name = "ICOMOON_JSON")]
    pub icomoon_json: PathBuf,
}

#[derive(clap::Args)]
pub struct SvgPathsArgs {
    /// Path to devicon.json
    #[arg(value_name = "DEVICON_JSON")]
    pub devicon_json: PathBuf,

    /// Path to icomoon.json
    #[arg(value_name = "ICOMOON_JSON")]
    pub icomoon_json: PathBuf,

    /// Folder holding one subfolder per icon
    #[arg(value_name = "ICONS_FOLDER")]
    pub icons_folder: PathBuf,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Keep the archive after extraction
    #[arg(long)]
    pub keep_archive: bool,

    /// Rename extracted files afterwards
    #[arg(long)]
    pub rename: bool,
}

#[derive(clap::Args)]
pub struct RenameArgs {
    /// Directory holding the extracted files
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

#[derive(clap::Args)]
pub struct ScreenshotsArgs {
    /// Directory to create the folder in
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Name of the screenshot folder
    #[arg(long, value_name = "NAME", default_value = iconpipe_core::config::DEFAULT_SCREENSHOT_FOLDER)]
    pub name: String,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
