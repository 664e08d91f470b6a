//! Subcommand implementations.

pub mod completion;
pub mod extract;
pub mod new_icons;
pub mod rename;
pub mod screenshots;
pub mod svg_paths;
