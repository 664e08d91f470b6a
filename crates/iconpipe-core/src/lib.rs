//! Icon manifest diffing and icon-font archive handling.
//!
//! `iconpipe-core` holds the steps of an icon-font build that run around the
//! font generation service:
//!
//! 1. [`find_new_icons`]: icons in `devicon.json` with no glyph in
//!    `icomoon.json` yet.
//! 2. [`get_svg_paths`]: the SVG files of those icons, honoring aliases.
//! 3. [`extract_files`]: the fonts, stylesheet and selection manifest out of
//!    the service's export archive.
//! 4. [`rename_extracted_files`] and [`create_screenshot_folder`]: final
//!    layout for consumers of the build.
//!
//! Operations report progress through a [`PipelineObserver`] instead of
//! printing.
//!
//! # Examples
//!
//! ```no_run
//! use iconpipe_core::TracingObserver;
//! use iconpipe_core::find_new_icons_in_files;
//! use iconpipe_core::get_svg_paths;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let new_icons = find_new_icons_in_files("devicon.json", "icomoon.json")?;
//! let svgs = get_svg_paths(&new_icons, "icons", &mut TracingObserver)?;
//! println!("{} SVGs to upload", svgs.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod config;
pub mod diff;
pub mod error;
pub mod manifest;
pub mod observer;
pub mod paths;
pub mod rename;
pub mod report;
pub mod screenshot;
#[doc(hidden)]
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use archive::extract_files;
pub use config::ExtractConfig;
pub use diff::find_new_icons;
pub use diff::find_new_icons_in_files;
pub use error::PipelineError;
pub use error::Result;
pub use manifest::IcomoonManifest;
pub use manifest::IconRecord;
pub use manifest::load_icomoon_manifest;
pub use manifest::load_icon_manifest;
pub use observer::EventLog;
pub use observer::NoopObserver;
pub use observer::PipelineEvent;
pub use observer::PipelineObserver;
pub use observer::TracingObserver;
pub use paths::get_svg_paths;
pub use rename::rename_extracted_files;
pub use report::ExtractionReport;
pub use screenshot::create_screenshot_folder;
