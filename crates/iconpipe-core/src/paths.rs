//! Resolving the SVG files of new icons.

use std::path::Path;
use std::path::PathBuf;

use crate::PipelineError;
use crate::PipelineEvent;
use crate::PipelineObserver;
use crate::Result;
use crate::manifest::IconRecord;
use crate::types::ExistingDir;

/// Returns the SVG path of every font version of `icons`.
///
/// Icons live in `<icons_folder>/<name>/<name>-<version>.svg`. Versions
/// listed as aliases have no file of their own; they are skipped and
/// reported through `observer`. The result is ordered by icon, then by font
/// version.
///
/// # Errors
///
/// - [`PipelineError::InvalidDirectory`] if an icon's folder is missing.
/// - [`PipelineError::MissingFile`] if a non-aliased version has no SVG.
///
/// Either error aborts the whole call; no partial list is returned.
///
/// # Examples
///
/// ```no_run
/// use iconpipe_core::IconRecord;
/// use iconpipe_core::TracingObserver;
/// use iconpipe_core::get_svg_paths;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let icons = vec![IconRecord::new("rust", ["plain", "original"])];
/// let paths = get_svg_paths(&icons, "icons", &mut TracingObserver)?;
/// # Ok(())
/// # }
/// ```
pub fn get_svg_paths<P: AsRef<Path>>(
    icons: &[IconRecord],
    icons_folder: P,
    observer: &mut dyn PipelineObserver,
) -> Result<Vec<PathBuf>> {
    let icons_folder = icons_folder.as_ref();
    let mut paths = Vec::new();

    for icon in icons {
        let folder = ExistingDir::new(icons_folder.join(&icon.name))?;

        for version in &icon.versions.font {
            if icon.is_alias(version) {
                observer.on_event(&PipelineEvent::AliasSkipped {
                    icon: icon.name.clone(),
                    version: version.clone(),
                });
                continue;
            }

            let path = folder.join(icon.svg_file_name(version));
            if !path.exists() {
                return Err(PipelineError::MissingFile { path });
            }
            paths.push(path);
        }
    }

    Ok(paths)
}
