//! Output folder for icon screenshots.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::PipelineEvent;
use crate::PipelineObserver;
use crate::Result;
use crate::config::DEFAULT_SCREENSHOT_FOLDER;
use crate::types::ExistingDir;

/// Creates the screenshot folder `name` inside `dir` and returns its path.
///
/// `dir` is resolved to an absolute path first. `name` defaults to
/// [`DEFAULT_SCREENSHOT_FOLDER`]. A folder that already exists is reported
/// through `observer` and returned like a fresh one, so repeated calls yield
/// the same path.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidDirectory`](crate::PipelineError::InvalidDirectory)
/// if `dir` is not an existing directory, or an I/O error if the folder
/// cannot be created.
///
/// # Examples
///
/// ```no_run
/// use iconpipe_core::NoopObserver;
/// use iconpipe_core::create_screenshot_folder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let folder = create_screenshot_folder(".", None, &mut NoopObserver)?;
/// println!("{}", folder.display());
/// # Ok(())
/// # }
/// ```
pub fn create_screenshot_folder<P: AsRef<Path>>(
    dir: P,
    name: Option<&str>,
    observer: &mut dyn PipelineObserver,
) -> Result<PathBuf> {
    let base = ExistingDir::resolve(dir)?;
    let name = name.unwrap_or(DEFAULT_SCREENSHOT_FOLDER).trim_end_matches('/');
    let folder = base.join(name);

    match fs::create_dir(&folder) {
        Ok(()) => observer.on_event(&PipelineEvent::FolderCreated {
            path: folder.clone(),
        }),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            observer.on_event(&PipelineEvent::FolderAlreadyExists {
                path: folder.clone(),
            });
        }
        Err(e) => return Err(e.into()),
    }

    Ok(folder)
}
