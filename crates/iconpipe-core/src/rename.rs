//! Renaming extracted files to the names consumers expect.

use std::fs;
use std::path::Path;

use crate::PipelineError;
use crate::PipelineEvent;
use crate::PipelineObserver;
use crate::Result;
use crate::config::RENAMES;

/// Renames `selection.json` to `icomoon.json` and `style.css` to
/// `devicon.css` inside `extract_path`.
///
/// Each rename replaces an existing target atomically.
///
/// # Errors
///
/// Returns [`PipelineError::RenameFailed`] if a source file is missing or
/// the rename is refused by the OS. Renames already done are not undone.
pub fn rename_extracted_files<P: AsRef<Path>>(
    extract_path: P,
    observer: &mut dyn PipelineObserver,
) -> Result<()> {
    let extract_path = extract_path.as_ref();

    for (old, new) in RENAMES {
        let from = extract_path.join(old);
        let to = extract_path.join(new);

        if let Err(source) = fs::rename(&from, &to) {
            return Err(PipelineError::RenameFailed { from, to, source });
        }
        observer.on_event(&PipelineEvent::FileRenamed { from, to });
    }

    Ok(())
}
