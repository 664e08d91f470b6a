//! Error conversion utilities for CLI.
//!
//! Converts iconpipe-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use iconpipe_core::PipelineError;

/// Converts `PipelineError` to user-friendly anyhow error with context
pub fn convert_pipeline_error(err: PipelineError) -> anyhow::Error {
    match err {
        PipelineError::InvalidDirectory { path } => {
            anyhow!(
                "Not a directory: {}\n\
                 HINT: Check that the path exists and is a directory.",
                path.display()
            )
        }
        PipelineError::MissingFile { path }
            if path.extension().is_some_and(|ext| ext == "svg") =>
        {
            anyhow!(
                "Missing SVG: {}\n\
                 HINT: Add the file, or list the version under \"aliases\" in devicon.json.",
                path.display()
            )
        }
        PipelineError::MissingFile { path } => {
            anyhow!("File not found: {}", path.display())
        }
        PipelineError::MissingArchiveEntry { entry } => {
            anyhow!(
                "Archive is missing '{entry}'\n\
                 HINT: The archive must be an unmodified icon-font export with fonts named 'devicon'."
            )
        }
        PipelineError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive: {reason}\n\
                 HINT: The archive may be corrupted or the download incomplete."
            )
        }
        PipelineError::Manifest { path, source } => {
            anyhow!("Invalid manifest '{}': {source}", path.display())
        }
        PipelineError::RenameFailed { from, to, source } => {
            anyhow!(
                "Cannot rename {} to {}: {source}\n\
                 HINT: Run 'iconpipe extract' first; files are renamed only once.",
                from.display(),
                to.display()
            )
        }
        PipelineError::Io(io_err) => anyhow!("I/O error: {io_err}"),
    }
}

/// Adds context to a pipeline result.
pub fn add_pipeline_context<T>(result: Result<T, PipelineError>) -> anyhow::Result<T> {
    result.map_err(convert_pipeline_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_missing_file_error() {
        let err = PipelineError::MissingFile {
            path: PathBuf::from("icons/go/go-plain.svg"),
        };
        let msg = format!("{:?}", convert_pipeline_error(err));
        assert!(msg.contains("go-plain.svg"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_missing_manifest_error() {
        let err = PipelineError::MissingFile {
            path: PathBuf::from("build/devicon.json"),
        };
        let msg = format!("{:?}", convert_pipeline_error(err));
        assert!(msg.contains("File not found: build/devicon.json"));
        assert!(!msg.contains("SVG"));
    }

    #[test]
    fn test_convert_invalid_directory_hint_is_neutral() {
        let err = PipelineError::InvalidDirectory {
            path: PathBuf::from("notes.txt"),
        };
        let msg = format!("{:?}", convert_pipeline_error(err));
        assert!(msg.contains("Not a directory: notes.txt"));
        assert!(msg.contains("HINT: Check that the path exists and is a directory."));
        assert!(!msg.contains("icon"));
    }

    #[test]
    fn test_convert_missing_entry_error() {
        let err = PipelineError::MissingArchiveEntry {
            entry: "style.css".into(),
        };
        let msg = format!("{:?}", convert_pipeline_error(err));
        assert!(msg.contains("style.css"));
    }

    #[test]
    fn test_convert_io_error() {
        let err = PipelineError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let msg = format!("{:?}", convert_pipeline_error(err));
        assert!(msg.contains("I/O error"));
    }
}
