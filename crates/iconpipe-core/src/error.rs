//! Error types for manifest and archive operations.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PipelineError`.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while diffing manifests or handling the archive.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A manifest file could not be parsed.
    #[error("invalid manifest {path}: {source}")]
    Manifest {
        /// The manifest file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// An expected directory is missing or is not a directory.
    #[error("invalid path, this is not a directory: {path}")]
    InvalidDirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// An expected file does not exist.
    #[error("this path doesn't exist: {path}")]
    MissingFile {
        /// The missing file.
        path: PathBuf,
    },

    /// A required entry is absent from the archive.
    #[error("archive entry not found: {entry}")]
    MissingArchiveEntry {
        /// Name of the entry inside the archive.
        entry: String,
    },

    /// Archive is corrupted or invalid.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Renaming an extracted file failed.
    #[error("failed to rename {from} to {to}: {source}")]
    RenameFailed {
        /// Source path.
        from: PathBuf,
        /// Target path.
        to: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Returns `true` if this error means something expected on disk or in
    /// the archive was not there.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconpipe_core::PipelineError;
    /// use std::path::PathBuf;
    ///
    /// let err = PipelineError::MissingFile {
    ///     path: PathBuf::from("icons/rust/rust-plain.svg"),
    /// };
    /// assert!(err.is_missing_file());
    ///
    /// let err = PipelineError::InvalidArchive("bad header".to_string());
    /// assert!(!err.is_missing_file());
    /// ```
    #[must_use]
    pub fn is_missing_file(&self) -> bool {
        match self {
            Self::MissingFile { .. } | Self::MissingArchiveEntry { .. } => true,
            Self::RenameFailed { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Wraps a failure to open `path`; a missing file keeps its path.
    pub(crate) fn open_failed(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(source)
        }
    }

    /// Returns the path this error is about, if it carries one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Manifest { path, .. }
            | Self::InvalidDirectory { path }
            | Self::MissingFile { path } => Some(path.as_path()),
            Self::RenameFailed { from, .. } => Some(from.as_path()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_directory_display() {
        let err = PipelineError::InvalidDirectory {
            path: PathBuf::from("icons/rust"),
        };
        assert!(err.to_string().contains("not a directory"));
        assert!(err.to_string().contains("icons/rust"));
    }

    #[test]
    fn test_missing_file_display() {
        let err = PipelineError::MissingFile {
            path: PathBuf::from("icons/rust/rust-plain.svg"),
        };
        assert!(err.to_string().contains("doesn't exist"));
        assert!(err.to_string().contains("rust-plain.svg"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PipelineError = io_err.into();
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn test_is_missing_file() {
        let err = PipelineError::MissingArchiveEntry {
            entry: "style.css".into(),
        };
        assert!(err.is_missing_file());

        let err = PipelineError::RenameFailed {
            from: PathBuf::from("style.css"),
            to: PathBuf::from("devicon.css"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_missing_file());

        let err = PipelineError::RenameFailed {
            from: PathBuf::from("style.css"),
            to: PathBuf::from("devicon.css"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_missing_file());

        let err = PipelineError::InvalidDirectory {
            path: PathBuf::from("icons"),
        };
        assert!(!err.is_missing_file());
    }

    #[test]
    fn test_path_accessor() {
        let err = PipelineError::MissingFile {
            path: PathBuf::from("a.svg"),
        };
        assert_eq!(err.path(), Some(Path::new("a.svg")));

        let err = PipelineError::InvalidArchive("truncated".into());
        assert_eq!(err.path(), None);
    }

    #[test]
    fn test_open_failed_keeps_missing_path() {
        let err = PipelineError::open_failed(
            Path::new("build/devicon.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_missing_file());
        assert_eq!(err.path(), Some(Path::new("build/devicon.json")));

        let err = PipelineError::open_failed(
            Path::new("build/devicon.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err = PipelineError::RenameFailed {
            from: PathBuf::from("selection.json"),
            to: PathBuf::from("icomoon.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "inner"),
        };
        assert!(err.source().is_some());
    }
}
