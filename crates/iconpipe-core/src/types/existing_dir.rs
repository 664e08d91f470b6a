//! Validated directory type.

use crate::PipelineError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// A path known to name an existing directory.
///
/// Validation happens once on construction; operations that need a folder
/// (an icon's SVG folder, the screenshot base) take this type so the
/// "exists and is a directory" check is not repeated ad hoc.
///
/// # Examples
///
/// ```no_run
/// use iconpipe_core::types::ExistingDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let icons = ExistingDir::new("icons/rust")?;
/// println!("{}", icons.join("rust-plain.svg").display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingDir(PathBuf);

impl ExistingDir {
    /// Validates `path` as given, without resolving it.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidDirectory`] if the path does not exist
    /// or is not a directory.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_dir() {
            return Err(PipelineError::InvalidDirectory { path });
        }
        Ok(Self(path))
    }

    /// Resolves `path` to an absolute canonical path, then validates it.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidDirectory`] if the path cannot be
    /// resolved or is not a directory.
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let canonical = path
            .canonicalize()
            .map_err(|_| PipelineError::InvalidDirectory {
                path: path.to_path_buf(),
            })?;
        Self::new(canonical)
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins a relative path onto this directory.
    #[inline]
    #[must_use]
    pub fn join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.0.join(path)
    }
}

impl AsRef<Path> for ExistingDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_existing_dir_valid() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = ExistingDir::new(temp.path()).expect("dir should be valid");
        assert_eq!(dir.as_path(), temp.path());
    }

    #[test]
    fn test_existing_dir_nonexistent() {
        let result = ExistingDir::new("/nonexistent/directory/that/does/not/exist");
        assert!(matches!(
            result,
            Err(PipelineError::InvalidDirectory { .. })
        ));
    }

    #[test]
    fn test_existing_dir_not_a_directory() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let file_path = temp.path().join("file.txt");
        fs::write(&file_path, "test").expect("failed to write file");

        let err = ExistingDir::new(&file_path).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidDirectory { ref path } if *path == file_path));
    }

    #[test]
    fn test_resolve_canonicalizes() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let subdir = temp.path().join("subdir");
        fs::create_dir(&subdir).expect("failed to create subdir");

        let dir = ExistingDir::resolve(subdir.join(".").join("..")).expect("should resolve");
        assert!(dir.as_path().is_absolute());
        assert_eq!(dir.as_path(), temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_nonexistent() {
        let result = ExistingDir::resolve("/nonexistent/base");
        assert!(matches!(
            result,
            Err(PipelineError::InvalidDirectory { .. })
        ));
    }

    #[test]
    fn test_join() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = ExistingDir::new(temp.path()).unwrap();
        assert_eq!(dir.join("a.svg"), temp.path().join("a.svg"));
    }
}
