//! Extraction of the icon-font export archive.

use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Instant;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::ExtractConfig;
use crate::ExtractionReport;
use crate::PipelineError;
use crate::PipelineEvent;
use crate::PipelineObserver;
use crate::Result;
use crate::config::ARCHIVE_ENTRIES;

/// Extracts the stylesheet, selection manifest and font files of an
/// icon-font export into `extract_path`.
///
/// Only the entries in [`ARCHIVE_ENTRIES`] are written; relative paths are
/// preserved and `extract_path` is created if needed. The archive is closed
/// before this function returns, and removed afterwards when
/// `config.delete_archive` is set.
///
/// # Errors
///
/// - [`PipelineError::InvalidArchive`] if the file is not a readable zip or
///   an entry name escapes the destination.
/// - [`PipelineError::MissingFile`] if `zip_path` does not exist.
/// - [`PipelineError::MissingArchiveEntry`] if a required entry is absent.
/// - [`PipelineError::Io`] on filesystem failures.
///
/// # Examples
///
/// ```no_run
/// use iconpipe_core::ExtractConfig;
/// use iconpipe_core::TracingObserver;
/// use iconpipe_core::extract_files;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExtractConfig::default().with_delete_archive(false);
/// let report = extract_files("devicon.zip", "icomoon", &config, &mut TracingObserver)?;
/// println!("Extracted {} files", report.files_extracted());
/// # Ok(())
/// # }
/// ```
pub fn extract_files<P: AsRef<Path>, Q: AsRef<Path>>(
    zip_path: P,
    extract_path: Q,
    config: &ExtractConfig,
    observer: &mut dyn PipelineObserver,
) -> Result<ExtractionReport> {
    let zip_path = zip_path.as_ref();
    let extract_path = extract_path.as_ref();
    let start = Instant::now();

    observer.on_event(&PipelineEvent::ExtractionStarted {
        archive: zip_path.to_path_buf(),
    });

    let file = File::open(zip_path).map_err(|e| PipelineError::open_failed(zip_path, e))?;
    fs::create_dir_all(extract_path)?;

    let mut report = {
        let mut archive = ZipArchive::new(file)
            .map_err(|e| PipelineError::InvalidArchive(format!("failed to open ZIP archive: {e}")))?;
        extract_entries(&mut archive, extract_path, observer)?
    };

    observer.on_event(&PipelineEvent::ExtractionFinished {
        entries: report.total_items(),
    });

    if config.delete_archive {
        fs::remove_file(zip_path)?;
        report.archive_deleted = true;
        observer.on_event(&PipelineEvent::ArchiveDeleted {
            archive: zip_path.to_path_buf(),
        });
    }

    report.duration = start.elapsed();
    Ok(report)
}

fn extract_entries<R: io::Read + io::Seek>(
    archive: &mut ZipArchive<R>,
    extract_path: &Path,
    observer: &mut dyn PipelineObserver,
) -> Result<ExtractionReport> {
    let mut report = ExtractionReport::new();

    for name in ARCHIVE_ENTRIES {
        let mut entry = archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => PipelineError::MissingArchiveEntry {
                entry: name.to_string(),
            },
            other => PipelineError::InvalidArchive(format!("failed to read ZIP entry {name}: {other}")),
        })?;

        let relative = entry
            .enclosed_name()
            .ok_or_else(|| PipelineError::InvalidArchive(format!("unsafe entry name: {name}")))?;
        let target = extract_path.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            report.directories_created += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        report.bytes_written += io::copy(&mut entry, &mut out)?;

        observer.on_event(&PipelineEvent::EntryExtracted {
            path: target.clone(),
        });
        report.files.push(target);
    }

    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::EventLog;
    use crate::NoopObserver;
    use crate::test_utils::create_icomoon_zip;
    use crate::test_utils::create_test_zip;
    use tempfile::TempDir;

    fn write_archive(dir: &Path, data: &[u8]) -> std::path::PathBuf {
        let path = dir.join("devicon-v1.0.zip");
        fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn test_extract_and_delete() {
        let temp = TempDir::new().unwrap();
        let zip_path = write_archive(temp.path(), &create_icomoon_zip());
        let dest = temp.path().join("icomoon");

        let report =
            extract_files(&zip_path, &dest, &ExtractConfig::default(), &mut NoopObserver).unwrap();

        assert!(dest.join("selection.json").is_file());
        assert!(dest.join("style.css").is_file());
        for ext in ["ttf", "woff", "eot", "svg"] {
            assert!(dest.join("fonts").join(format!("devicon.{ext}")).is_file());
        }
        assert_eq!(report.files_extracted(), 6);
        assert_eq!(report.directories_created, 1);
        assert!(report.archive_deleted);
        assert!(!zip_path.exists());
    }

    #[test]
    fn test_extract_keeps_archive() {
        let temp = TempDir::new().unwrap();
        let zip_path = write_archive(temp.path(), &create_icomoon_zip());
        let config = ExtractConfig::default().with_delete_archive(false);

        let report = extract_files(&zip_path, temp.path(), &config, &mut NoopObserver).unwrap();

        assert!(!report.archive_deleted);
        assert!(zip_path.exists());
        // Handle was released; the archive can be opened again.
        assert!(ZipArchive::new(File::open(&zip_path).unwrap()).is_ok());
    }

    #[test]
    fn test_extra_entries_ignored() {
        let temp = TempDir::new().unwrap();
        let zip_path = write_archive(temp.path(), &create_icomoon_zip());
        let dest = temp.path().join("out");

        extract_files(&zip_path, &dest, &ExtractConfig::default(), &mut NoopObserver).unwrap();

        assert!(!dest.join("demo.html").exists());
    }

    #[test]
    fn test_missing_entry() {
        let temp = TempDir::new().unwrap();
        let data = create_test_zip(vec![("selection.json", b"{}")]);
        let zip_path = write_archive(temp.path(), &data);

        let err = extract_files(
            &zip_path,
            temp.path().join("out"),
            &ExtractConfig::default(),
            &mut NoopObserver,
        )
        .unwrap_err();

        assert!(matches!(err, PipelineError::MissingArchiveEntry { ref entry } if entry == "fonts/"));
        assert!(zip_path.exists(), "archive must survive a failed extraction");
    }

    #[test]
    fn test_not_a_zip() {
        let temp = TempDir::new().unwrap();
        let zip_path = write_archive(temp.path(), b"definitely not a zip");

        let err = extract_files(
            &zip_path,
            temp.path().join("out"),
            &ExtractConfig::default(),
            &mut NoopObserver,
        )
        .unwrap_err();

        assert!(matches!(err, PipelineError::InvalidArchive(_)));
    }

    #[test]
    fn test_missing_archive_file() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("nope.zip");
        let err = extract_files(
            &zip_path,
            temp.path().join("out"),
            &ExtractConfig::default(),
            &mut NoopObserver,
        )
        .unwrap_err();

        assert!(err.is_missing_file());
        assert_eq!(err.path(), Some(zip_path.as_path()));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_events_emitted() {
        let temp = TempDir::new().unwrap();
        let zip_path = write_archive(temp.path(), &create_icomoon_zip());
        let mut log = EventLog::new();

        extract_files(&zip_path, temp.path().join("out"), &ExtractConfig::default(), &mut log)
            .unwrap();

        let events = log.events();
        assert!(matches!(events.first(), Some(PipelineEvent::ExtractionStarted { .. })));
        assert!(events.contains(&PipelineEvent::ExtractionFinished { entries: 7 }));
        assert!(matches!(events.last(), Some(PipelineEvent::ArchiveDeleted { .. })));
    }
}
