//! Diagnostics reporting for pipeline operations.
//!
//! Operations never print. They report what they do through a
//! [`PipelineObserver`], so callers decide whether events become log lines,
//! terminal output or test assertions.

use std::fmt;
use std::path::Path;
use std::path::PathBuf;

/// Something noteworthy that happened during an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// A font version was skipped because it is an alias.
    AliasSkipped {
        /// Icon name.
        icon: String,
        /// Aliased font version.
        version: String,
    },
    /// Extraction from an archive started.
    ExtractionStarted {
        /// The archive being read.
        archive: PathBuf,
    },
    /// One archive entry was written to disk.
    EntryExtracted {
        /// Destination path of the entry.
        path: PathBuf,
    },
    /// All entries were extracted.
    ExtractionFinished {
        /// Number of entries written.
        entries: usize,
    },
    /// The source archive was removed.
    ArchiveDeleted {
        /// The removed archive.
        archive: PathBuf,
    },
    /// An extracted file was renamed.
    FileRenamed {
        /// Old path.
        from: PathBuf,
        /// New path.
        to: PathBuf,
    },
    /// A folder was created.
    FolderCreated {
        /// The new folder.
        path: PathBuf,
    },
    /// A folder was already present, nothing was done.
    FolderAlreadyExists {
        /// The existing folder.
        path: PathBuf,
    },
}

impl fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AliasSkipped { icon, version } => {
                write!(f, "skipping {icon}-{version}.svg (alias, no file expected)")
            }
            Self::ExtractionStarted { archive } => {
                write!(f, "extracting files from {}", archive.display())
            }
            Self::EntryExtracted { path } => write!(f, "extracted {}", path.display()),
            Self::ExtractionFinished { entries } => write!(f, "extracted {entries} entries"),
            Self::ArchiveDeleted { archive } => write!(f, "deleted {}", archive.display()),
            Self::FileRenamed { from, to } => {
                write!(f, "renamed {} to {}", from.display(), to.display())
            }
            Self::FolderCreated { path } => write!(f, "created {}", path.display()),
            Self::FolderAlreadyExists { path } => {
                write!(f, "{} already exists, nothing to do", path.display())
            }
        }
    }
}

/// Callback trait for operation diagnostics.
///
/// # Examples
///
/// ```
/// use iconpipe_core::PipelineEvent;
/// use iconpipe_core::PipelineObserver;
///
/// struct Printer;
///
/// impl PipelineObserver for Printer {
///     fn on_event(&mut self, event: &PipelineEvent) {
///         println!("{event}");
///     }
/// }
/// ```
pub trait PipelineObserver {
    /// Called for every event an operation emits, in order.
    fn on_event(&mut self, event: &PipelineEvent);
}

/// Observer that discards every event.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {
    fn on_event(&mut self, _event: &PipelineEvent) {}
}

/// Observer that forwards events to `tracing`.
///
/// Skipped aliases and pre-existing folders are logged at `info`, per-entry
/// progress at `debug`, everything else at `info`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_event(&mut self, event: &PipelineEvent) {
        match event {
            PipelineEvent::EntryExtracted { path } => {
                tracing::debug!(path = %path.display(), "entry extracted");
            }
            PipelineEvent::AliasSkipped { icon, version } => {
                tracing::info!(icon = %icon, version = %version, "{event}");
            }
            _ => tracing::info!("{event}"),
        }
    }
}

/// Observer that records every event.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<PipelineEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PipelineEvent] {
        &self.events
    }

    /// Returns `true` if an `AliasSkipped` event was recorded for this pair.
    #[must_use]
    pub fn skipped(&self, icon: &str, version: &str) -> bool {
        self.events.iter().any(|e| {
            matches!(e, PipelineEvent::AliasSkipped { icon: i, version: v } if i == icon && v == version)
        })
    }

    /// Returns `true` if a `FolderAlreadyExists` event was recorded for `path`.
    #[must_use]
    pub fn folder_existed(&self, path: &Path) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, PipelineEvent::FolderAlreadyExists { path: p } if p == path))
    }
}

impl PipelineObserver for EventLog {
    fn on_event(&mut self, event: &PipelineEvent) {
        self.events.push(event.clone());
    }
}
