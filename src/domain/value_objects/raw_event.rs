//! Raw filesystem events and their semantic categories

use std::path::PathBuf;
use std::time::Instant;

/// Kind of filesystem mutation reported by a raw event source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawEventKind {
    Created,
    Modified,
    Deleted,
    Renamed,
}

/// A single filesystem mutation as reported by the OS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub path: PathBuf,
    pub kind: RawEventKind,
    pub timestamp: Instant,
}

impl RawEvent {
    pub fn new(path: impl Into<PathBuf>, kind: RawEventKind) -> Self {
        Self {
            path: path.into(),
            kind,
            timestamp: Instant::now(),
        }
    }
}

/// Recognized category of a raw event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventCategory {
    Config,
    Head,
    Index,
    LocalRefs,
    RemoteRefs,
    /// Any other working-tree mutation
    Generic,
}

impl EventCategory {
    /// Whether a change in this category can alter `git status` output.
    ///
    /// Config and ref-tree mutations are pure metadata.
    pub fn is_status_affecting(&self) -> bool {
        matches!(
            self,
            EventCategory::Head | EventCategory::Index | EventCategory::Generic
        )
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventCategory::Config => "config",
            EventCategory::Head => "head",
            EventCategory::Index => "index",
            EventCategory::LocalRefs => "local-refs",
            EventCategory::RemoteRefs => "remote-refs",
            EventCategory::Generic => "generic",
        };
        f.write_str(name)
    }
}
