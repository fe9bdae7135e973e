//! Reference Snapshot Store
//!
//! Holds the last observed local and remote snapshots and diffs fresh disk
//! state against them. Owned exclusively by the dispatch worker.

use std::path::{Path, PathBuf};

use crate::domain::entities::{RefDiff, RefSnapshot};
use crate::domain::value_objects::WatchedPaths;
use crate::infrastructure::refs;

#[derive(Debug)]
pub struct RefStore {
    local_dir: PathBuf,
    remote_dir: PathBuf,
    local: RefSnapshot,
    remote: RefSnapshot,
}

impl RefStore {
    /// Read the baseline for both ref trees
    pub fn load(paths: &WatchedPaths) -> Self {
        let local_dir = paths.local_refs_dir().to_path_buf();
        let remote_dir = paths.remote_refs_dir().to_path_buf();
        Self {
            local: refs::rebuild(&local_dir),
            remote: refs::rebuild(&remote_dir),
            local_dir,
            remote_dir,
        }
    }

    pub fn local(&self) -> &RefSnapshot {
        &self.local
    }

    pub fn remote(&self) -> &RefSnapshot {
        &self.remote
    }

    /// Rebuild the local snapshot and return what changed since the last one
    pub fn refresh_local(&mut self) -> RefDiff {
        refresh(&self.local_dir, &mut self.local)
    }

    /// Rebuild the remote snapshot and return what changed since the last one
    pub fn refresh_remote(&mut self) -> RefDiff {
        refresh(&self.remote_dir, &mut self.remote)
    }
}

fn refresh(dir: &Path, snapshot: &mut RefSnapshot) -> RefDiff {
    let fresh = refs::rebuild(dir);
    let diff = snapshot.diff(&fresh);
    *snapshot = fresh;
    diff
}
