//! WatchedPaths value object - the fixed set of paths a watcher classifies against
//!
//! Supplied once at construction by the path-resolution collaborator
//! (see `infrastructure::discovery`). All paths are absolute.

use std::path::{Path, PathBuf};

use crate::error::{WatchError, WatchResult};

/// The paths a repository watcher cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedPaths {
    repository_root: PathBuf,
    metadata_dir: PathBuf,
    index_file: PathBuf,
    head_file: PathBuf,
    local_refs_dir: PathBuf,
    remote_refs_dir: PathBuf,
    config_file: PathBuf,
}

impl WatchedPaths {
    /// Standard layout: everything lives directly under `metadata_dir`.
    pub fn standard(repository_root: impl Into<PathBuf>, metadata_dir: impl Into<PathBuf>) -> Self {
        let metadata_dir = metadata_dir.into();
        Self::with_common_dir(repository_root, metadata_dir.clone(), metadata_dir)
    }

    /// Linked-worktree layout: HEAD and index live in `metadata_dir`, config and
    /// refs live in the shared `common_dir`.
    pub fn with_common_dir(
        repository_root: impl Into<PathBuf>,
        metadata_dir: impl Into<PathBuf>,
        common_dir: impl Into<PathBuf>,
    ) -> Self {
        let metadata_dir = metadata_dir.into();
        let common_dir = common_dir.into();
        Self {
            repository_root: repository_root.into(),
            index_file: metadata_dir.join("index"),
            head_file: metadata_dir.join("HEAD"),
            local_refs_dir: common_dir.join("refs").join("heads"),
            remote_refs_dir: common_dir.join("refs").join("remotes"),
            config_file: common_dir.join("config"),
            metadata_dir,
        }
    }

    pub fn with_index_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.index_file = path.into();
        self
    }

    pub fn with_head_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.head_file = path.into();
        self
    }

    pub fn with_local_refs_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.local_refs_dir = path.into();
        self
    }

    pub fn with_remote_refs_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.remote_refs_dir = path.into();
        self
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = path.into();
        self
    }

    pub fn repository_root(&self) -> &Path {
        &self.repository_root
    }

    pub fn metadata_dir(&self) -> &Path {
        &self.metadata_dir
    }

    pub fn index_file(&self) -> &Path {
        &self.index_file
    }

    pub fn head_file(&self) -> &Path {
        &self.head_file
    }

    pub fn local_refs_dir(&self) -> &Path {
        &self.local_refs_dir
    }

    pub fn remote_refs_dir(&self) -> &Path {
        &self.remote_refs_dir
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    fn all(&self) -> [&Path; 7] {
        [
            &self.repository_root,
            &self.metadata_dir,
            &self.index_file,
            &self.head_file,
            &self.local_refs_dir,
            &self.remote_refs_dir,
            &self.config_file,
        ]
    }

    /// Check the absolute-path invariant
    pub fn validate(&self) -> WatchResult<()> {
        match self.all().into_iter().find(|p| !p.is_absolute()) {
            Some(path) => Err(WatchError::RelativePath {
                path: path.to_path_buf(),
            }),
            None => Ok(()),
        }
    }

    /// Apply `f` to every path, producing a new record.
    pub fn map_paths(&self, mut f: impl FnMut(&Path) -> PathBuf) -> Self {
        Self {
            repository_root: f(&self.repository_root),
            metadata_dir: f(&self.metadata_dir),
            index_file: f(&self.index_file),
            head_file: f(&self.head_file),
            local_refs_dir: f(&self.local_refs_dir),
            remote_refs_dir: f(&self.remote_refs_dir),
            config_file: f(&self.config_file),
        }
    }

    /// Minimal set of directories that must be watched recursively so that
    /// every classified path is covered.
    ///
    /// The repository root and metadata dir are always roots unless one
    /// contains the other. Ref trees and the config file only add a root when
    /// they live outside both (linked worktrees).
    pub fn watch_roots(&self) -> Vec<PathBuf> {
        let mut candidates = vec![
            self.repository_root.clone(),
            self.metadata_dir.clone(),
        ];
        for extra in [&self.local_refs_dir, &self.remote_refs_dir] {
            // refs/heads and refs/remotes may not exist yet; watch refs/
            if let Some(parent) = extra.parent() {
                candidates.push(parent.to_path_buf());
            }
        }
        if let Some(parent) = self.config_file.parent() {
            candidates.push(parent.to_path_buf());
        }

        let mut roots: Vec<PathBuf> = Vec::new();
        for candidate in candidates {
            if roots.iter().any(|r| candidate.starts_with(r)) {
                continue;
            }
            roots.retain(|r| !r.starts_with(&candidate));
            roots.push(candidate);
        }
        roots
    }
}
