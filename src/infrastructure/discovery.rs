//! Metadata directory discovery
//!
//! Resolves a working-copy root into the `WatchedPaths` record:
//! - `<root>/.git` directory: standard layout
//! - `<root>/.git` file: follows the `gitdir: <path>` indirection
//! - a `commondir` file inside the metadata dir moves config and refs to the
//!   shared directory (linked worktrees)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::WatchedPaths;
use crate::error::{WatchError, WatchResult};

/// Resolve the watched paths for the working copy at `root`.
pub fn discover(root: &Path) -> WatchResult<WatchedPaths> {
    let root = root.canonicalize().map_err(|_| WatchError::NotARepository {
        path: root.to_path_buf(),
    })?;
    let dot_git = root.join(".git");

    let metadata_dir = if dot_git.is_dir() {
        dot_git
    } else if dot_git.is_file() {
        resolve_gitdir_file(&dot_git, &root)?
    } else {
        return Err(WatchError::NotARepository { path: root });
    };

    let common_dir = match read_commondir(&metadata_dir)? {
        Some(common) => common,
        None => metadata_dir.clone(),
    };

    debug!(
        "discovered metadata dir {} (common dir {})",
        metadata_dir.display(),
        common_dir.display()
    );

    Ok(WatchedPaths::with_common_dir(root, metadata_dir, common_dir))
}

/// Parse a `.git` file of the form `gitdir: <path>`.
fn resolve_gitdir_file(file: &Path, root: &Path) -> WatchResult<PathBuf> {
    let content = fs::read_to_string(file)?;
    let target = content
        .lines()
        .find_map(|line| line.strip_prefix("gitdir:"))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| WatchError::InvalidGitdir {
            file: file.to_path_buf(),
            message: "missing 'gitdir:' line".to_string(),
        })?;

    let target = absolutize(root, Path::new(target));
    target.canonicalize().map_err(|err| WatchError::InvalidGitdir {
        file: file.to_path_buf(),
        message: format!("{}: {err}", target.display()),
    })
}

fn read_commondir(metadata_dir: &Path) -> WatchResult<Option<PathBuf>> {
    let file = metadata_dir.join("commondir");
    if !file.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&file)?;
    let relative = content.trim();
    if relative.is_empty() {
        return Ok(None);
    }
    let common = absolutize(metadata_dir, Path::new(relative));
    Ok(Some(common.canonicalize()?))
}

/// Canonicalize every watched path so that OS-reported event paths compare
/// equal (e.g. `/var` vs `/private/var` on macOS).
///
/// Paths that do not exist yet are resolved through their parent.
pub fn normalize(paths: &WatchedPaths) -> WatchedPaths {
    paths.map_paths(|path| {
        if let Ok(canonical) = path.canonicalize() {
            return canonical;
        }
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) => parent
                .canonicalize()
                .map(|p| p.join(name))
                .unwrap_or_else(|_| path.to_path_buf()),
            _ => path.to_path_buf(),
        }
    })
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discovers_standard_layout() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git/refs/heads")).unwrap();

        let paths = discover(dir.path()).unwrap();
        let root = dir.path().canonicalize().unwrap();
        assert_eq!(paths.repository_root(), root);
        assert_eq!(paths.metadata_dir(), root.join(".git"));
        assert_eq!(paths.head_file(), root.join(".git/HEAD"));
    }

    #[test]
    fn follows_relative_gitdir_file() {
        let dir = tempdir().unwrap();
        let work = dir.path().join("work");
        let meta = dir.path().join("meta");
        fs::create_dir_all(&work).unwrap();
        fs::create_dir_all(&meta).unwrap();
        fs::write(work.join(".git"), "gitdir: ../meta\n").unwrap();

        let paths = discover(&work).unwrap();
        assert_eq!(paths.metadata_dir(), meta.canonicalize().unwrap());
    }

    #[test]
    fn linked_worktree_uses_common_dir_for_refs() {
        let dir = tempdir().unwrap();
        let main_git = dir.path().join("main/.git");
        let wt_meta = main_git.join("worktrees/linked");
        let linked = dir.path().join("linked");
        fs::create_dir_all(&wt_meta).unwrap();
        fs::create_dir_all(&linked).unwrap();
        fs::write(wt_meta.join("commondir"), "../..\n").unwrap();
        fs::write(
            linked.join(".git"),
            format!("gitdir: {}\n", wt_meta.display()),
        )
        .unwrap();

        let paths = discover(&linked).unwrap();
        let main_git = main_git.canonicalize().unwrap();
        assert_eq!(paths.local_refs_dir(), main_git.join("refs/heads"));
        assert_eq!(paths.config_file(), main_git.join("config"));
        assert_eq!(
            paths.head_file(),
            wt_meta.canonicalize().unwrap().join("HEAD")
        );
    }

    #[test]
    fn normalize_resolves_missing_leaf_through_parent() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git/refs")).unwrap();
        let paths = WatchedPaths::standard(dir.path(), dir.path().join(".git"));

        let normalized = normalize(&paths);
        let root = dir.path().canonicalize().unwrap();
        assert_eq!(normalized.repository_root(), root);
        // refs/remotes does not exist, refs/ does
        assert_eq!(normalized.remote_refs_dir(), root.join(".git/refs/remotes"));
        // HEAD does not exist, .git/ does
        assert_eq!(normalized.head_file(), root.join(".git/HEAD"));
    }

    #[test]
    fn rejects_non_repository() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            discover(dir.path()),
            Err(WatchError::NotARepository { .. })
        ));
    }

    #[test]
    fn rejects_gitdir_file_without_target() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".git"), "nonsense\n").unwrap();
        assert!(matches!(
            discover(dir.path()),
            Err(WatchError::InvalidGitdir { .. })
        ));
    }
}
