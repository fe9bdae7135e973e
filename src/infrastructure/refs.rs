//! Reference tree reading
//!
//! Enumerates loose reference files under a ref-tree root. Files that vanish
//! mid-walk are treated as absent; undecodable files are logged and skipped.

use std::fs;
use std::io;
use std::path::{Component, Path};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::domain::entities::RefSnapshot;
use crate::domain::value_objects::RefTarget;
use crate::error::{WatchError, WatchResult};

/// Build a fresh snapshot of every reference file under `dir`.
///
/// A missing directory yields an empty snapshot.
pub fn rebuild(dir: &Path) -> RefSnapshot {
    let mut snapshot = RefSnapshot::new();
    if !dir.is_dir() {
        return snapshot;
    }

    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound) {
                    debug!("ref entry vanished during walk of {}: {err}", dir.display());
                } else {
                    warn!("skipping unreadable ref entry under {}: {err}", dir.display());
                }
                continue;
            }
        };

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "lock") {
            continue;
        }

        let Some(name) = ref_name(dir, path) else {
            warn!("skipping reference with non UTF-8 name: {}", path.display());
            continue;
        };

        match read_ref(path) {
            Ok(Some(target)) => snapshot.insert(name, target),
            Ok(None) => debug!("reference {name} disappeared before it could be read"),
            Err(err) => warn!("skipping reference {name}: {err}"),
        }
    }

    snapshot
}

/// Read and decode one reference file. `Ok(None)` if it no longer exists.
pub fn read_ref(path: &Path) -> WatchResult<Option<RefTarget>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let content = String::from_utf8(bytes).map_err(|_| WatchError::MalformedRef {
        path: path.to_path_buf(),
        reason: "content is not UTF-8".to_string(),
    })?;

    RefTarget::parse(&content)
        .map(Some)
        .map_err(|reason| WatchError::MalformedRef {
            path: path.to_path_buf(),
            reason,
        })
}

/// Read the HEAD file, trimming the trailing line ending.
pub fn read_head(path: &Path) -> io::Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(content.trim_end_matches(['\r', '\n']).to_string())
}

/// `<dir>/feature/x` -> `feature/x`
fn ref_name(dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(dir).ok()?;
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            _ => return None,
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
