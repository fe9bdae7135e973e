//! Reference content and remote-tracking names
//!
//! A loose reference file holds either a raw object id or a symbolic
//! `ref: <target>` line. Remote-tracking refs are keyed `<remote>/<branch>`.

use std::fmt;

/// Decoded content of a reference file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RefTarget {
    /// 40 (SHA-1) or 64 (SHA-256) lowercase hex digits
    Object(String),
    /// `ref: refs/heads/master` -> `refs/heads/master`
    Symbolic(String),
}

impl RefTarget {
    /// Decode raw file content, returning the reason on failure.
    pub fn parse(content: &str) -> Result<Self, String> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err("empty reference".to_string());
        }

        if let Some(target) = trimmed.strip_prefix("ref:") {
            let target = target.trim();
            if target.is_empty() {
                return Err("symbolic reference without target".to_string());
            }
            return Ok(RefTarget::Symbolic(target.to_string()));
        }

        let is_hex = trimmed.chars().all(|c| c.is_ascii_hexdigit());
        if is_hex && matches!(trimmed.len(), 40 | 64) {
            Ok(RefTarget::Object(trimmed.to_ascii_lowercase()))
        } else {
            Err(format!("not an object id: {trimmed:?}"))
        }
    }
}

impl fmt::Display for RefTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefTarget::Object(oid) => f.write_str(oid),
            RefTarget::Symbolic(target) => write!(f, "ref: {target}"),
        }
    }
}

/// A remote-tracking branch name split into its remote and branch parts
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RemoteBranch {
    pub remote: String,
    pub branch: String,
}

impl RemoteBranch {
    /// Split a remote snapshot key at its first `/`.
    ///
    /// `origin/feature/document` -> (`origin`, `feature/document`)
    pub fn parse(key: &str) -> Option<Self> {
        let (remote, branch) = key.split_once('/')?;
        if remote.is_empty() || branch.is_empty() {
            return None;
        }
        Some(Self {
            remote: remote.to_string(),
            branch: branch.to_string(),
        })
    }
}

impl fmt::Display for RemoteBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.remote, self.branch)
    }
}
