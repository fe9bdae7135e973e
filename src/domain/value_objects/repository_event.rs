//! Semantic repository notifications

use serde::Serialize;

/// One semantic notification emitted by a dispatch cycle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RepositoryEvent {
    ConfigChanged,
    HeadChanged { head: String },
    IndexChanged,
    LocalBranchCreated { name: String },
    LocalBranchDeleted { name: String },
    LocalBranchChanged { name: String },
    RemoteBranchCreated { remote: String, branch: String },
    RemoteBranchDeleted { remote: String, branch: String },
    RemoteBranchChanged { remote: String, branch: String },
    RepositoryChanged,
}

impl RepositoryEvent {
    /// Stable snake_case name of the notification kind
    pub fn kind(&self) -> &'static str {
        match self {
            RepositoryEvent::ConfigChanged => "config_changed",
            RepositoryEvent::HeadChanged { .. } => "head_changed",
            RepositoryEvent::IndexChanged => "index_changed",
            RepositoryEvent::LocalBranchCreated { .. } => "local_branch_created",
            RepositoryEvent::LocalBranchDeleted { .. } => "local_branch_deleted",
            RepositoryEvent::LocalBranchChanged { .. } => "local_branch_changed",
            RepositoryEvent::RemoteBranchCreated { .. } => "remote_branch_created",
            RepositoryEvent::RemoteBranchDeleted { .. } => "remote_branch_deleted",
            RepositoryEvent::RemoteBranchChanged { .. } => "remote_branch_changed",
            RepositoryEvent::RepositoryChanged => "repository_changed",
        }
    }
}

impl std::fmt::Display for RepositoryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryEvent::ConfigChanged => write!(f, "config changed"),
            RepositoryEvent::HeadChanged { head } => write!(f, "HEAD changed: {head}"),
            RepositoryEvent::IndexChanged => write!(f, "index changed"),
            RepositoryEvent::LocalBranchCreated { name } => write!(f, "branch created: {name}"),
            RepositoryEvent::LocalBranchDeleted { name } => write!(f, "branch deleted: {name}"),
            RepositoryEvent::LocalBranchChanged { name } => write!(f, "branch changed: {name}"),
            RepositoryEvent::RemoteBranchCreated { remote, branch } => {
                write!(f, "remote branch created: {remote}/{branch}")
            }
            RepositoryEvent::RemoteBranchDeleted { remote, branch } => {
                write!(f, "remote branch deleted: {remote}/{branch}")
            }
            RepositoryEvent::RemoteBranchChanged { remote, branch } => {
                write!(f, "remote branch changed: {remote}/{branch}")
            }
            RepositoryEvent::RepositoryChanged => write!(f, "repository changed"),
        }
    }
}
