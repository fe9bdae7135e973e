//! Repository Listener port
//!
//! The capability set of ten notifications a watcher delivers. Every method
//! has a no-op default so listeners implement only what they need.

use crate::domain::value_objects::RepositoryEvent;

/// Receiver of semantic repository notifications
///
/// Calls arrive on the watcher's dispatch thread, never concurrently with
/// each other for the same watcher. Implementations that need another
/// execution context must marshal internally.
pub trait RepositoryListener: Send + Sync {
    fn config_changed(&self) {}

    fn head_changed(&self, _head: &str) {}

    fn index_changed(&self) {}

    fn local_branch_created(&self, _name: &str) {}

    fn local_branch_deleted(&self, _name: &str) {}

    fn local_branch_changed(&self, _name: &str) {}

    fn remote_branch_created(&self, _remote: &str, _branch: &str) {}

    fn remote_branch_deleted(&self, _remote: &str, _branch: &str) {}

    fn remote_branch_changed(&self, _remote: &str, _branch: &str) {}

    fn repository_changed(&self) {}

    /// Route one notification to the matching method.
    ///
    /// Override this instead of the individual methods to receive every
    /// notification through a single entry point.
    fn on_event(&self, event: &RepositoryEvent) {
        match event {
            RepositoryEvent::ConfigChanged => self.config_changed(),
            RepositoryEvent::HeadChanged { head } => self.head_changed(head),
            RepositoryEvent::IndexChanged => self.index_changed(),
            RepositoryEvent::LocalBranchCreated { name } => self.local_branch_created(name),
            RepositoryEvent::LocalBranchDeleted { name } => self.local_branch_deleted(name),
            RepositoryEvent::LocalBranchChanged { name } => self.local_branch_changed(name),
            RepositoryEvent::RemoteBranchCreated { remote, branch } => {
                self.remote_branch_created(remote, branch)
            }
            RepositoryEvent::RemoteBranchDeleted { remote, branch } => {
                self.remote_branch_deleted(remote, branch)
            }
            RepositoryEvent::RemoteBranchChanged { remote, branch } => {
                self.remote_branch_changed(remote, branch)
            }
            RepositoryEvent::RepositoryChanged => self.repository_changed(),
        }
    }
}

/// Listener that ignores everything
pub struct NoopListener;

impl RepositoryListener for NoopListener {}
