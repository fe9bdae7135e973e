//! Turning one finished cycle into an ordered list of notifications
//!
//! Emission order is fixed: config, HEAD, index, local branches (created,
//! deleted, changed), remote branches (same), then a single
//! `RepositoryChanged` if anything status-affecting happened.

use std::path::Path;

use tracing::warn;

use crate::domain::entities::RefDiff;
use crate::domain::value_objects::{EventCategory, RemoteBranch, RepositoryEvent};
use crate::infrastructure::refs;

use super::pending::PendingDispatch;
use super::ref_store::RefStore;

/// Evaluate a cycle exactly once, refreshing ref snapshots as needed.
pub fn plan(pending: &PendingDispatch, store: &mut RefStore, head_file: &Path) -> Vec<RepositoryEvent> {
    let mut events = Vec::new();

    if pending.has(EventCategory::Config) {
        events.push(RepositoryEvent::ConfigChanged);
    }

    if pending.has(EventCategory::Head) {
        match refs::read_head(head_file) {
            Ok(head) => events.push(RepositoryEvent::HeadChanged { head }),
            Err(err) => warn!("skipping HEAD notification, {}: {err}", head_file.display()),
        }
    }

    if pending.has(EventCategory::Index) {
        events.push(RepositoryEvent::IndexChanged);
    }

    if pending.has(EventCategory::LocalRefs) {
        push_local(&mut events, store.refresh_local());
    }

    if pending.has(EventCategory::RemoteRefs) {
        push_remote(&mut events, store.refresh_remote());
    }

    if pending.is_status_affecting() {
        events.push(RepositoryEvent::RepositoryChanged);
    }

    events
}

fn push_local(events: &mut Vec<RepositoryEvent>, diff: RefDiff) {
    events.extend(
        diff.created
            .into_iter()
            .map(|name| RepositoryEvent::LocalBranchCreated { name }),
    );
    events.extend(
        diff.deleted
            .into_iter()
            .map(|name| RepositoryEvent::LocalBranchDeleted { name }),
    );
    events.extend(
        diff.changed
            .into_iter()
            .map(|name| RepositoryEvent::LocalBranchChanged { name }),
    );
}

fn push_remote(events: &mut Vec<RepositoryEvent>, diff: RefDiff) {
    events.extend(
        diff.created
            .into_iter()
            .filter_map(split_remote)
            .map(|RemoteBranch { remote, branch }| RepositoryEvent::RemoteBranchCreated { remote, branch }),
    );
    events.extend(
        diff.deleted
            .into_iter()
            .filter_map(split_remote)
            .map(|RemoteBranch { remote, branch }| RepositoryEvent::RemoteBranchDeleted { remote, branch }),
    );
    events.extend(
        diff.changed
            .into_iter()
            .filter_map(split_remote)
            .map(|RemoteBranch { remote, branch }| RepositoryEvent::RemoteBranchChanged { remote, branch }),
    );
}

fn split_remote(key: String) -> Option<RemoteBranch> {
    let parsed = RemoteBranch::parse(&key);
    if parsed.is_none() {
        warn!("skipping remote reference without remote name: {key}");
    }
    parsed
}
