//! Native filesystem notifications via `notify`

use std::path::PathBuf;
use std::time::Duration;

use notify::event::{AccessKind, AccessMode, ModifyKind};
use notify::{Config, Event, EventKind, PollWatcher, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, trace, warn};

use crate::domain::ports::{EventSink, RawEventSource, Subscription};
use crate::domain::value_objects::{RawEvent, RawEventKind};
use crate::error::{WatchError, WatchResult};

/// Map a `notify` event kind to a raw event kind, or `None` for pure reads.
pub(crate) fn raw_kind(kind: &EventKind) -> Option<RawEventKind> {
    match kind {
        EventKind::Create(_) => Some(RawEventKind::Created),
        EventKind::Remove(_) => Some(RawEventKind::Deleted),
        EventKind::Modify(ModifyKind::Name(_)) => Some(RawEventKind::Renamed),
        EventKind::Modify(_) | EventKind::Any => Some(RawEventKind::Modified),
        EventKind::Access(AccessKind::Close(AccessMode::Write)) => Some(RawEventKind::Modified),
        EventKind::Access(_) | EventKind::Other => None,
    }
}

/// Raw event source backed by the platform's recommended watcher, or by
/// polling when native notifications are unreliable (network filesystems).
#[derive(Debug, Clone, Default)]
pub struct NotifyEventSource {
    poll_interval: Option<Duration>,
}

impl NotifyEventSource {
    /// Use the native backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the polling backend with the given scan interval
    pub fn polling(interval: Duration) -> Self {
        Self {
            poll_interval: Some(interval),
        }
    }

    fn create_watcher(&self, sink: EventSink) -> WatchResult<Box<dyn Watcher + Send>> {
        let handler = move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if event.need_rescan() {
                    warn!("filesystem notifications were dropped by the OS");
                }
                let Some(kind) = raw_kind(&event.kind) else {
                    return;
                };
                for path in event.paths {
                    trace!("raw {kind:?} {}", path.display());
                    sink(RawEvent::new(path, kind));
                }
            }
            Err(err) => warn!("filesystem watcher error: {err}"),
        };

        match self.poll_interval {
            Some(interval) => {
                let config = Config::default()
                    .with_poll_interval(interval)
                    .with_compare_contents(false);
                let watcher = PollWatcher::new(handler, config)
                    .map_err(|e| WatchError::subscribe(PathBuf::new(), e))?;
                Ok(Box::new(watcher))
            }
            None => {
                let watcher = RecommendedWatcher::new(handler, Config::default())
                    .map_err(|e| WatchError::subscribe(PathBuf::new(), e))?;
                Ok(Box::new(watcher))
            }
        }
    }
}

struct NotifySubscription {
    // dropping the watcher stops delivery
    _watcher: Box<dyn Watcher + Send>,
}

impl Subscription for NotifySubscription {}

impl RawEventSource for NotifyEventSource {
    fn subscribe(&self, roots: &[PathBuf], sink: EventSink) -> WatchResult<Box<dyn Subscription>> {
        let mut watcher = self.create_watcher(sink)?;

        for root in roots {
            watcher
                .watch(root, RecursiveMode::Recursive)
                .map_err(|e| WatchError::subscribe(root, e))?;
            debug!("watching {}", root.display());
        }

        Ok(Box::new(NotifySubscription { _watcher: watcher }))
    }
}
