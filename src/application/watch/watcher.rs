//! Repository watcher: lifecycle plus the single dispatch worker
//!
//! Raw events are funneled through one channel into one worker thread, which
//! owns the classifier, the ref snapshots and the debounce accumulator. The
//! raw source's delivery thread only enqueues.
//!
//! The lifecycle mutex is never held across a worker join, so listeners may
//! call back into their watcher while another thread is stopping it.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::domain::ports::{EventSink, RawEventSource, RepositoryListener, Subscription};
use crate::domain::services::EventClassifier;
use crate::domain::value_objects::{RawEvent, WatchedPaths};
use crate::error::{WatchError, WatchResult};
use crate::infrastructure::discovery;

use super::flush;
use super::pending::PendingDispatch;
use super::ref_store::RefStore;
use super::registry::{ListenerHandle, ListenerRegistry};

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

static NEXT_WATCHER_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    /// Set on a dispatch worker thread: the id of the watcher it serves and
    /// the cancellation flag of that worker's watch. Listeners calling into a
    /// different watcher from this thread are treated as outside callers.
    static DISPATCH_WORKER: RefCell<Option<(u64, Arc<AtomicBool>)>> = const { RefCell::new(None) };
}

/// Lifecycle state of a watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherState {
    Stopped,
    Starting,
    Running,
    Stopping,
}

enum WorkerMessage {
    Raw(RawEvent),
    Shutdown,
}

struct ActiveWatch {
    subscription: Box<dyn Subscription>,
    tx: Sender<WorkerMessage>,
    cancelled: Arc<AtomicBool>,
    worker: JoinHandle<()>,
}

struct Lifecycle {
    state: WatcherState,
    active: Option<ActiveWatch>,
    /// Worker stopped by one of its own listeners; joined by the next
    /// `start` or outside `stop`
    detached: Option<JoinHandle<()>>,
}

/// Watches one repository and reports semantic changes to listeners
pub struct RepositoryWatcher {
    id: u64,
    paths: WatchedPaths,
    debounce: Duration,
    source: Arc<dyn RawEventSource>,
    listeners: Arc<ListenerRegistry>,
    lifecycle: Mutex<Lifecycle>,
    transition: Condvar,
}

impl RepositoryWatcher {
    pub fn new(paths: WatchedPaths, source: Arc<dyn RawEventSource>) -> Self {
        Self {
            id: NEXT_WATCHER_ID.fetch_add(1, Ordering::Relaxed),
            paths,
            debounce: Duration::from_millis(DEBOUNCE_MS),
            source,
            listeners: Arc::new(ListenerRegistry::new()),
            lifecycle: Mutex::new(Lifecycle {
                state: WatcherState::Stopped,
                active: None,
                detached: None,
            }),
            transition: Condvar::new(),
        }
    }

    /// Set the debounce window
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn paths(&self) -> &WatchedPaths {
        &self.paths
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn add_listener(&self, listener: Arc<dyn RepositoryListener>) -> ListenerHandle {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    pub fn state(&self) -> WatcherState {
        self.lock_lifecycle().state
    }

    pub fn is_running(&self) -> bool {
        self.state() == WatcherState::Running
    }

    fn lock_lifecycle(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait_transition<'a>(&self, guard: MutexGuard<'a, Lifecycle>) -> MutexGuard<'a, Lifecycle> {
        self.transition
            .wait(guard)
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn settle(&self, state: WatcherState, active: Option<ActiveWatch>) {
        let mut lifecycle = self.lock_lifecycle();
        lifecycle.state = state;
        lifecycle.active = active;
        drop(lifecycle);
        self.transition.notify_all();
    }

    /// Cancellation flag of this watcher's worker, when called on that worker
    fn own_dispatch_flag(&self) -> Option<Arc<AtomicBool>> {
        DISPATCH_WORKER.with(|marker| {
            let flag = match marker.borrow().as_ref() {
                Some((id, cancelled)) if *id == self.id => Some(Arc::clone(cancelled)),
                _ => None,
            };
            flag
        })
    }

    /// Take the ref baseline and begin watching. No-op if already running.
    ///
    /// On failure the watcher stays stopped and `start` may be retried. A
    /// listener whose watch has been stopped cannot restart it: its worker
    /// has to finish first, so this returns
    /// [`WatchError::RestartFromListener`].
    pub fn start(&self) -> WatchResult<()> {
        if let Some(cancelled) = self.own_dispatch_flag() {
            if cancelled.load(Ordering::SeqCst) {
                return Err(WatchError::RestartFromListener);
            }
            // our own watch is still running
            return Ok(());
        }

        let mut lifecycle = self.lock_lifecycle();
        loop {
            let state = lifecycle.state;
            match state {
                WatcherState::Running => return Ok(()),
                WatcherState::Stopped => break,
                WatcherState::Starting | WatcherState::Stopping => {
                    lifecycle = self.wait_transition(lifecycle);
                }
            }
        }
        lifecycle.state = WatcherState::Starting;
        let detached = lifecycle.detached.take();
        drop(lifecycle);

        if let Some(worker) = detached {
            join_worker(worker);
        }

        match self.activate() {
            Ok(active) => {
                self.settle(WatcherState::Running, Some(active));
                debug!("watcher running for {}", self.paths.repository_root().display());
                Ok(())
            }
            Err(err) => {
                self.settle(WatcherState::Stopped, None);
                Err(err)
            }
        }
    }

    fn activate(&self) -> WatchResult<ActiveWatch> {
        let paths = discovery::normalize(&self.paths);
        paths.validate()?;

        let store = RefStore::load(&paths);
        debug!(
            "baseline: {} local refs, {} remote refs",
            store.local().len(),
            store.remote().len()
        );

        let (tx, rx) = mpsc::channel();
        let sink_tx = tx.clone();
        let sink: EventSink = Arc::new(move |event| {
            // receiver gone means we are stopping
            let _ = sink_tx.send(WorkerMessage::Raw(event));
        });
        let subscription = self.source.subscribe(&paths.watch_roots(), sink)?;

        let cancelled = Arc::new(AtomicBool::new(false));
        let worker = DispatchWorker {
            watcher_id: self.id,
            head_file: paths.head_file().to_path_buf(),
            classifier: EventClassifier::new(paths),
            store,
            debounce: self.debounce,
            listeners: Arc::clone(&self.listeners),
            cancelled: Arc::clone(&cancelled),
        };

        let worker = thread::Builder::new()
            .name("repowatch-dispatch".to_string())
            .spawn(move || worker.run(rx))
            .map_err(|e| WatchError::WorkerSpawn(e.to_string()))?;

        Ok(ActiveWatch {
            subscription,
            tx,
            cancelled,
            worker,
        })
    }

    /// Stop watching. No-op if already stopped.
    ///
    /// Pending events are discarded. When called from outside a listener this
    /// blocks until the dispatch worker has exited, so no notification is
    /// delivered after it returns. From a listener it returns at once and the
    /// in-flight cycle finishes delivering.
    pub fn stop(&self) {
        let on_worker = match self.own_dispatch_flag() {
            // this worker's watch is already being torn down
            Some(cancelled) if cancelled.load(Ordering::SeqCst) => return,
            Some(_) => true,
            None => false,
        };

        let mut lifecycle = self.lock_lifecycle();
        loop {
            let state = lifecycle.state;
            match state {
                WatcherState::Running => break,
                WatcherState::Stopped => {
                    let Some(worker) = lifecycle.detached.take() else {
                        return;
                    };
                    lifecycle.state = WatcherState::Stopping;
                    drop(lifecycle);
                    join_worker(worker);
                    self.settle(WatcherState::Stopped, None);
                    return;
                }
                WatcherState::Starting | WatcherState::Stopping => {
                    lifecycle = self.wait_transition(lifecycle);
                }
            }
        }

        let Some(active) = lifecycle.active.take() else {
            lifecycle.state = WatcherState::Stopped;
            return;
        };
        let ActiveWatch {
            subscription,
            tx,
            cancelled,
            worker,
        } = active;
        cancelled.store(true, Ordering::SeqCst);

        if on_worker {
            lifecycle.detached = Some(worker);
            lifecycle.state = WatcherState::Stopped;
            drop(lifecycle);
            self.transition.notify_all();
            drop(subscription);
            let _ = tx.send(WorkerMessage::Shutdown);
            debug!("stop requested from a listener; worker exits after this cycle");
            return;
        }

        lifecycle.state = WatcherState::Stopping;
        drop(lifecycle);
        drop(subscription);
        let _ = tx.send(WorkerMessage::Shutdown);
        join_worker(worker);
        self.settle(WatcherState::Stopped, None);
        debug!("watcher stopped for {}", self.paths.repository_root().display());
    }
}

impl Drop for RepositoryWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn join_worker(worker: JoinHandle<()>) {
    if worker.join().is_err() {
        warn!("dispatch worker panicked");
    }
}

struct DispatchWorker {
    watcher_id: u64,
    classifier: EventClassifier,
    store: RefStore,
    head_file: PathBuf,
    debounce: Duration,
    listeners: Arc<ListenerRegistry>,
    cancelled: Arc<AtomicBool>,
}

impl DispatchWorker {
    fn run(mut self, rx: Receiver<WorkerMessage>) {
        DISPATCH_WORKER.with(|marker| {
            *marker.borrow_mut() = Some((self.watcher_id, Arc::clone(&self.cancelled)));
        });

        // Idle when None, Accumulating when Some
        let mut cycle: Option<(PendingDispatch, Instant)> = None;

        loop {
            let deadline = cycle.as_ref().map(|(_, deadline)| *deadline);
            let message = match deadline {
                Some(deadline) => {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match rx.recv_timeout(wait) {
                        Ok(message) => message,
                        Err(RecvTimeoutError::Timeout) => {
                            if let Some((pending, _)) = cycle.take() {
                                self.flush(pending);
                            }
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                None => match rx.recv() {
                    Ok(message) => message,
                    Err(_) => break,
                },
            };

            let event = match message {
                WorkerMessage::Raw(event) => event,
                WorkerMessage::Shutdown => break,
            };

            let Some(category) = self.classifier.classify(&event.path) else {
                trace!("ignoring {}", event.path.display());
                continue;
            };
            trace!("{category} <- {:?} {}", event.kind, event.path.display());

            let deadline = Instant::now() + self.debounce;
            match cycle.as_mut() {
                Some((pending, current)) => {
                    pending.record(category);
                    *current = deadline;
                }
                None => {
                    let mut pending = PendingDispatch::new();
                    pending.record(category);
                    cycle = Some((pending, deadline));
                }
            }
        }

        if let Some((pending, _)) = cycle {
            debug!(
                "discarding unflushed cycle of {} events",
                pending.events_seen()
            );
        }
    }

    fn flush(&mut self, pending: PendingDispatch) {
        debug_assert!(!pending.is_empty(), "flush without classified events");
        if self.cancelled.load(Ordering::SeqCst) {
            debug!("stop requested, dropping cycle");
            return;
        }

        let events = flush::plan(&pending, &mut self.store, &self.head_file);
        debug!(
            "dispatch cycle: {} raw events -> {} notifications",
            pending.events_seen(),
            events.len()
        );
        self.listeners.dispatch(&events);
    }
}
