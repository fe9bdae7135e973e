//! Repository watching
//!
//! Turns raw filesystem events into semantic repository notifications:
//! - Classification against the watched paths
//! - Debouncing (100ms default): a burst of events becomes one cycle
//! - Ref snapshot diffing once per cycle
//! - Ordered dispatch to registered listeners
//!
//! ## Architecture
//!
//! - `RepositoryWatcher` - Lifecycle and the single dispatch worker
//! - `PendingDispatch` - What the current cycle has seen
//! - `RefStore` - Last observed local/remote ref snapshots
//! - `ListenerRegistry` - Handle-based listener registration
//!
//! ## Usage
//!
//! ```ignore
//! let watcher = RepositoryWatcher::new(paths, Arc::new(NotifyEventSource::new()));
//! watcher.add_listener(Arc::new(MyListener));
//! watcher.start()?;
//! // ...
//! watcher.stop();
//! ```

mod flush;
mod pending;
mod ref_store;
mod registry;
mod watcher;


pub use flush::plan;
pub use pending::PendingDispatch;
pub use ref_store::RefStore;
pub use registry::{ListenerHandle, ListenerRegistry};
pub use watcher::{RepositoryWatcher, WatcherState, DEBOUNCE_MS};
