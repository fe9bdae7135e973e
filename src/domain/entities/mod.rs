//! Domain Entities
//!
//! - `RefSnapshot` - last observed contents of a reference tree
//! - `RefDiff` - created/deleted/changed names between two snapshots

mod ref_snapshot;

pub use ref_snapshot::{RefDiff, RefSnapshot};
