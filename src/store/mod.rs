//! Hidden-block store for blockveil
//!
//! Single source of truth for which blocks are hidden and whether
//! hiding is active. The set and the flag are owned here exclusively;
//! everything else goes through the store's operations, so one instance
//! can be shared behind `Arc` between the command path and the render
//! path.
//!
//! # Design Principles
//!
//! - Membership reads never block behind a mutation (sharded set)
//! - Validation failures are boolean results, never errors
//! - I/O failures surface only on the control path (load/save)
//! - A malformed persisted list degrades to an empty store, not a crash

mod errors;
mod persist;
mod store;

pub use errors::{StoreError, StoreResult};
pub use store::VeilStore;
