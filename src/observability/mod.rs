//! Observability for blockveil
//!
//! A single structured logger used as the warning side channel. The
//! render path must never block or fail because of logging, so:
//!
//! 1. Logging is fire-and-forget; write errors are swallowed
//! 2. One log line = one event, always valid JSON
//! 3. Field order is deterministic (event, severity, then keys sorted)
//! 4. Synchronous writes, no buffering, no background threads

mod logger;

pub use logger::{Logger, Severity};
