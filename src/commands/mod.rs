//! # Command surface
//!
//! In-process glue between a host command dispatcher and the store.
//! The host parses user input and renders feedback; this module owns
//! the store calls and the save-after-successful-mutation rule.

mod commands;

pub use commands::{canonical_or_raw, CommandOutcome, VeilCommands};
