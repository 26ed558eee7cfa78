//! blockveil - toggleable, persisted hidden-block set for voxel render
//! pipelines
//!
//! The render host asks one question per draw call: should this block
//! be suppressed? Everything else exists to keep that answer fast,
//! safe and durable.

pub mod cli;
pub mod commands;
pub mod guard;
pub mod ident;
pub mod observability;
pub mod registry;
pub mod store;
