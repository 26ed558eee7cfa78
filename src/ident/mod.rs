//! Namespaced identifiers for blockveil
//!
//! Every block the store tracks is keyed by a `namespace:path` identifier.
//! All user input passes through [`Identifier::normalize`] before it is
//! stored or compared, so two textual forms that normalize identically are
//! the same entity everywhere in the crate.

mod identifier;

pub use identifier::{Identifier, DEFAULT_NAMESPACE};
