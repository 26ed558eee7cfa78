//! In-memory registry implementations.
//!
//! `StaticRegistry` backs the CLI (known identifiers come from a file)
//! and the test suite. `PermissiveRegistry` accepts everything that
//! parses, for hosts that have no existence oracle.

use std::collections::HashSet;

use crate::ident::Identifier;

use super::BlockRegistry;

/// Registry over a fixed set of known identifiers.
#[derive(Debug, Default)]
pub struct StaticRegistry {
    known: HashSet<Identifier>,
}

impl StaticRegistry {
    /// Builds a registry from already-validated identifiers.
    pub fn new(ids: impl IntoIterator<Item = Identifier>) -> Self {
        Self {
            known: ids.into_iter().collect(),
        }
    }

    /// Builds a registry from raw strings, dropping entries that do not
    /// normalize. Returns the registry and the rejected raw entries so
    /// the caller can report them.
    pub fn from_raw(entries: &[String]) -> (Self, Vec<String>) {
        let mut known = HashSet::new();
        let mut rejected = Vec::new();
        for raw in entries {
            match Identifier::normalize(raw) {
                Some(id) => {
                    known.insert(id);
                }
                None => rejected.push(raw.clone()),
            }
        }
        (Self { known }, rejected)
    }

    /// Number of known identifiers.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Whether the registry knows no identifiers.
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl BlockRegistry for StaticRegistry {
    type Handle = Identifier;

    fn contains(&self, id: &Identifier) -> bool {
        self.known.contains(id)
    }

    fn identify(&self, handle: &Identifier) -> Option<Identifier> {
        Some(handle.clone())
    }
}

/// Registry that accepts every well-formed identifier.
#[derive(Debug, Default)]
pub struct PermissiveRegistry;

impl BlockRegistry for PermissiveRegistry {
    type Handle = Identifier;

    fn contains(&self, _id: &Identifier) -> bool {
        true
    }

    fn identify(&self, handle: &Identifier) -> Option<Identifier> {
        Some(handle.clone())
    }
}
