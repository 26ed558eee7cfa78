//! Command handlers over a shared store.

use std::path::PathBuf;
use std::sync::Arc;

use crate::ident::Identifier;
use crate::observability::Logger;
use crate::registry::BlockRegistry;
use crate::store::{StoreError, VeilStore};

/// What a command did, for the host to render to the user.
#[derive(Debug)]
pub enum CommandOutcome {
    /// Hiding turned on
    Enabled,
    /// Hiding turned off
    Disabled,
    /// Identifier added and the list persisted
    Added {
        /// Canonical form of the added identifier
        id: String,
    },
    /// Identifier removed and the list persisted
    Removed {
        /// Canonical form of the removed identifier
        id: String,
    },
    /// Add refused: unparseable, unknown to the registry, or already
    /// present
    AddRejected {
        /// The raw input as the user typed it
        raw: String,
    },
    /// Remove refused: unparseable or not in the list
    RemoveRejected {
        /// The raw input as the user typed it
        raw: String,
    },
    /// The mutation stuck but persisting it failed; the on-disk list is
    /// stale until the next successful save
    SaveFailed {
        /// Canonical form of the mutated identifier
        id: String,
        /// The persistence failure
        error: StoreError,
    },
    /// Current list, sorted
    Listing {
        /// Canonical identifiers
        ids: Vec<String>,
    },
}

/// Command surface over a shared [`VeilStore`].
///
/// Every mutating command that succeeds saves the list immediately;
/// the store itself never auto-persists. The enable flag is volatile
/// and is deliberately not saved.
pub struct VeilCommands<R: BlockRegistry> {
    store: Arc<VeilStore<R>>,
    list_path: PathBuf,
}

impl<R: BlockRegistry> VeilCommands<R> {
    /// Binds the command surface to a store and its persistence path.
    pub fn new(store: Arc<VeilStore<R>>, list_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            list_path: list_path.into(),
        }
    }

    /// Turns hiding on.
    pub fn enable(&self) -> CommandOutcome {
        self.store.set_enabled(true);
        Logger::info("VEIL_ENABLED", &[]);
        CommandOutcome::Enabled
    }

    /// Turns hiding off.
    pub fn disable(&self) -> CommandOutcome {
        self.store.set_enabled(false);
        Logger::info("VEIL_DISABLED", &[]);
        CommandOutcome::Disabled
    }

    /// Adds an identifier and persists the list.
    pub fn add(&self, raw: &str) -> CommandOutcome {
        if !self.store.add(raw) {
            return CommandOutcome::AddRejected {
                raw: raw.to_string(),
            };
        }
        let id = canonical_or_raw(raw);
        match self.persist(&id) {
            Ok(()) => CommandOutcome::Added { id },
            Err(error) => CommandOutcome::SaveFailed { id, error },
        }
    }

    /// Removes an identifier and persists the list.
    pub fn remove(&self, raw: &str) -> CommandOutcome {
        if !self.store.remove(raw) {
            return CommandOutcome::RemoveRejected {
                raw: raw.to_string(),
            };
        }
        let id = canonical_or_raw(raw);
        match self.persist(&id) {
            Ok(()) => CommandOutcome::Removed { id },
            Err(error) => CommandOutcome::SaveFailed { id, error },
        }
    }

    /// Current hidden list, sorted.
    pub fn list(&self) -> CommandOutcome {
        CommandOutcome::Listing {
            ids: self.store.list(),
        }
    }

    /// The wrapped store.
    pub fn store(&self) -> &Arc<VeilStore<R>> {
        &self.store
    }

    fn persist(&self, id: &str) -> Result<(), StoreError> {
        self.store.save(&self.list_path).map_err(|error| {
            Logger::error(
                "VEIL_SAVE_FAILED",
                &[("id", id), ("reason", &error.to_string())],
            );
            error
        })
    }
}

/// Echo helper: the canonical form when the input parses, the raw input
/// unchanged otherwise.
pub fn canonical_or_raw(raw: &str) -> String {
    match Identifier::normalize(raw) {
        Some(id) => id.to_string(),
        None => raw.to_string(),
    }
}
