//! The `VeilStore`: concurrent hidden-block set plus enable flag.
//!
//! Mutations (add/remove/set_enabled/load/save) arrive from a single
//! control path. `should_hide` runs on the render path, potentially
//! concurrently with a mutation, and must complete in bounded time:
//! the set is a sharded `DashSet` so membership tests never wait on a
//! global lock, and the flag is an `AtomicBool` read with `Relaxed`
//! ordering (it carries no ordering obligations with the set).

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashSet;

use crate::ident::Identifier;
use crate::observability::Logger;
use crate::registry::BlockRegistry;

use super::errors::StoreResult;
use super::persist;

/// Concurrent set of hidden block identifiers with an enable flag.
///
/// The registry is injected at construction and consulted on every
/// add/load (existence) and on every `should_hide` (handle resolution).
pub struct VeilStore<R: BlockRegistry> {
    hidden: DashSet<Identifier>,
    enabled: AtomicBool,
    registry: R,
}

impl<R: BlockRegistry> VeilStore<R> {
    /// Creates an empty, disabled store around the given registry.
    pub fn new(registry: R) -> Self {
        Self {
            hidden: DashSet::new(),
            enabled: AtomicBool::new(false),
            registry,
        }
    }

    /// Whether hiding is currently active.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turns hiding on or off. Idempotent, always succeeds.
    pub fn set_enabled(&self, value: bool) {
        self.enabled.store(value, Ordering::Relaxed);
    }

    /// Number of hidden identifiers.
    pub fn count(&self) -> usize {
        self.hidden.len()
    }

    /// Access to the injected registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Adds a raw identifier to the hidden set.
    ///
    /// Returns true iff the identifier normalized, exists in the
    /// registry, and was not already present. "Unparseable", "unknown"
    /// and "already present" all report false; callers needing the
    /// distinction check [`Identifier::normalize`] and the registry
    /// themselves before calling.
    pub fn add(&self, raw: &str) -> bool {
        let Some(id) = Identifier::normalize(raw) else {
            return false;
        };
        if !self.registry.contains(&id) {
            return false;
        }
        self.hidden.insert(id)
    }

    /// Removes a raw identifier from the hidden set.
    ///
    /// Returns true iff the identifier normalized and was present.
    pub fn remove(&self, raw: &str) -> bool {
        let Some(id) = Identifier::normalize(raw) else {
            return false;
        };
        self.hidden.remove(&id).is_some()
    }

    /// All hidden identifiers in canonical form, sorted ascending.
    pub fn list(&self) -> Vec<String> {
        let mut out: Vec<String> = self.hidden.iter().map(|id| id.to_string()).collect();
        out.sort();
        out
    }

    /// Render-path membership test.
    ///
    /// False when hiding is disabled, when there is no handle, or when
    /// the registry cannot resolve it. Expected resolution failures are
    /// the registry's `None`; a panicking registry is absorbed one
    /// level up by the render guard.
    pub fn should_hide(&self, handle: Option<&R::Handle>) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let Some(handle) = handle else {
            return false;
        };
        match self.registry.identify(handle) {
            Some(id) => self.hidden.contains(&id),
            None => false,
        }
    }

    /// Replaces the set with the persisted list at `path`.
    ///
    /// A missing file is created empty (parent directories included).
    /// Entries that do not normalize or that the registry does not know
    /// are skipped with a warning. A structurally malformed file leaves
    /// the store empty and returns Ok; only I/O failures are errors.
    pub fn load(&self, path: &Path) -> StoreResult<()> {
        self.hidden.clear();

        if !path.exists() {
            return persist::write_entries(path, &[]);
        }

        let Some(entries) = persist::read_entries(path)? else {
            // Malformed list: warning already logged, start empty.
            return Ok(());
        };

        for raw in &entries {
            match Identifier::normalize(raw) {
                None => {
                    Logger::warn("VEIL_ENTRY_UNPARSEABLE", &[("raw", raw.as_str())]);
                }
                Some(id) => {
                    if self.registry.contains(&id) {
                        self.hidden.insert(id);
                    } else {
                        Logger::warn("VEIL_ENTRY_UNKNOWN", &[("id", &id.to_string())]);
                    }
                }
            }
        }

        Ok(())
    }

    /// Persists the current list to `path`.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        persist::write_entries(path, &self.list())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::registry::StaticRegistry;

    use super::*;

    fn registry(ids: &[&str]) -> StaticRegistry {
        StaticRegistry::new(ids.iter().map(|raw| Identifier::normalize(raw).unwrap()))
    }

    fn store(ids: &[&str]) -> VeilStore<StaticRegistry> {
        VeilStore::new(registry(ids))
    }

    #[test]
    fn test_starts_empty_and_disabled() {
        let store = store(&["stone"]);
        assert!(!store.is_enabled());
        assert_eq!(store.count(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_add_known_identifier() {
        let store = store(&["stone"]);

        assert!(store.add("stone"));
        assert_eq!(store.count(), 1);

        // Second insertion of an equivalent form is a no-op.
        assert!(!store.add("minecraft:stone"));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_add_rejects_unparseable_and_unknown() {
        let store = store(&["stone"]);

        assert!(!store.add("invalid!!"));
        assert!(!store.add(""));
        assert!(!store.add("gravel"));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_remove() {
        let store = store(&["stone"]);
        store.add("stone");

        assert!(!store.remove("dirt"));
        assert!(store.remove("minecraft:stone"));
        assert_eq!(store.count(), 0);
        assert!(!store.remove("stone"));
    }

    #[test]
    fn test_remove_rejects_unparseable() {
        let store = store(&["stone"]);
        assert!(!store.remove("  "));
    }

    #[test]
    fn test_list_sorted_no_duplicates() {
        let store = store(&["stone", "dirt", "gravel"]);
        store.add("stone");
        store.add("gravel");
        store.add("dirt");
        store.add("minecraft:dirt");

        assert_eq!(
            store.list(),
            vec![
                "minecraft:dirt".to_string(),
                "minecraft:gravel".to_string(),
                "minecraft:stone".to_string(),
            ]
        );
    }

    #[test]
    fn test_should_hide_respects_flag() {
        let store = store(&["stone"]);
        store.add("stone");
        let id = Identifier::normalize("stone").unwrap();

        assert!(!store.should_hide(Some(&id)));
        store.set_enabled(true);
        assert!(store.should_hide(Some(&id)));
        store.set_enabled(false);
        assert!(!store.should_hide(Some(&id)));
    }

    #[test]
    fn test_should_hide_absent_handle() {
        let store = store(&["stone"]);
        store.add("stone");
        store.set_enabled(true);

        assert!(!store.should_hide(None));
    }

    #[test]
    fn test_should_hide_non_member() {
        let store = store(&["stone", "dirt"]);
        store.add("stone");
        store.set_enabled(true);

        let dirt = Identifier::normalize("dirt").unwrap();
        assert!(!store.should_hide(Some(&dirt)));
    }

    #[test]
    fn test_load_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config").join("veil.json");

        let store = store(&["stone"]);
        store.load(&path).unwrap();

        assert_eq!(store.count(), 0);
        assert!(path.exists());
        let json = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }

    #[test]
    fn test_load_skips_bad_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("veil.json");
        fs::write(&path, r#"["stone","invalid!!","minecraft:dirt"]"#).unwrap();

        let store = store(&["stone", "dirt"]);
        store.load(&path).unwrap();

        assert_eq!(
            store.list(),
            vec!["minecraft:dirt".to_string(), "minecraft:stone".to_string()]
        );
    }

    #[test]
    fn test_load_skips_unknown_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("veil.json");
        fs::write(&path, r#"["stone","notablock"]"#).unwrap();

        let store = store(&["stone"]);
        store.load(&path).unwrap();

        assert_eq!(store.list(), vec!["minecraft:stone".to_string()]);
    }

    #[test]
    fn test_load_malformed_leaves_store_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("veil.json");
        fs::write(&path, r#"{"not":"an array"}"#).unwrap();

        let store = store(&["stone"]);
        store.add("stone");
        store.load(&path).unwrap();

        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_load_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("veil.json");
        fs::write(&path, r#"["dirt"]"#).unwrap();

        let store = store(&["stone", "dirt"]);
        store.add("stone");
        store.load(&path).unwrap();

        assert_eq!(store.list(), vec!["minecraft:dirt".to_string()]);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("veil.json");

        let store = store(&["stone", "dirt"]);
        store.add("stone");
        store.add("dirt");
        store.save(&path).unwrap();

        let fresh = self::store(&["stone", "dirt"]);
        fresh.load(&path).unwrap();

        assert_eq!(fresh.list(), store.list());
    }

    #[test]
    fn test_flag_not_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("veil.json");

        let store = store(&["stone"]);
        store.set_enabled(true);
        store.add("stone");
        store.save(&path).unwrap();

        let fresh = self::store(&["stone"]);
        fresh.load(&path).unwrap();
        assert!(!fresh.is_enabled());
    }
}
