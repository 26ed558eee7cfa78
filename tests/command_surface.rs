//! Command Surface Tests
//!
//! The command surface is the single mutation path: every successful
//! add/remove persists the list immediately, rejected commands leave
//! the file untouched, and the enable flag never reaches disk.

use std::fs;
use std::sync::Arc;

use blockveil::commands::{CommandOutcome, VeilCommands};
use blockveil::guard::RenderGuard;
use blockveil::ident::Identifier;
use blockveil::registry::StaticRegistry;
use blockveil::store::VeilStore;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn setup(dir: &TempDir, known: &[&str]) -> VeilCommands<StaticRegistry> {
    let registry =
        StaticRegistry::new(known.iter().map(|raw| Identifier::normalize(raw).unwrap()));
    let store = Arc::new(VeilStore::new(registry));
    store.load(&dir.path().join("veil.json")).unwrap();
    VeilCommands::new(store, dir.path().join("veil.json"))
}

fn persisted(dir: &TempDir) -> Vec<String> {
    let json = fs::read_to_string(dir.path().join("veil.json")).unwrap();
    serde_json::from_str(&json).unwrap()
}

// =============================================================================
// Save-on-mutate
// =============================================================================

/// Every successful mutation is on disk before the command returns.
#[test]
fn test_mutations_persist_immediately() {
    let dir = TempDir::new().unwrap();
    let commands = setup(&dir, &["stone", "dirt"]);

    commands.add("stone");
    assert_eq!(persisted(&dir), vec!["minecraft:stone".to_string()]);

    commands.add("dirt");
    assert_eq!(
        persisted(&dir),
        vec!["minecraft:dirt".to_string(), "minecraft:stone".to_string()]
    );

    commands.remove("stone");
    assert_eq!(persisted(&dir), vec!["minecraft:dirt".to_string()]);
}

/// Rejected mutations leave the persisted list unchanged.
#[test]
fn test_rejections_do_not_persist() {
    let dir = TempDir::new().unwrap();
    let commands = setup(&dir, &["stone"]);

    commands.add("stone");
    let before = persisted(&dir);

    assert!(matches!(
        commands.add("unknown_block"),
        CommandOutcome::AddRejected { .. }
    ));
    assert!(matches!(
        commands.add("invalid!!"),
        CommandOutcome::AddRejected { .. }
    ));
    assert!(matches!(
        commands.remove("dirt"),
        CommandOutcome::RemoveRejected { .. }
    ));

    assert_eq!(persisted(&dir), before);
}

// =============================================================================
// Flag lifecycle
// =============================================================================

/// enable/disable mutate the flag only; the persisted file stays as-is
/// and a restart comes back disabled.
#[test]
fn test_flag_is_volatile() {
    let dir = TempDir::new().unwrap();
    let commands = setup(&dir, &["stone"]);

    commands.add("stone");
    let before = persisted(&dir);

    commands.enable();
    assert!(commands.store().is_enabled());
    assert_eq!(persisted(&dir), before);

    // Simulated restart: fresh store, same file.
    let fresh = setup(&dir, &["stone"]);
    assert!(!fresh.store().is_enabled());
    assert_eq!(fresh.store().count(), 1);
}

// =============================================================================
// Wiring with the guard
// =============================================================================

/// The store mutated through commands is the store the guard reads.
#[test]
fn test_commands_and_guard_share_state() {
    let dir = TempDir::new().unwrap();
    let commands = setup(&dir, &["stone"]);
    let guard = RenderGuard::new(Arc::clone(commands.store()));
    let stone = Identifier::normalize("stone").unwrap();

    assert!(!guard.should_suppress(Some(&stone)));

    commands.enable();
    commands.add("stone");
    assert!(guard.should_suppress(Some(&stone)));

    commands.remove("stone");
    assert!(!guard.should_suppress(Some(&stone)));

    commands.add("stone");
    commands.disable();
    assert!(!guard.should_suppress(Some(&stone)));
}
