//! CLI command implementations
//!
//! Each command loads the configuration, builds a registry (the file
//! named by `registry_path`, or a permissive one when absent), loads
//! the persisted list into a fresh store, and dispatches through the
//! same command surface the in-process host uses.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::commands::{CommandOutcome, VeilCommands};
use crate::ident::Identifier;
use crate::observability::Logger;
use crate::registry::{BlockRegistry, PermissiveRegistry, StaticRegistry};
use crate::store::VeilStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the hidden-block list file (required)
    pub list_path: String,

    /// Path of a JSON array of known identifiers (optional; every
    /// well-formed identifier is accepted when absent)
    #[serde(default)]
    pub registry_path: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.list_path.is_empty() {
            return Err(CliError::config_error("list_path must not be empty"));
        }
        if let Some(registry_path) = &self.registry_path {
            if registry_path.is_empty() {
                return Err(CliError::config_error(
                    "registry_path must not be empty when present",
                ));
            }
        }
        Ok(())
    }

    /// Build the registry this configuration names.
    fn registry(&self) -> CliResult<CliRegistry> {
        let Some(registry_path) = &self.registry_path else {
            return Ok(CliRegistry::Permissive(PermissiveRegistry));
        };

        let content = fs::read_to_string(registry_path)
            .map_err(|e| CliError::registry_error(format!("Failed to read registry: {}", e)))?;
        let entries: Vec<String> = serde_json::from_str(&content)
            .map_err(|e| CliError::registry_error(format!("Invalid registry JSON: {}", e)))?;

        let (registry, rejected) = StaticRegistry::from_raw(&entries);
        for raw in &rejected {
            Logger::warn("VEIL_REGISTRY_ENTRY_UNPARSEABLE", &[("raw", raw.as_str())]);
        }

        Ok(CliRegistry::Static(registry))
    }
}

/// Registry selected by the configuration.
enum CliRegistry {
    Static(StaticRegistry),
    Permissive(PermissiveRegistry),
}

impl BlockRegistry for CliRegistry {
    type Handle = Identifier;

    fn contains(&self, id: &Identifier) -> bool {
        match self {
            Self::Static(r) => r.contains(id),
            Self::Permissive(r) => r.contains(id),
        }
    }

    fn identify(&self, handle: &Identifier) -> Option<Identifier> {
        match self {
            Self::Static(r) => r.identify(handle),
            Self::Permissive(r) => r.identify(handle),
        }
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a single CLI command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Add { id, config } => add(&config, &id),
        Command::Remove { id, config } => remove(&config, &id),
        Command::List { config } => list(&config),
        Command::Count { config } => count(&config),
        Command::Normalize { id } => normalize(&id),
    }
}

/// Create an empty hidden-block list at the configured path
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let list_path = Path::new(&config.list_path);

    if list_path.exists() {
        return Err(CliError::already_initialized(&config.list_path));
    }

    let store = VeilStore::new(CliRegistry::Permissive(PermissiveRegistry));
    store.load(list_path)?;

    Logger::info("VEIL_CLI_INITIALIZED", &[("path", config.list_path.as_str())]);
    println!("Created empty hidden-block list at {}", config.list_path);
    Ok(())
}

fn open_commands(config: &Config) -> CliResult<VeilCommands<CliRegistry>> {
    let store = Arc::new(VeilStore::new(config.registry()?));
    store.load(Path::new(&config.list_path))?;
    Ok(VeilCommands::new(store, config.list_path.clone()))
}

/// Add an identifier to the list and persist it
pub fn add(config_path: &Path, raw: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let commands = open_commands(&config)?;

    match commands.add(raw) {
        CommandOutcome::Added { id } => {
            println!("Added: {}", id);
            Ok(())
        }
        CommandOutcome::AddRejected { raw } => Err(CliError::rejected(format!(
            "Invalid, unknown or already present: '{}'",
            raw
        ))),
        CommandOutcome::SaveFailed { error, .. } => Err(error.into()),
        _ => unreachable!("add returns Added, AddRejected or SaveFailed"),
    }
}

/// Remove an identifier from the list and persist it
pub fn remove(config_path: &Path, raw: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let commands = open_commands(&config)?;

    match commands.remove(raw) {
        CommandOutcome::Removed { id } => {
            println!("Removed: {}", id);
            Ok(())
        }
        CommandOutcome::RemoveRejected { raw } => Err(CliError::rejected(format!(
            "Not in the list: '{}'",
            raw
        ))),
        CommandOutcome::SaveFailed { error, .. } => Err(error.into()),
        _ => unreachable!("remove returns Removed, RemoveRejected or SaveFailed"),
    }
}

/// Print the sorted hidden-block list
pub fn list(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let commands = open_commands(&config)?;

    match commands.list() {
        CommandOutcome::Listing { ids } => {
            if ids.is_empty() {
                println!("(empty)");
            } else {
                for id in ids {
                    println!("{}", id);
                }
            }
            Ok(())
        }
        _ => unreachable!("list returns Listing"),
    }
}

/// Print the number of hidden identifiers
pub fn count(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let commands = open_commands(&config)?;

    println!("{}", commands.store().count());
    Ok(())
}

/// Print the canonical form of an identifier
pub fn normalize(raw: &str) -> CliResult<()> {
    match Identifier::normalize(raw) {
        Some(id) => {
            println!("{}", id);
            Ok(())
        }
        None => Err(CliError::invalid_id(raw)),
    }
}
