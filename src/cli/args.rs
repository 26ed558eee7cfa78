//! CLI argument definitions using clap
//!
//! Commands:
//! - blockveil init --config <path>
//! - blockveil add <id> --config <path>
//! - blockveil remove <id> --config <path>
//! - blockveil list --config <path>
//! - blockveil count --config <path>
//! - blockveil normalize <id>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// blockveil - toggleable, persisted hidden-block list for voxel renderers
#[derive(Parser, Debug)]
#[command(name = "blockveil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty hidden-block list file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./blockveil.json")]
        config: PathBuf,
    },

    /// Add an identifier to the hidden-block list
    Add {
        /// Block identifier, with or without namespace
        id: String,

        /// Path to configuration file
        #[arg(long, default_value = "./blockveil.json")]
        config: PathBuf,
    },

    /// Remove an identifier from the hidden-block list
    Remove {
        /// Block identifier, with or without namespace
        id: String,

        /// Path to configuration file
        #[arg(long, default_value = "./blockveil.json")]
        config: PathBuf,
    },

    /// Print the hidden-block list, sorted
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./blockveil.json")]
        config: PathBuf,
    },

    /// Print the number of hidden identifiers
    Count {
        /// Path to configuration file
        #[arg(long, default_value = "./blockveil.json")]
        config: PathBuf,
    },

    /// Print the canonical form of an identifier
    Normalize {
        /// Block identifier, with or without namespace
        id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
