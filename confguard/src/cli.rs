// confguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the confguard
//! application, including all available commands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "confguard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sanitize home-automation configuration for AI sharing, and restore it afterward",
    long_about = "Confguard replaces credentials, addresses, and other sensitive tokens in \
configuration text with stable placeholders before the text is handed to an AI assistant, \
and splices the original values back into the edited result. The secret-to-placeholder \
mapping is kept in a single encrypted store file that never contains plaintext secrets.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational messages (errors still print).
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every command that touches the mapping store.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Path to the encrypted mapping store file.
    #[arg(long = "store", value_name = "FILE", env = "CONFGUARD_STORE")]
    pub store: Option<PathBuf>,

    /// Path to the local key file.
    #[arg(long = "key", value_name = "FILE", env = "CONFGUARD_KEY")]
    pub key: Option<PathBuf>,
}

/// All available commands for the `confguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates the local encryption key file.
    Init {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Replaces secrets in files (or stdin) with placeholders.
    Sanitize(SanitizeCommand),

    /// Replaces placeholders in files (or stdin) with the original secrets.
    Restore(RestoreCommand),

    /// Shows record counts by kind for the mapping store.
    Status {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Writes placeholder metadata (no secret values) for the AI context.
    Manifest {
        #[command(flatten)]
        store: StoreArgs,

        /// Write the manifest to a file instead of stdout.
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Deletes the mapping store. Secrets referenced only by placeholders
    /// become unrecoverable.
    Reset {
        #[command(flatten)]
        store: StoreArgs,

        /// Proceed without a confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Files to sanitize. Reads stdin and writes stdout when omitted.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Overwrite each input file with its sanitized content.
    #[arg(long = "in-place", conflicts_with = "output_dir")]
    pub in_place: bool,

    /// Write sanitized copies into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to a YAML file with catalog tuning options.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Arguments for the `restore` command.
#[derive(Parser, Debug)]
pub struct RestoreCommand {
    /// Files to restore. Reads stdin and writes stdout when omitted.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Overwrite each input file with its restored content.
    #[arg(long = "in-place", conflicts_with = "output_dir")]
    pub in_place: bool,

    /// Write restored copies into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub store: StoreArgs,
}
