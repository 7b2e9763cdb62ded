// confguard/src/commands/mod.rs
//! Per-subcommand runners for the confguard CLI.

pub mod restore;
pub mod sanitize;
pub mod store_admin;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use confguard_core::MappingStore;

use crate::cli::StoreArgs;

/// Prints a success line to stderr.
pub(crate) fn success(msg: impl AsRef<str>) {
    eprintln!("{} {}", "✓".green(), msg.as_ref());
}

/// Prints a warning line to stderr.
pub(crate) fn warning(msg: impl AsRef<str>) {
    eprintln!("{} {}", "⚠".yellow(), msg.as_ref());
}

/// Opens the mapping store for this session, holding its exclusive lock
/// until the returned handle is dropped.
pub(crate) fn open_store(args: &StoreArgs) -> Result<MappingStore> {
    let store_path = args.store_path();
    let key_path = args.key_path();
    MappingStore::open(&store_path, &key_path).with_context(|| {
        format!(
            "failed to open mapping store {} (missing key? run `confguard init` first)",
            store_path.display()
        )
    })
}
