// confguard/src/commands/store_admin.rs
//! Store housekeeping commands: `init`, `status`, `manifest`, and `reset`.

use anyhow::{Context, Result};
use comfy_table::Table;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use confguard_core::{generate_key_file, MappingStore};

use crate::cli::StoreArgs;
use crate::commands::{open_store, success, warning};

pub fn run_init(args: &StoreArgs) -> Result<()> {
    let key_path = args.key_path();
    generate_key_file(&key_path)
        .with_context(|| format!("could not create key file {}", key_path.display()))?;
    success(format!("Key file generated at {}", key_path.display()));
    warning("Keep this file out of version control; without it the mapping store cannot be decrypted.");
    Ok(())
}

pub fn run_status(args: &StoreArgs) -> Result<()> {
    let store = open_store(args)?;

    let mut table = Table::new();
    table.set_header(vec!["Kind", "Records"]);
    for (kind, count) in store.counts_by_kind() {
        table.add_row(vec![kind.to_string(), count.to_string()]);
    }
    println!("{table}");
    println!(
        "Total: {} record(s) in {}",
        store.len(),
        store.path().display()
    );
    if let Ok(meta) = fs::metadata(store.path()) {
        println!("Store file size: {} bytes", meta.len());
    }
    Ok(())
}

pub fn run_manifest(args: &StoreArgs, output: Option<&Path>) -> Result<()> {
    let store = open_store(args)?;
    let manifest = serde_json::to_string_pretty(&store.manifest())
        .context("failed to serialize manifest")?;
    match output {
        Some(path) => {
            fs::write(path, manifest)
                .with_context(|| format!("could not write {}", path.display()))?;
            success(format!("Manifest written to {}", path.display()));
        }
        None => println!("{manifest}"),
    }
    Ok(())
}

pub fn run_reset(args: &StoreArgs, yes: bool) -> Result<()> {
    let store_path = args.store_path();
    if !yes {
        eprint!(
            "Delete mapping store {} and lose every placeholder mapping? [y/N] ",
            store_path.display()
        );
        io::stderr().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            warning("Reset cancelled");
            return Ok(());
        }
    }

    if MappingStore::destroy(&store_path)? {
        success(format!("Deleted mapping store {}", store_path.display()));
    } else {
        warning("No mapping store to delete");
    }
    Ok(())
}
