// confguard/src/commands/sanitize.rs
//! Sanitize command: the export-side pass over configuration files.
//!
//! Files are processed sequentially against one open store handle. A file
//! that cannot be read or written is skipped with a warning; store-level
//! errors abort the whole pass, leaving the store at its last committed
//! state.

use anyhow::{bail, Context, Result};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use confguard_core::{CatalogOptions, PatternCatalog, Sanitizer};

use crate::cli::SanitizeCommand;
use crate::commands::{open_store, success, warning};

pub fn run(cmd: &SanitizeCommand) -> Result<()> {
    let catalog = match &cmd.config {
        Some(path) => PatternCatalog::with_options(CatalogOptions::load_from_file(path)?)?,
        None => PatternCatalog::builtin()?,
    };
    let sanitizer = Sanitizer::new(catalog);
    let mut store = open_store(&cmd.store)?;

    if cmd.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let sanitized = sanitizer.sanitize(&mut store, &input, "stdin")?;
        io::stdout().write_all(sanitized.as_bytes())?;
        return Ok(());
    }

    if !cmd.in_place && cmd.output_dir.is_none() {
        bail!("pass --in-place or --output-dir when sanitizing files");
    }
    if let Some(dir) = &cmd.output_dir {
        fs::create_dir_all(dir)?;
    }

    let mut failed = 0usize;
    let mut written_names: HashSet<String> = HashSet::new();
    for path in &cmd.files {
        let name = file_label(path);
        // Output-dir mode flattens paths to basenames; refuse to clobber
        // an earlier input that shares one.
        if cmd.output_dir.is_some() && !written_names.insert(name.clone()) {
            warning(format!(
                "skipping {}: an earlier input already produced {name} in the output directory",
                path.display()
            ));
            failed += 1;
            continue;
        }
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warning(format!("skipping {}: {e}", path.display()));
                failed += 1;
                continue;
            }
        };

        // Store errors are not per-file conditions; propagate them.
        let sanitized = sanitizer.sanitize(&mut store, &text, &name)?;

        let dest = match &cmd.output_dir {
            Some(dir) => dir.join(&name),
            None => path.clone(),
        };
        if let Err(e) = fs::write(&dest, &sanitized) {
            warning(format!("could not write {}: {e}", dest.display()));
            failed += 1;
            continue;
        }
        debug!("Wrote sanitized copy of {} to {}", name, dest.display());
    }

    success(format!(
        "Sanitized {} file(s); store holds {} secret(s)",
        cmd.files.len() - failed,
        store.len()
    ));
    if failed > 0 {
        bail!("{failed} file(s) could not be processed");
    }
    Ok(())
}

fn file_label(path: &PathBuf) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
