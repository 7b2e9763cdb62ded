// confguard/src/commands/restore.rs
//! Restore command: the import-side pass over AI-edited files.
//!
//! Restoration always completes; placeholders with no mapping stay in the
//! output verbatim and are surfaced as warnings so a human can inspect
//! what could not be resolved.

use anyhow::{bail, Context, Result};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Read, Write};

use confguard_core::Restorer;

use crate::cli::RestoreCommand;
use crate::commands::{open_store, success, warning};

pub fn run(cmd: &RestoreCommand) -> Result<()> {
    let store = open_store(&cmd.store)?;
    let restorer = Restorer::new();

    if cmd.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let outcome = restorer.restore(&store, &input);
        for token in &outcome.unresolved {
            warning(format!("no mapping for {token}"));
        }
        io::stdout().write_all(outcome.text.as_bytes())?;
        return Ok(());
    }

    if !cmd.in_place && cmd.output_dir.is_none() {
        bail!("pass --in-place or --output-dir when restoring files");
    }
    if let Some(dir) = &cmd.output_dir {
        fs::create_dir_all(dir)?;
    }

    let mut failed = 0usize;
    let mut unresolved_total = 0usize;
    let mut written_names: HashSet<String> = HashSet::new();
    for path in &cmd.files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        // Same basename-flattening rule as the sanitize pass.
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

        let outcome = restorer.restore(&store, &text);
        for token in &outcome.unresolved {
            warning(format!("{}: no mapping for {token}", path.display()));
        }
        unresolved_total += outcome.unresolved.len();

        let dest = match &cmd.output_dir {
            Some(dir) => dir.join(&name),
            None => path.clone(),
        };
        if let Err(e) = fs::write(&dest, &outcome.text) {
            warning(format!("could not write {}: {e}", dest.display()));
            failed += 1;
            continue;
        }
        debug!("Wrote restored copy to {}", dest.display());
    }

    success(format!(
        "Restored {} file(s), {} unresolved placeholder(s)",
        cmd.files.len() - failed,
        unresolved_total
    ));
    if failed > 0 {
        bail!("{failed} file(s) could not be processed");
    }
    Ok(())
}
