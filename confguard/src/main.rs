// confguard/src/main.rs
//! Confguard entry point.

use anyhow::Result;
use clap::Parser;

use confguard::cli::{Cli, Commands};
use confguard::{commands, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.quiet, cli.debug);

    match cli.command {
        Commands::Init { store } => commands::store_admin::run_init(&store),
        Commands::Sanitize(cmd) => commands::sanitize::run(&cmd),
        Commands::Restore(cmd) => commands::restore::run(&cmd),
        Commands::Status { store } => commands::store_admin::run_status(&store),
        Commands::Manifest { store, output } => {
            commands::store_admin::run_manifest(&store, output.as_deref())
        }
        Commands::Reset { store, yes } => commands::store_admin::run_reset(&store, yes),
    }
}
