// confguard/src/logger.rs
//! Logger initialization for the confguard CLI.
//!
//! `RUST_LOG` is honored unless overridden by the `--quiet` or `--debug`
//! flags. Timestamps are dropped; this is an interactive tool, not a
//! daemon.

use log::LevelFilter;

pub fn init(quiet: bool, debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    } else if quiet {
        builder.filter_level(LevelFilter::Error);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
