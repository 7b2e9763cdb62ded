// confguard/src/lib.rs
//! # Confguard CLI Application
//!
//! This crate provides the command-line surface over `confguard-core`:
//! per-file sanitize and restore passes, key-file generation, and mapping
//! store housekeeping. The export/AI-edit/import workflow that sequences
//! these steps lives outside this tool.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod paths;
