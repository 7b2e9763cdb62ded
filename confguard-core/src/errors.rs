//! errors.rs - Custom error types for the confguard-core library.
//!
//! This module defines the fixed error taxonomy exposed to orchestrating
//! callers. Fatal variants carry path and kind context for diagnosis, but
//! never a secret value.

use std::path::PathBuf;
use thiserror::Error;

/// All error conditions the engine can surface.
///
/// `#[non_exhaustive]` signals to consumers that new variants may be added
/// in future versions, so they cannot match exhaustively without a
/// wildcard arm.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfguardError {
    /// The pattern catalog is misconfigured (duplicate prefix, unparsable
    /// rule, unknown kind name). Halts the whole run.
    #[error("Pattern catalog misconfigured: {0}")]
    PatternConfig(String),

    /// A record for this value already exists; callers must look up before
    /// creating. Carries the existing placeholder, never the value.
    #[error("A mapping for this value already exists as '{0}'")]
    DuplicateValue(String),

    /// Another process holds the advisory lock on the mapping store.
    #[error("Mapping store '{0}' is locked by another process")]
    StoreLocked(PathBuf),

    /// The store file failed authenticated decryption or structural
    /// validation. Deliberately not treated as an empty store, so that
    /// tampering or corruption cannot be masked.
    #[error("Mapping store '{0}' failed integrity verification; refusing to treat it as empty")]
    StoreIntegrity(PathBuf),

    /// The supplied key is not the one the store was encrypted with.
    #[error("Supplied key does not match the one used to encrypt mapping store '{0}'")]
    StoreKeyMismatch(PathBuf),

    /// No store file exists at the configured path. Callers opening a
    /// store for a fresh session treat this as an empty store.
    #[error("No mapping store found at '{0}'")]
    StoreNotFound(PathBuf),

    /// The key file is missing, unreadable, or malformed.
    #[error("Key file error: {0}")]
    KeyFile(String),

    #[error("Failed to serialize or encrypt store state: {0}")]
    Serialization(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
