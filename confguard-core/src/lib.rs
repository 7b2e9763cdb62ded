// confguard-core/src/lib.rs
//! # Confguard Core Library
//!
//! `confguard-core` implements the secret sanitization and restoration
//! engine used to share home-automation configuration with an AI assistant
//! without leaking credentials, addresses, or other sensitive tokens, and
//! to splice the original values back into the AI-modified text afterward.
//!
//! Files are treated as opaque text plus a filename hint; the engine never
//! interprets the configuration language, performs network calls, or
//! decides what is safe to import back.
//!
//! ## Modules
//!
//! * `kind`: The closed [`SecretKind`] enumeration of detectable categories.
//! * `catalog`: The [`PatternCatalog`] merging per-kind detectors into one
//!   ordered, non-overlapping match stream.
//! * `placeholder`: The pure [`placeholder::encode`] / [`placeholder::decode`]
//!   codec for `<<SECRET_KIND_NNNN>>` tokens.
//! * `store`: The [`MappingStore`], an encrypted-at-rest bidirectional
//!   secret <-> placeholder index with exclusive-session locking.
//! * `sanitizer`: The [`Sanitizer`] pass (raw text in, placeholders out).
//! * `restorer`: The [`Restorer`] pass (placeholders in, originals out,
//!   unresolved tokens reported rather than raised).
//! * `errors`: The [`ConfguardError`] taxonomy surfaced to orchestrators.
//!
//! ## Usage Example
//!
//! ```no_run
//! use confguard_core::{generate_key_file, MappingStore, Restorer, Sanitizer};
//! use std::path::Path;
//!
//! fn main() -> Result<(), confguard_core::ConfguardError> {
//!     let key_path = Path::new("/tmp/confguard/.confguard_key");
//!     generate_key_file(key_path)?;
//!     let mut store = MappingStore::open("/tmp/confguard/mappings.enc", key_path)?;
//!
//!     let sanitizer = Sanitizer::with_builtin_catalog()?;
//!     let sanitized = sanitizer.sanitize(
//!         &mut store,
//!         "password: \"Sup3rSecret!\"\n",
//!         "configuration.yaml",
//!     )?;
//!     assert_eq!(sanitized, "password: \"<<SECRET_PASSWORD_0001>>\"\n");
//!
//!     // ... the sanitized text is edited out of process ...
//!
//!     let outcome = Restorer::new().restore(&store, &sanitized);
//!     assert_eq!(outcome.text, "password: \"Sup3rSecret!\"\n");
//!     assert!(outcome.unresolved.is_empty());
//!     Ok(())
//! }
//! ```
//!
//! ## Design Principles
//!
//! * **Deterministic and idempotent:** one secret value, one placeholder,
//!   across files and runs; re-sanitizing sanitized text is a no-op.
//! * **Explicit lifecycle:** the store is an owned handle passed into the
//!   passes; all persistence goes through its `persist` contract, and no
//!   other component touches the filesystem.
//! * **Tamper-evident at rest:** the store file is a single authenticated
//!   AES-256-GCM blob; corruption is an error, never an empty store.
//! * **Graceful restoration:** unresolved placeholders degrade to
//!   warnings so partial imports remain possible.

pub mod catalog;
pub mod errors;
pub mod kind;
pub mod placeholder;
pub mod restorer;
pub mod sanitizer;
pub mod store;

pub use catalog::{CatalogOptions, Detection, PatternCatalog};
pub use errors::ConfguardError;
pub use kind::SecretKind;
pub use restorer::{RestoreOutcome, Restorer};
pub use sanitizer::Sanitizer;
pub use store::{generate_key_file, load_key, MappingStore, SecretRecord, KEY_LEN};
