// confguard/src/paths.rs
//! Default on-disk locations for the mapping store and key file.
//!
//! Both live under the local data directory, outside any version-control
//! tree. Excluding them from repository tracking is policy, not something
//! the engine enforces.

use std::path::PathBuf;

use crate::cli::StoreArgs;

const APP_DIR: &str = "confguard";
const STORE_FILENAME: &str = "mappings.enc";
const KEY_FILENAME: &str = ".confguard_key";

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

impl StoreArgs {
    pub fn store_path(&self) -> PathBuf {
        self.store
            .clone()
            .unwrap_or_else(|| data_dir().join(STORE_FILENAME))
    }

    pub fn key_path(&self) -> PathBuf {
        self.key
            .clone()
            .unwrap_or_else(|| data_dir().join(KEY_FILENAME))
    }
}
