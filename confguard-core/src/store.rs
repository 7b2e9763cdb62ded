//! store.rs - The encrypted mapping store.
//!
//! The store owns every secret <-> placeholder association for a workflow
//! session and is the only durable state the engine has. On disk it is a
//! single authenticated-encryption blob:
//!
//! ```text
//! [version: 1 byte][key fingerprint: 8 bytes][nonce: 12 bytes][ciphertext || GCM tag]
//! ```
//!
//! The payload (records plus per-kind counters) is serialized as JSON and
//! sealed with AES-256-GCM under a fresh random nonce per write; no secret
//! value or placeholder is ever written to a durable medium in plaintext.
//! Writes go to a temp file first and are renamed into place, so an
//! interrupted run leaves the store at its last fully-committed state.
//!
//! A sidecar `<store>.lock` file is held under an exclusive advisory lock
//! for the lifetime of the open handle. The lock lives on the sidecar
//! rather than the store file itself because `persist` replaces the store
//! inode via rename, which would silently invalidate a lock taken on it.

use aes_gcm::aead::{Aead, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, KeyInit, Nonce};
use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::ConfguardError;
use crate::kind::SecretKind;
use crate::placeholder;

const STORE_VERSION: u8 = 1;
const KEY_FINGERPRINT_LEN: usize = 8;
const AES_NONCE_LEN: usize = 12;
const GCM_TAG_LEN: usize = 16;
const STORE_TMP_SUFFIX: &str = ".tmp";
const STORE_LOCK_SUFFIX: &str = ".lock";

/// Key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// One secret value and its placeholder. Immutable after creation except
/// for the `last_seen_in` bookkeeping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretRecord {
    pub kind: SecretKind,
    pub original_value: String,
    pub placeholder: String,
    pub first_seen_in: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_seen_in: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    /// Per-kind allocation counters. Monotonic for the life of the store
    /// file; indexes are never reused, even if records were removed by a
    /// future maintenance operation.
    #[serde(default)]
    counters: HashMap<SecretKind, u32>,
    #[serde(default)]
    records: Vec<SecretRecord>,
}

/// RAII guard for the sidecar lock file. Released on drop on every exit
/// path, including panics and process termination.
struct StoreLock {
    file: File,
}

impl StoreLock {
    fn acquire(store_path: &Path) -> Result<Self, ConfguardError> {
        let lock_path = path_with_suffix(store_path, STORE_LOCK_SUFFIX);
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)?;
        file.try_lock_exclusive().map_err(|e| {
            if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() {
                ConfguardError::StoreLocked(store_path.to_path_buf())
            } else {
                ConfguardError::Io(e)
            }
        })?;
        debug!("Acquired exclusive lock on {}", lock_path.display());
        Ok(Self { file })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}

/// The bidirectional secret <-> placeholder index for one session.
///
/// Opened at the start of a sanitize or restore pass and exclusively held
/// until dropped. Only the sanitizer mutates it; the restorer reads it.
pub struct MappingStore {
    path: PathBuf,
    key: [u8; KEY_LEN],
    state: StoreState,
    by_value: HashMap<String, usize>,
    by_placeholder: HashMap<String, usize>,
    dirty: bool,
    _lock: StoreLock,
}

// Manual Debug: the key must never end up in logs or panic messages.
impl fmt::Debug for MappingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingStore")
            .field("path", &self.path)
            .field("records", &self.state.records.len())
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl MappingStore {
    /// Opens (or initializes) the store at `path`, reading the key from
    /// `key_path` and taking the exclusive session lock.
    ///
    /// A missing store file yields an empty store; a present but
    /// undecryptable one is an error, never silently empty.
    pub fn open<P: AsRef<Path>, K: AsRef<Path>>(
        path: P,
        key_path: K,
    ) -> Result<Self, ConfguardError> {
        let path = path.as_ref().to_path_buf();
        let key = load_key(key_path.as_ref())?;
        let lock = StoreLock::acquire(&path)?;
        let state = match load_state(&path, &key) {
            Ok(state) => {
                info!(
                    "Loaded {} mapping records from {}",
                    state.records.len(),
                    path.display()
                );
                state
            }
            Err(ConfguardError::StoreNotFound(_)) => {
                debug!("No store at {}, starting empty", path.display());
                StoreState::default()
            }
            Err(e) => return Err(e),
        };

        let mut store = Self {
            path,
            key,
            state,
            by_value: HashMap::new(),
            by_placeholder: HashMap::new(),
            dirty: false,
            _lock: lock,
        };
        store.rebuild_indexes();
        Ok(store)
    }

    fn rebuild_indexes(&mut self) {
        self.by_value.clear();
        self.by_placeholder.clear();
        for (idx, record) in self.state.records.iter().enumerate() {
            self.by_value.insert(record.original_value.clone(), idx);
            self.by_placeholder.insert(record.placeholder.clone(), idx);
        }
    }

    /// Looks a record up by its original secret value, across all kinds.
    pub fn lookup_by_value(&self, value: &str) -> Option<&SecretRecord> {
        self.by_value.get(value).map(|&idx| &self.state.records[idx])
    }

    /// Looks a record up by its placeholder token.
    pub fn lookup_by_placeholder(&self, token: &str) -> Option<&SecretRecord> {
        self.by_placeholder
            .get(token)
            .map(|&idx| &self.state.records[idx])
    }

    /// Creates a record for a newly discovered secret, allocating the next
    /// index for its kind.
    ///
    /// Fails with [`ConfguardError::DuplicateValue`] if a record for this
    /// value already exists; callers must look up first.
    pub fn create(
        &mut self,
        kind: SecretKind,
        value: &str,
        filename: &str,
    ) -> Result<&SecretRecord, ConfguardError> {
        if let Some(&existing) = self.by_value.get(value) {
            return Err(ConfguardError::DuplicateValue(
                self.state.records[existing].placeholder.clone(),
            ));
        }

        let counter = self.state.counters.entry(kind).or_insert(0);
        *counter += 1;
        let token = placeholder::encode(kind, *counter);

        let record = SecretRecord {
            kind,
            original_value: value.to_string(),
            placeholder: token.clone(),
            first_seen_in: filename.to_string(),
            created_at: Utc::now(),
            last_seen_in: vec![filename.to_string()],
        };
        let idx = self.state.records.len();
        self.state.records.push(record);
        self.by_value.insert(value.to_string(), idx);
        self.by_placeholder.insert(token, idx);
        self.dirty = true;

        debug!(
            "Created {} record #{} first seen in {}",
            kind,
            self.state.counters[&kind],
            filename
        );
        Ok(&self.state.records[idx])
    }

    /// Bookkeeping: records that an already-known value was seen again in
    /// `filename`. No-op for unknown values.
    pub fn note_seen(&mut self, value: &str, filename: &str) {
        if let Some(&idx) = self.by_value.get(value) {
            let record = &mut self.state.records[idx];
            if !record.last_seen_in.iter().any(|f| f == filename) {
                record.last_seen_in.push(filename.to_string());
                self.dirty = true;
            }
        }
    }

    /// Encrypts the full record set and writes it atomically
    /// (temp-file-then-rename). A crash mid-write leaves the previous
    /// committed state intact.
    pub fn persist(&mut self) -> Result<(), ConfguardError> {
        let plaintext = serde_json::to_vec(&self.state)
            .map_err(|e| ConfguardError::Serialization(e.to_string()))?;

        let cipher = Aes256Gcm::new((&self.key).into());
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, plaintext.as_slice())
            .map_err(|e| ConfguardError::Serialization(format!("encryption failed: {e:?}")))?;

        let mut blob =
            Vec::with_capacity(1 + KEY_FINGERPRINT_LEN + AES_NONCE_LEN + ciphertext.len());
        blob.push(STORE_VERSION);
        blob.extend_from_slice(&key_fingerprint(&self.key));
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = path_with_suffix(&self.path, STORE_TMP_SUFFIX);
        {
            let mut tmp = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)?;
            tmp.write_all(&blob)?;
            tmp.flush()?;
            tmp.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        self.dirty = false;

        debug!(
            "Persisted {} records ({} bytes) to {}",
            self.state.records.len(),
            blob.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Deletes the store file (and any stale temp file) at `path`.
    /// Explicit destruction is the only way records are ever removed.
    pub fn destroy<P: AsRef<Path>>(path: P) -> Result<bool, ConfguardError> {
        let path = path.as_ref();
        let _lock = StoreLock::acquire(path)?;
        let tmp_path = path_with_suffix(path, STORE_TMP_SUFFIX);
        if tmp_path.exists() {
            fs::remove_file(&tmp_path)?;
        }
        if path.exists() {
            fs::remove_file(path)?;
            info!("Destroyed mapping store {}", path.display());
            return Ok(true);
        }
        Ok(false)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.state.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.records.is_empty()
    }

    /// True when there are in-memory mutations not yet persisted.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn records(&self) -> &[SecretRecord] {
        &self.state.records
    }

    /// Record counts per kind, in stable kind order, omitting empty kinds.
    pub fn counts_by_kind(&self) -> Vec<(SecretKind, usize)> {
        SecretKind::ALL
            .iter()
            .filter_map(|&kind| {
                let count = self.state.records.iter().filter(|r| r.kind == kind).count();
                (count > 0).then_some((kind, count))
            })
            .collect()
    }

    /// Metadata about the placeholders suitable for handing to the AI
    /// collaborator alongside sanitized files. Contains no secret values.
    pub fn manifest(&self) -> serde_json::Value {
        let placeholders: Vec<serde_json::Value> = self
            .state
            .records
            .iter()
            .map(|r| {
                json!({
                    "placeholder": r.placeholder,
                    "kind": r.kind.prefix(),
                    "first_seen_in": r.first_seen_in,
                    "created_at": r.created_at.to_rfc3339(),
                })
            })
            .collect();
        json!({
            "total_secrets": self.state.records.len(),
            "instruction": "These placeholders replace sensitive values. Preserve them exactly as written; they are restored automatically after editing.",
            "placeholders": placeholders,
        })
    }
}

fn path_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}

fn key_fingerprint(key: &[u8; KEY_LEN]) -> [u8; KEY_FINGERPRINT_LEN] {
    let digest = Sha256::digest(key);
    let mut fp = [0u8; KEY_FINGERPRINT_LEN];
    fp.copy_from_slice(&digest[..KEY_FINGERPRINT_LEN]);
    fp
}

fn load_state(path: &Path, key: &[u8; KEY_LEN]) -> Result<StoreState, ConfguardError> {
    if !path.exists() {
        return Err(ConfguardError::StoreNotFound(path.to_path_buf()));
    }
    let raw = fs::read(path)?;

    let min_len = 1 + KEY_FINGERPRINT_LEN + AES_NONCE_LEN + GCM_TAG_LEN;
    if raw.len() < min_len || raw[0] != STORE_VERSION {
        return Err(ConfguardError::StoreIntegrity(path.to_path_buf()));
    }
    let expected = key_fingerprint(key);
    if raw[1..1 + KEY_FINGERPRINT_LEN] != expected {
        debug!(
            "Store {} was written with key fingerprint {}, supplied key has {}",
            path.display(),
            hex::encode(&raw[1..1 + KEY_FINGERPRINT_LEN]),
            hex::encode(expected)
        );
        return Err(ConfguardError::StoreKeyMismatch(path.to_path_buf()));
    }

    let nonce_start = 1 + KEY_FINGERPRINT_LEN;
    let nonce = Nonce::from_slice(&raw[nonce_start..nonce_start + AES_NONCE_LEN]);
    let cipher = Aes256Gcm::new(key.into());
    let plaintext = cipher
        .decrypt(nonce, &raw[nonce_start + AES_NONCE_LEN..])
        .map_err(|_| ConfguardError::StoreIntegrity(path.to_path_buf()))?;

    serde_json::from_slice(&plaintext)
        .map_err(|_| ConfguardError::StoreIntegrity(path.to_path_buf()))
}

/// Reads the base64-encoded 32-byte key from a local key file.
///
/// The engine only ever reads key material; it never writes, logs, or
/// transmits it. Generation is a separate, explicit operation.
pub fn load_key(path: &Path) -> Result<[u8; KEY_LEN], ConfguardError> {
    let text = fs::read_to_string(path).map_err(|e| {
        ConfguardError::KeyFile(format!("failed to read key file {}: {e}", path.display()))
    })?;
    let decoded = general_purpose::STANDARD.decode(text.trim()).map_err(|e| {
        ConfguardError::KeyFile(format!("key file {} is not valid base64: {e}", path.display()))
    })?;
    if decoded.len() != KEY_LEN {
        return Err(ConfguardError::KeyFile(format!(
            "key file {} decodes to {} bytes, expected {}",
            path.display(),
            decoded.len(),
            KEY_LEN
        )));
    }
    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&decoded);
    Ok(key)
}

/// Generates a fresh random key file. Refuses to overwrite an existing
/// one. On Unix the file is created with `0600` permissions.
pub fn generate_key_file(path: &Path) -> Result<(), ConfguardError> {
    if path.exists() {
        return Err(ConfguardError::KeyFile(format!(
            "refusing to overwrite existing key file {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let key = Aes256Gcm::generate_key(&mut OsRng);
    fs::write(path, general_purpose::STANDARD.encode(key))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    info!("Generated new key file at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(dir: &TempDir) -> (PathBuf, PathBuf) {
        let store_path = dir.path().join("mappings.enc");
        let key_path = dir.path().join(".confguard_key");
        generate_key_file(&key_path).unwrap();
        (store_path, key_path)
    }

    #[test]
    fn test_create_and_lookup_both_directions() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        let mut store = MappingStore::open(&store_path, &key_path).unwrap();

        let token = store
            .create(SecretKind::Password, "Sup3rSecret!", "configuration.yaml")
            .unwrap()
            .placeholder
            .clone();
        assert_eq!(token, "<<SECRET_PASSWORD_0001>>");

        let by_value = store.lookup_by_value("Sup3rSecret!").unwrap();
        assert_eq!(by_value.placeholder, token);
        let by_token = store.lookup_by_placeholder(&token).unwrap();
        assert_eq!(by_token.original_value, "Sup3rSecret!");
        assert_eq!(by_token.first_seen_in, "configuration.yaml");
    }

    #[test]
    fn test_create_duplicate_value_fails() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        let mut store = MappingStore::open(&store_path, &key_path).unwrap();

        store.create(SecretKind::Password, "same", "a.yaml").unwrap();
        let err = store
            .create(SecretKind::ApiToken, "same", "b.yaml")
            .unwrap_err();
        assert!(matches!(err, ConfguardError::DuplicateValue(_)));
    }

    #[test]
    fn test_indexes_are_per_kind() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        let mut store = MappingStore::open(&store_path, &key_path).unwrap();

        let a = store.create(SecretKind::Password, "one", "f").unwrap().placeholder.clone();
        let b = store.create(SecretKind::Ipv4, "10.0.0.5", "f").unwrap().placeholder.clone();
        let c = store.create(SecretKind::Password, "two", "f").unwrap().placeholder.clone();
        assert_eq!(a, "<<SECRET_PASSWORD_0001>>");
        assert_eq!(b, "<<SECRET_IPV4_0001>>");
        assert_eq!(c, "<<SECRET_PASSWORD_0002>>");
    }

    #[test]
    fn test_persist_and_reopen() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        {
            let mut store = MappingStore::open(&store_path, &key_path).unwrap();
            store.create(SecretKind::Email, "user@example.com", "f.yaml").unwrap();
            store.persist().unwrap();
            assert!(!store.is_dirty());
        }
        let store = MappingStore::open(&store_path, &key_path).unwrap();
        assert_eq!(store.len(), 1);
        let record = store.lookup_by_placeholder("<<SECRET_EMAIL_0001>>").unwrap();
        assert_eq!(record.original_value, "user@example.com");
    }

    #[test]
    fn test_counters_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        {
            let mut store = MappingStore::open(&store_path, &key_path).unwrap();
            store.create(SecretKind::Password, "first", "f").unwrap();
            store.persist().unwrap();
        }
        let mut store = MappingStore::open(&store_path, &key_path).unwrap();
        let token = store
            .create(SecretKind::Password, "second", "f")
            .unwrap()
            .placeholder
            .clone();
        assert_eq!(token, "<<SECRET_PASSWORD_0002>>");
    }

    #[test]
    fn test_store_file_is_not_plaintext() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        let mut store = MappingStore::open(&store_path, &key_path).unwrap();
        store.create(SecretKind::Password, "Sup3rSecret!", "f.yaml").unwrap();
        store.persist().unwrap();
        drop(store);

        let raw = fs::read(&store_path).unwrap();
        let haystack = String::from_utf8_lossy(&raw);
        assert!(!haystack.contains("Sup3rSecret!"));
        assert!(!haystack.contains("SECRET_PASSWORD"));
    }

    #[test]
    fn test_tampered_ciphertext_fails_integrity() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        {
            let mut store = MappingStore::open(&store_path, &key_path).unwrap();
            store.create(SecretKind::Password, "secret-value", "f").unwrap();
            store.persist().unwrap();
        }
        let mut raw = fs::read(&store_path).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        fs::write(&store_path, &raw).unwrap();

        let err = MappingStore::open(&store_path, &key_path).unwrap_err();
        assert!(matches!(err, ConfguardError::StoreIntegrity(_)));
    }

    #[test]
    fn test_tampered_nonce_fails_integrity() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        {
            let mut store = MappingStore::open(&store_path, &key_path).unwrap();
            store.create(SecretKind::Password, "secret-value", "f").unwrap();
            store.persist().unwrap();
        }
        let mut raw = fs::read(&store_path).unwrap();
        raw[1 + KEY_FINGERPRINT_LEN] ^= 0xFF;
        fs::write(&store_path, &raw).unwrap();

        let err = MappingStore::open(&store_path, &key_path).unwrap_err();
        assert!(matches!(err, ConfguardError::StoreIntegrity(_)));
    }

    #[test]
    fn test_truncated_store_fails_integrity() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        fs::write(&store_path, [STORE_VERSION, 0, 1, 2]).unwrap();
        let err = MappingStore::open(&store_path, &key_path).unwrap_err();
        assert!(matches!(err, ConfguardError::StoreIntegrity(_)));
    }

    #[test]
    fn test_wrong_key_is_reported_as_mismatch() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        {
            let mut store = MappingStore::open(&store_path, &key_path).unwrap();
            store.create(SecretKind::Password, "secret-value", "f").unwrap();
            store.persist().unwrap();
        }
        let other_key = dir.path().join("other_key");
        generate_key_file(&other_key).unwrap();

        let err = MappingStore::open(&store_path, &other_key).unwrap_err();
        assert!(matches!(err, ConfguardError::StoreKeyMismatch(_)));
    }

    #[test]
    fn test_concurrent_open_fails_with_locked() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        let _first = MappingStore::open(&store_path, &key_path).unwrap();
        let err = MappingStore::open(&store_path, &key_path).unwrap_err();
        assert!(matches!(err, ConfguardError::StoreLocked(_)));
    }

    #[test]
    fn test_lock_released_on_drop() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        {
            let _store = MappingStore::open(&store_path, &key_path).unwrap();
        }
        assert!(MappingStore::open(&store_path, &key_path).is_ok());
    }

    #[test]
    fn test_stale_tmp_file_does_not_break_open() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        {
            let mut store = MappingStore::open(&store_path, &key_path).unwrap();
            store.create(SecretKind::Password, "kept", "f").unwrap();
            store.persist().unwrap();
        }
        // Simulates a crash between temp write and rename.
        fs::write(path_with_suffix(&store_path, STORE_TMP_SUFFIX), b"garbage").unwrap();
        let store = MappingStore::open(&store_path, &key_path).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_note_seen_appends_once() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        let mut store = MappingStore::open(&store_path, &key_path).unwrap();
        store.create(SecretKind::Password, "v", "a.yaml").unwrap();
        store.note_seen("v", "b.yaml");
        store.note_seen("v", "b.yaml");
        let record = store.lookup_by_value("v").unwrap();
        assert_eq!(record.last_seen_in, vec!["a.yaml", "b.yaml"]);
    }

    #[test]
    fn test_manifest_contains_no_secret_values() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        let mut store = MappingStore::open(&store_path, &key_path).unwrap();
        store.create(SecretKind::Password, "Sup3rSecret!", "f.yaml").unwrap();
        let manifest = store.manifest().to_string();
        assert!(!manifest.contains("Sup3rSecret!"));
        assert!(manifest.contains("<<SECRET_PASSWORD_0001>>"));
    }

    #[test]
    fn test_destroy_removes_store() {
        let dir = TempDir::new().unwrap();
        let (store_path, key_path) = setup(&dir);
        {
            let mut store = MappingStore::open(&store_path, &key_path).unwrap();
            store.create(SecretKind::Password, "v", "f").unwrap();
            store.persist().unwrap();
        }
        assert!(MappingStore::destroy(&store_path).unwrap());
        assert!(!store_path.exists());
        assert!(!MappingStore::destroy(&store_path).unwrap());
    }

    #[test]
    fn test_key_file_round_trip_and_validation() {
        let dir = TempDir::new().unwrap();
        let key_path = dir.path().join("key");
        generate_key_file(&key_path).unwrap();
        assert!(load_key(&key_path).is_ok());
        // Second generation must refuse to clobber.
        assert!(matches!(
            generate_key_file(&key_path).unwrap_err(),
            ConfguardError::KeyFile(_)
        ));

        let bad = dir.path().join("bad");
        fs::write(&bad, "not base64 at all!!").unwrap();
        assert!(matches!(load_key(&bad).unwrap_err(), ConfguardError::KeyFile(_)));

        let short = dir.path().join("short");
        fs::write(&short, general_purpose::STANDARD.encode([0u8; 8])).unwrap();
        assert!(matches!(load_key(&short).unwrap_err(), ConfguardError::KeyFile(_)));
    }
}
