//! restorer.rs - The restore pass.
//!
//! Scans (possibly AI-edited) text for placeholder-shaped tokens and
//! substitutes the original values from the mapping store. Tokens that do
//! not decode, or decode but were never issued by this store, stay in the
//! output verbatim and are reported as unresolved: AI-edited text may have
//! renamed, duplicated, or dropped placeholders, and a hard failure would
//! block legitimate partial-success imports.

use log::{debug, warn};

use crate::placeholder::{self, PLACEHOLDER_RE};
use crate::store::MappingStore;

/// Result of one restore pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreOutcome {
    /// The text with every resolvable placeholder substituted.
    pub text: String,
    /// Tokens left unchanged, deduplicated, in first-seen order. The
    /// import collaborator decides whether these block the import.
    pub unresolved: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Restorer;

impl Restorer {
    pub fn new() -> Self {
        Self
    }

    /// Restores original values into `text`. Never fails: unresolvable
    /// tokens are reported, not raised.
    pub fn restore(&self, store: &MappingStore, text: &str) -> RestoreOutcome {
        let mut out = String::with_capacity(text.len());
        let mut unresolved: Vec<String> = Vec::new();
        let mut last_end = 0usize;

        for m in PLACEHOLDER_RE.find_iter(text) {
            out.push_str(&text[last_end..m.start()]);
            let token = m.as_str();
            let record = placeholder::decode(token)
                .and_then(|_| store.lookup_by_placeholder(token));
            match record {
                Some(record) => {
                    debug!("Restored {token}");
                    out.push_str(&record.original_value);
                }
                None => {
                    warn!("No mapping for {token}; leaving it in place");
                    out.push_str(token);
                    if !unresolved.iter().any(|u| u == token) {
                        unresolved.push(token.to_string());
                    }
                }
            }
            last_end = m.end();
        }
        out.push_str(&text[last_end..]);

        RestoreOutcome { text: out, unresolved }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::SecretKind;
    use crate::store::{generate_key_file, MappingStore};
    use tempfile::TempDir;

    fn store_with_password(dir: &TempDir) -> MappingStore {
        let store_path = dir.path().join("mappings.enc");
        let key_path = dir.path().join("key");
        generate_key_file(&key_path).unwrap();
        let mut store = MappingStore::open(store_path, key_path).unwrap();
        store
            .create(SecretKind::Password, "Sup3rSecret!", "configuration.yaml")
            .unwrap();
        store
    }

    #[test]
    fn test_restore_substitutes_known_placeholder() {
        let dir = TempDir::new().unwrap();
        let store = store_with_password(&dir);
        let restorer = Restorer::new();

        let outcome = restorer.restore(&store, "password: \"<<SECRET_PASSWORD_0001>>\"\n");
        assert_eq!(outcome.text, "password: \"Sup3rSecret!\"\n");
        assert!(outcome.unresolved.is_empty());
    }

    #[test]
    fn test_deleted_placeholder_leaves_text_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = store_with_password(&dir);
        let restorer = Restorer::new();

        // The editing step removed the token entirely: nothing to resolve.
        let outcome = restorer.restore(&store, "password: \"\"\n");
        assert_eq!(outcome.text, "password: \"\"\n");
        assert!(outcome.unresolved.is_empty());
    }

    #[test]
    fn test_unknown_index_is_unresolved() {
        let dir = TempDir::new().unwrap();
        let store = store_with_password(&dir);
        let restorer = Restorer::new();

        let outcome = restorer.restore(&store, "token: <<SECRET_API_TOKEN_0042>>\n");
        assert_eq!(outcome.text, "token: <<SECRET_API_TOKEN_0042>>\n");
        assert_eq!(outcome.unresolved, vec!["<<SECRET_API_TOKEN_0042>>"]);
    }

    #[test]
    fn test_unknown_prefix_is_unresolved_not_fatal() {
        let dir = TempDir::new().unwrap();
        let store = store_with_password(&dir);
        let restorer = Restorer::new();

        let input = "a: <<SECRET_COOKIE_0001>> b: <<SECRET_PASSWORD_0001>>\n";
        let outcome = restorer.restore(&store, input);
        assert_eq!(outcome.text, "a: <<SECRET_COOKIE_0001>> b: Sup3rSecret!\n");
        assert_eq!(outcome.unresolved, vec!["<<SECRET_COOKIE_0001>>"]);
    }

    #[test]
    fn test_duplicated_placeholder_restores_everywhere() {
        let dir = TempDir::new().unwrap();
        let store = store_with_password(&dir);
        let restorer = Restorer::new();

        // The editing step copied the token into a second spot.
        let input = "a: <<SECRET_PASSWORD_0001>>\nb: <<SECRET_PASSWORD_0001>>\n";
        let outcome = restorer.restore(&store, input);
        assert_eq!(outcome.text, "a: Sup3rSecret!\nb: Sup3rSecret!\n");
        assert!(outcome.unresolved.is_empty());
    }

    #[test]
    fn test_unresolved_list_is_deduplicated() {
        let dir = TempDir::new().unwrap();
        let store = store_with_password(&dir);
        let restorer = Restorer::new();

        let input = "<<SECRET_IPV4_0009>> and again <<SECRET_IPV4_0009>>";
        let outcome = restorer.restore(&store, input);
        assert_eq!(outcome.unresolved, vec!["<<SECRET_IPV4_0009>>"]);
    }
}
