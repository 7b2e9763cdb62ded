//! sanitizer.rs - The sanitize pass.
//!
//! Transforms one file's raw text into placeholder-bearing text, growing
//! the mapping store as new secrets are discovered. The same secret value
//! always maps to the same placeholder, across every file and every run
//! against the same store. Already-sanitized text passes through
//! unchanged, because the catalog treats placeholder tokens as atomic.

use log::{debug, info};

use crate::catalog::PatternCatalog;
use crate::errors::ConfguardError;
use crate::store::MappingStore;

/// Debug-log guard: secret values are reported by length only.
fn describe_value(value: &str) -> String {
    format!("[{} chars]", value.len())
}

pub struct Sanitizer {
    catalog: PatternCatalog,
}

impl Sanitizer {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self { catalog }
    }

    /// Builds a sanitizer over the built-in catalog.
    pub fn with_builtin_catalog() -> Result<Self, ConfguardError> {
        Ok(Self::new(PatternCatalog::builtin()?))
    }

    /// Sanitizes `text`, replacing every detected secret with its
    /// placeholder. New secrets are recorded in `store` and the store is
    /// persisted once before returning if it was mutated.
    ///
    /// Store errors propagate unchanged; the store file itself is never
    /// left in a partially-written state.
    pub fn sanitize(
        &self,
        store: &mut MappingStore,
        text: &str,
        filename: &str,
    ) -> Result<String, ConfguardError> {
        let detections = self.catalog.detect(text);
        if detections.is_empty() {
            debug!("No secrets detected in {filename}");
            return Ok(text.to_string());
        }

        let mut out = String::with_capacity(text.len());
        let mut last_end = 0usize;
        for detection in &detections {
            let existing = store
                .lookup_by_value(&detection.value)
                .map(|r| r.placeholder.clone());
            let token = match existing {
                Some(token) => {
                    store.note_seen(&detection.value, filename);
                    token
                }
                None => store
                    .create(detection.kind, &detection.value, filename)?
                    .placeholder
                    .clone(),
            };
            debug!(
                "{}: {} {} -> {}",
                filename,
                detection.kind,
                describe_value(&detection.value),
                token
            );
            out.push_str(&text[last_end..detection.start]);
            out.push_str(&token);
            last_end = detection.end;
        }
        out.push_str(&text[last_end..]);

        if store.is_dirty() {
            store.persist()?;
        }
        info!("Sanitized {} ({} replacements)", filename, detections.len());
        Ok(out)
    }
}
