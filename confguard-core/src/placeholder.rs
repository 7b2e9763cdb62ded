//! placeholder.rs - The placeholder codec.
//!
//! A placeholder is a synthetic token of the form
//! `<<SECRET_{PREFIX}_{INDEX}>>` (e.g. `<<SECRET_PASSWORD_0001>>`) that
//! stands in for a detected secret. The grammar is chosen so tokens survive
//! round-tripping through arbitrary text and markup, are visually distinct
//! from any plausible configuration value, and decode back to
//! `(kind, index)` without consulting the mapping store.
//!
//! `encode` and `decode` are a two-sided lossless pair:
//! `decode(&encode(k, i)) == Some((k, i))` for every valid `(k, i)`.
//! `decode` on arbitrary text never fails; it reports `None`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::kind::SecretKind;

lazy_static! {
    /// Grammar for anything shaped like a placeholder token.
    ///
    /// Intentionally wider than the set of encodable tokens: the restorer
    /// must surface tokens with unknown prefixes as unresolved instead of
    /// silently skipping them, and the catalog must treat them as atomic
    /// when re-scanning already-sanitized text.
    pub static ref PLACEHOLDER_RE: Regex =
        Regex::new(r"<<SECRET_([A-Z0-9_]+)_([0-9]{4,})>>").unwrap();
}

/// Builds the placeholder token for a kind and a per-kind sequence index.
///
/// Indexes start at 1 and are zero-padded to four digits; wider indexes
/// are emitted unpadded rather than truncated.
pub fn encode(kind: SecretKind, index: u32) -> String {
    format!("<<SECRET_{}_{:04}>>", kind.prefix(), index)
}

/// Parses a placeholder token back into `(kind, index)`.
///
/// Returns `None` unless the whole input is exactly one well-formed token
/// with a known kind prefix. Never panics on arbitrary input.
pub fn decode(token: &str) -> Option<(SecretKind, u32)> {
    let caps = PLACEHOLDER_RE.captures(token)?;
    let whole = caps.get(0)?;
    if whole.start() != 0 || whole.end() != token.len() {
        return None;
    }
    let kind = SecretKind::from_prefix(caps.get(1)?.as_str())?;
    let index: u32 = caps.get(2)?.as_str().parse().ok()?;
    Some((kind, index))
}
