//! kind.rs - The closed set of secret categories.
//!
//! Each `SecretKind` carries exactly one detection rule in the
//! [`PatternCatalog`](crate::catalog::PatternCatalog) and one placeholder
//! prefix in the [`placeholder`](crate::placeholder) codec, so kind /
//! pattern / prefix consistency is checked at catalog construction time
//! rather than at match time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category of sensitive data.
///
/// The set is fixed and closed. Kinds serialize as their placeholder
/// prefix (e.g. `"API_TOKEN"`), which keeps the encrypted store payload
/// readable by future versions as long as prefixes stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SecretKind {
    Password,
    ApiToken,
    LongLivedToken,
    PrivateKey,
    Ipv4,
    Ipv6,
    Hostname,
    Email,
}

impl SecretKind {
    /// Every kind, in a stable order used for reporting.
    pub const ALL: [SecretKind; 8] = [
        SecretKind::Password,
        SecretKind::ApiToken,
        SecretKind::LongLivedToken,
        SecretKind::PrivateKey,
        SecretKind::Ipv4,
        SecretKind::Ipv6,
        SecretKind::Hostname,
        SecretKind::Email,
    ];

    /// The stable uppercase prefix embedded in placeholder tokens.
    pub fn prefix(&self) -> &'static str {
        match self {
            SecretKind::Password => "PASSWORD",
            SecretKind::ApiToken => "API_TOKEN",
            SecretKind::LongLivedToken => "LONG_LIVED_TOKEN",
            SecretKind::PrivateKey => "PRIVATE_KEY",
            SecretKind::Ipv4 => "IPV4",
            SecretKind::Ipv6 => "IPV6",
            SecretKind::Hostname => "HOSTNAME",
            SecretKind::Email => "EMAIL",
        }
    }

    /// Parses a placeholder prefix back into its kind.
    pub fn from_prefix(prefix: &str) -> Option<SecretKind> {
        SecretKind::ALL.iter().copied().find(|k| k.prefix() == prefix)
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl TryFrom<String> for SecretKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SecretKind::from_prefix(&value).ok_or_else(|| format!("unknown secret kind '{value}'"))
    }
}

impl From<SecretKind> for String {
    fn from(kind: SecretKind) -> Self {
        kind.prefix().to_string()
    }
}
