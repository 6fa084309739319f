//! Account identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable, opaque account identifier.
///
/// The chain supplies these as raw bytes (SS58 public keys in practice);
/// the engine never interprets them beyond equality and ordering. Ordering
/// gives deterministic iteration wherever participants are enumerated.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(Vec<u8>);

impl AccountId {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Build an account id from a human-readable label (tests, fixtures).
    pub fn from_label(label: &str) -> Self {
        Self(label.as_bytes().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId(")?;
        for b in self.0.iter().take(4) {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "\u{2026})")
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self::from_label(s)
    }
}
