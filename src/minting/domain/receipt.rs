//! Mint transaction receipts.

use super::MintingDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction reference returned by a successful mint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MintReceipt(String);

impl MintReceipt {
    /// Creates a validated receipt.
    ///
    /// # Errors
    ///
    /// Returns [`MintingDomainError::EmptyReceipt`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, MintingDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(MintingDomainError::EmptyReceipt);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the receipt as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MintReceipt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MintReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
