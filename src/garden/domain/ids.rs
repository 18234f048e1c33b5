//! Validated scalar types for the garden domain.

use super::GardenDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalised wallet address of a garden owner.
///
/// Addresses are stored lowercase so that lookups are insensitive to the
/// mixed-case checksum form wallets usually present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerAddress(String);

impl OwnerAddress {
    /// Number of hex digits following the `0x` prefix.
    const HEX_DIGITS: usize = 40;

    /// Creates a validated, lowercased owner address.
    ///
    /// # Errors
    ///
    /// Returns [`GardenDomainError::InvalidOwnerAddress`] when the value is
    /// not `0x` followed by exactly 40 hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, GardenDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let is_valid = normalized.strip_prefix("0x").is_some_and(|digits| {
            digits.len() == Self::HEX_DIGITS && digits.chars().all(|c| c.is_ascii_hexdigit())
        });
        if !is_valid {
            return Err(GardenDomainError::InvalidOwnerAddress(raw));
        }
        Ok(Self(normalized))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OwnerAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content identifier of the pinned token metadata document.
///
/// Pinning happens outside this crate; the record only carries the
/// identifier handed back by the pinning service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataCid(String);

impl MetadataCid {
    /// Creates a validated content identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GardenDomainError::EmptyMetadataCid`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, GardenDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(GardenDomainError::EmptyMetadataCid);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Identifier recorded while the metadata document is not yet pinned.
    #[must_use]
    pub fn placeholder() -> Self {
        Self("exampleCID".to_owned())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MetadataCid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MetadataCid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
