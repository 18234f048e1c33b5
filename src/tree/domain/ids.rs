//! Identifier types for task-tree nodes and whole trees.

use super::TreeDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// Path-derived identifier of a single node within a task tree.
///
/// The root carries a bare counter value (`"1"`), and each child appends its
/// one-based position to its parent's identifier (`"1-2"`, `"1-2-3"`). The
/// identifier therefore encodes the full path from the root, which keeps node
/// ids unique within a tree by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a validated node identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TreeDomainError::EmptyNodeId`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TreeDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TreeDomainError::EmptyNodeId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Creates a root identifier from a tree counter, e.g. `1` becomes `"1"`.
    #[must_use]
    pub fn from_counter(counter: u64) -> Self {
        Self(counter.to_string())
    }

    /// Derives the identifier of the child at the given one-based position.
    #[must_use]
    pub fn child(&self, position: NonZeroUsize) -> Self {
        Self(format!("{}-{position}", self.0))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content-derived identity of a task tree.
///
/// Holds the lowercase hex encoding of the SHA-256 digest of the tree's
/// canonical document, so two structurally identical trees always share the
/// same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreeId(String);

impl TreeId {
    /// Number of hex characters in a SHA-256 digest.
    pub const ENCODED_LENGTH: usize = 64;

    /// Creates a validated tree identifier from its hex encoding.
    ///
    /// # Errors
    ///
    /// Returns [`TreeDomainError::InvalidTreeId`] when the value is not
    /// exactly 64 lowercase hex characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TreeDomainError> {
        let raw = value.into();
        let is_valid = raw.len() == Self::ENCODED_LENGTH
            && raw.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'));
        if !is_valid {
            return Err(TreeDomainError::InvalidTreeId(raw));
        }
        Ok(Self(raw))
    }

    /// Encodes a raw digest as a lowercase hex identifier.
    pub(crate) fn from_digest(digest: impl AsRef<[u8]>) -> Self {
        let encoded = digest
            .as_ref()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect::<String>();
        Self(encoded)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TreeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
