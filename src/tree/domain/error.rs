//! Error types for task-tree construction, mutation, and identity.

use thiserror::Error;

/// Errors returned while building or serialising task trees.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TreeDomainError {
    /// The breakdown payload could not be parsed into the nested task shape.
    #[error("malformed breakdown payload: {reason}")]
    MalformedInput {
        /// Parser diagnostic describing what was wrong with the payload.
        reason: String,
    },

    /// A node identifier is empty after trimming.
    #[error("node id must not be empty")]
    EmptyNodeId,

    /// The tree identifier is not a 64-character lowercase hex digest.
    #[error("invalid tree id '{0}', expected 64 lowercase hex characters")]
    InvalidTreeId(String),

    /// A tree could not be rendered to its canonical document form.
    #[error("task tree serialisation failed: {reason}")]
    Serialization {
        /// Serialiser diagnostic for the failed document.
        reason: String,
    },

    /// A persisted tree document could not be decoded.
    #[error("malformed task tree document: {reason}")]
    MalformedDocument {
        /// Parser diagnostic for the rejected document.
        reason: String,
    },
}
