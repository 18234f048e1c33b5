//! Error types for token metadata and mint receipts.

use thiserror::Error;

/// Errors returned while building minting domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MintingDomainError {
    /// The metadata template failed to render.
    #[error("metadata template rendering failed: {reason}")]
    TemplateRender {
        /// Renderer diagnostic for the failed template.
        reason: String,
    },

    /// The rendered metadata is not a valid token metadata document.
    #[error("invalid token metadata document: {reason}")]
    InvalidDocument {
        /// Parser diagnostic for the rejected document.
        reason: String,
    },

    /// The transaction receipt is empty after trimming.
    #[error("mint receipt must not be empty")]
    EmptyReceipt,
}
