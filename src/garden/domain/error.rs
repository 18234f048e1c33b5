//! Error types for garden domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing garden domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GardenDomainError {
    /// Every cell of the placement grid is already occupied.
    #[error("garden grid is full ({rows} by {cols})")]
    GridFull {
        /// Number of grid rows.
        rows: u8,
        /// Number of grid columns.
        cols: u8,
    },

    /// The owner address is not a 0x-prefixed 40-digit hex string.
    #[error("invalid owner address '{0}', expected 0x followed by 40 hex digits")]
    InvalidOwnerAddress(String),

    /// The metadata content identifier is empty after trimming.
    #[error("metadata CID must not be empty")]
    EmptyMetadataCid,
}

/// Error returned while parsing species values from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown species: {0}")]
pub struct ParseSpeciesError(pub String);

/// Error returned while parsing growth stages from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown growth stage: {0}")]
pub struct ParseGrowthStageError(pub String);
