//! Port contracts for the garden.
//!
//! Ports define infrastructure-agnostic interfaces used by garden services.

pub mod repository;

pub use repository::{TreeRecordRepository, TreeRecordRepositoryError, TreeRecordRepositoryResult};
