//! Repository port for planted-tree persistence and lookup.

use crate::garden::domain::{OwnerAddress, TreeRecord};
use crate::tree::domain::TreeId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for tree record repository operations.
pub type TreeRecordRepositoryResult<T> = Result<T, TreeRecordRepositoryError>;

/// Planted-tree persistence contract.
///
/// Creation writes a full record; the only mutable field afterwards is the
/// assigned task document. Updates apply last-writer-wins with no optimistic
/// locking.
#[async_trait]
pub trait TreeRecordRepository: Send + Sync {
    /// Stores a newly planted tree record.
    ///
    /// # Errors
    ///
    /// Returns [`TreeRecordRepositoryError::DuplicateTree`] when a record
    /// with the same tree identity already exists.
    async fn plant(&self, record: &TreeRecord) -> TreeRecordRepositoryResult<()>;

    /// Replaces the assigned task document of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`TreeRecordRepositoryError::NotFound`] when no record has
    /// the given tree identity.
    async fn update_assigned_task(
        &self,
        tree_id: &TreeId,
        document: &str,
        updated_at: DateTime<Utc>,
    ) -> TreeRecordRepositoryResult<()>;

    /// Returns every record owned by the given address, oldest planting
    /// first.
    async fn find_by_owner(
        &self,
        owner: &OwnerAddress,
    ) -> TreeRecordRepositoryResult<Vec<TreeRecord>>;

    /// Finds a record by tree identity.
    ///
    /// Returns `None` when the tree has not been planted.
    async fn find_by_tree_id(
        &self,
        tree_id: &TreeId,
    ) -> TreeRecordRepositoryResult<Option<TreeRecord>>;
}

/// Errors returned by tree record repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TreeRecordRepositoryError {
    /// A record with the same tree identity already exists.
    #[error("duplicate tree identity: {0}")]
    DuplicateTree(TreeId),

    /// The tree record was not found.
    #[error("tree record not found: {0}")]
    NotFound(TreeId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TreeRecordRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
