//! In-memory repository for garden tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::garden::{
    domain::{OwnerAddress, TreeRecord},
    ports::{TreeRecordRepository, TreeRecordRepositoryError, TreeRecordRepositoryResult},
};
use crate::tree::domain::TreeId;

/// Thread-safe in-memory tree record repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTreeRecordRepository {
    state: Arc<RwLock<GardenState>>,
}

#[derive(Debug, Default)]
struct GardenState {
    records: HashMap<TreeId, TreeRecord>,
    owner_index: HashMap<OwnerAddress, Vec<TreeId>>,
}

impl InMemoryTreeRecordRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TreeRecordRepository for InMemoryTreeRecordRepository {
    async fn plant(&self, record: &TreeRecord) -> TreeRecordRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TreeRecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let tree_id = record.tree_id().clone();
        if state.records.contains_key(&tree_id) {
            return Err(TreeRecordRepositoryError::DuplicateTree(tree_id));
        }

        state
            .owner_index
            .entry(record.owner().clone())
            .or_default()
            .push(tree_id.clone());
        state.records.insert(tree_id, record.clone());
        Ok(())
    }

    async fn update_assigned_task(
        &self,
        tree_id: &TreeId,
        document: &str,
        updated_at: DateTime<Utc>,
    ) -> TreeRecordRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TreeRecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let record = state
            .records
            .get_mut(tree_id)
            .ok_or_else(|| TreeRecordRepositoryError::NotFound(tree_id.clone()))?;
        record.assign_task(document, updated_at);
        Ok(())
    }

    async fn find_by_owner(
        &self,
        owner: &OwnerAddress,
    ) -> TreeRecordRepositoryResult<Vec<TreeRecord>> {
        let state = self.state.read().map_err(|err| {
            TreeRecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let records = state
            .owner_index
            .get(owner)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.records.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(records)
    }

    async fn find_by_tree_id(
        &self,
        tree_id: &TreeId,
    ) -> TreeRecordRepositoryResult<Option<TreeRecord>> {
        let state = self.state.read().map_err(|err| {
            TreeRecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.records.get(tree_id).cloned())
    }
}
