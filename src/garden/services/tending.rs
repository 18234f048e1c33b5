//! Service layer for tending planted trees and viewing the garden.

use crate::garden::{
    domain::{GridCell, GrowthStage, OwnerAddress, Species, TreeRecord},
    ports::{TreeRecordRepository, TreeRecordRepositoryError},
};
use crate::tree::domain::{NodeId, Progress, TaskTree, TreeDomainError, TreeId};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for tending operations.
#[derive(Debug, Error)]
pub enum TendingError {
    /// No planted tree has the given identity.
    #[error("no planted tree with id {0}")]
    UnknownTree(TreeId),
    /// Tree document decoding or serialisation failed.
    #[error(transparent)]
    Tree(#[from] TreeDomainError),
    /// Persistence failed.
    #[error(transparent)]
    Repository(#[from] TreeRecordRepositoryError),
}

/// Result type for tending service operations.
pub type TendingResult<T> = Result<T, TendingError>;

/// A planted tree after a tending operation, with derived display state.
#[derive(Debug, Clone)]
pub struct TendedTree {
    /// The assigned task tree after the operation.
    pub tree: TaskTree,
    /// Completion counts across the whole tree.
    pub progress: Progress,
    /// Growth stage derived from current progress.
    pub display_stage: GrowthStage,
}

/// Owner-facing view of every planting in a garden.
#[derive(Debug, Clone)]
pub struct GardenView {
    /// Planted cells, oldest planting first.
    pub plantings: Vec<PlantedCell>,
}

/// One planted tree as shown on the garden grid.
#[derive(Debug, Clone)]
pub struct PlantedCell {
    /// Occupied grid cell.
    pub cell: GridCell,
    /// Specimen rendered in the cell.
    pub species: Species,
    /// Growth stage derived from current progress.
    pub stage: GrowthStage,
    /// Identity of the assigned task tree.
    pub tree_id: TreeId,
    /// Title of the assigned task.
    pub title: String,
    /// Completion counts of the assigned task tree.
    pub progress: Progress,
}

/// Tending orchestration service.
///
/// Tending decodes the persisted task document, applies completion toggles,
/// and derives the growth stage owners see from current progress rather than
/// from the stage recorded at planting time.
#[derive(Clone)]
pub struct TendingService<R, C>
where
    R: TreeRecordRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TendingService<R, C>
where
    R: TreeRecordRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new tending service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Toggles completion of one subtask and persists the updated document.
    ///
    /// The document is written back even when the toggle changes nothing, so
    /// the record's update timestamp always reflects the tending attempt.
    ///
    /// # Errors
    ///
    /// Returns [`TendingError::UnknownTree`] when the tree has not been
    /// planted, and propagates decode or persistence failures.
    pub async fn toggle_subtask(
        &self,
        tree_id: &TreeId,
        node_id: &NodeId,
    ) -> TendingResult<TendedTree> {
        let tree = self.assigned_tree(tree_id).await?;
        let toggled = tree.toggle(node_id);
        let document = toggled.canonical_json()?;
        self.repository
            .update_assigned_task(tree_id, &document, self.clock.utc())
            .await?;
        debug!(tree_id = %tree_id, node_id = %node_id, "toggled subtask completion");
        Ok(tended(toggled))
    }

    /// Reports progress and derived growth stage for one planted tree.
    ///
    /// # Errors
    ///
    /// Returns [`TendingError::UnknownTree`] when the tree has not been
    /// planted, and propagates decode failures.
    pub async fn progress_of(&self, tree_id: &TreeId) -> TendingResult<TendedTree> {
        let tree = self.assigned_tree(tree_id).await?;
        Ok(tended(tree))
    }

    /// Builds the grid view of every planting owned by the given address.
    ///
    /// # Errors
    ///
    /// Propagates lookup and document decode failures.
    pub async fn garden_view(&self, owner: &OwnerAddress) -> TendingResult<GardenView> {
        let records = self.repository.find_by_owner(owner).await?;
        let plantings = records
            .iter()
            .map(planted_cell)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GardenView { plantings })
    }

    async fn assigned_tree(&self, tree_id: &TreeId) -> TendingResult<TaskTree> {
        let record = self
            .repository
            .find_by_tree_id(tree_id)
            .await?
            .ok_or_else(|| TendingError::UnknownTree(tree_id.clone()))?;
        Ok(TaskTree::from_canonical_json(record.assigned_task())?)
    }
}

fn tended(tree: TaskTree) -> TendedTree {
    let progress = tree.progress();
    TendedTree {
        tree,
        progress,
        display_stage: GrowthStage::for_progress(progress),
    }
}

fn planted_cell(record: &TreeRecord) -> TendingResult<PlantedCell> {
    let tree = TaskTree::from_canonical_json(record.assigned_task())?;
    let progress = tree.progress();
    Ok(PlantedCell {
        cell: record.cell(),
        species: record.species(),
        stage: GrowthStage::for_progress(progress),
        tree_id: record.tree_id().clone(),
        title: tree.title().to_owned(),
        progress,
    })
}
