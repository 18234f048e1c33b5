//! Service layer for planting a bonsai from a task.

use crate::breakdown::{
    domain::{BreakdownDomainError, BreakdownRequest},
    ports::{BreakdownGenerator, GeneratorError},
};
use crate::garden::{
    domain::{
        GardenDomainError, GridCell, GridDimensions, GrowthStage, MetadataCid, OwnerAddress,
        PlantTreeParams, Species, TreeRecord,
    },
    ports::{TreeRecordRepository, TreeRecordRepositoryError},
};
use crate::minting::{
    domain::{MintReceipt, MintingDomainError, render_token_metadata},
    ports::{BonsaiMinter, MintError},
};
use crate::tree::domain::{NodeId, TaskBreakdown, TaskTree, TreeDomainError, TreeId};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for planting a bonsai against a named task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantBonsaiRequest {
    owner: String,
    task_name: String,
    description: Option<String>,
    metadata_cid: Option<String>,
}

impl PlantBonsaiRequest {
    /// Creates a request with the required owner address and task name.
    #[must_use]
    pub fn new(owner: impl Into<String>, task_name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            task_name: task_name.into(),
            description: None,
            metadata_cid: None,
        }
    }

    /// Sets a task description forwarded to the generator and kept on the
    /// planted tree.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the content identifier of the already-pinned token metadata.
    ///
    /// Without one the record carries the pre-pin placeholder identifier.
    #[must_use]
    pub fn with_metadata_cid(mut self, metadata_cid: impl Into<String>) -> Self {
        self.metadata_cid = Some(metadata_cid.into());
        self
    }
}

/// Everything produced by a successful planting.
#[derive(Debug, Clone)]
pub struct PlantedBonsai {
    /// Persisted record of the planted tree.
    pub record: TreeRecord,
    /// The decomposed task tree assigned to the planting.
    pub tree: TaskTree,
    /// Receipt of the mint transaction.
    pub receipt: MintReceipt,
    /// Rendered token metadata document, ready for pinning.
    pub metadata_document: String,
}

/// Service-level errors for planting operations.
#[derive(Debug, Error)]
pub enum PlantingError {
    /// Garden-side validation failed.
    #[error(transparent)]
    Garden(#[from] GardenDomainError),
    /// Tree construction, parsing, or serialisation failed.
    #[error(transparent)]
    Tree(#[from] TreeDomainError),
    /// Breakdown request validation or prompt rendering failed.
    #[error(transparent)]
    Breakdown(#[from] BreakdownDomainError),
    /// The generator failed to produce a completion.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// Persistence failed.
    #[error(transparent)]
    Repository(#[from] TreeRecordRepositoryError),
    /// Token metadata rendering failed.
    #[error(transparent)]
    Minting(#[from] MintingDomainError),
    /// The record was persisted but the mint transaction failed.
    #[error("tree {tree_id} was planted but minting failed")]
    MintFailed {
        /// Identity of the planted tree whose mint failed.
        tree_id: TreeId,
        /// Underlying mint failure.
        #[source]
        source: MintError,
    },
}

/// Result type for planting service operations.
pub type PlantingResult<T> = Result<T, PlantingError>;

/// Planting orchestration service.
///
/// Planting decomposes the task through the generator, derives the tree's
/// content identity, places the tree in the owner's grid, persists the
/// record, and mints the token committing to that identity.
#[derive(Clone)]
pub struct PlantingService<R, G, M, C>
where
    R: TreeRecordRepository,
    G: BreakdownGenerator,
    M: BonsaiMinter,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    generator: Arc<G>,
    minter: Arc<M>,
    clock: Arc<C>,
    dimensions: GridDimensions,
}

impl<R, G, M, C> PlantingService<R, G, M, C>
where
    R: TreeRecordRepository,
    G: BreakdownGenerator,
    M: BonsaiMinter,
    C: Clock + Send + Sync,
{
    /// Creates a planting service over the default garden grid.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        generator: Arc<G>,
        minter: Arc<M>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            generator,
            minter,
            clock,
            dimensions: GridDimensions::new(
                GridDimensions::DEFAULT_ROWS,
                GridDimensions::DEFAULT_COLS,
            ),
        }
    }

    /// Overrides the garden grid dimensions.
    #[must_use]
    pub const fn with_grid_dimensions(mut self, dimensions: GridDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Plants a bonsai: decomposes the task, places the tree, persists the
    /// record, and mints the token.
    ///
    /// # Errors
    ///
    /// Returns [`PlantingError`] when validation fails, the generator's
    /// output cannot be parsed, the owner's grid is full, the tree identity
    /// is already planted, or the mint transaction fails. A
    /// [`PlantingError::MintFailed`] leaves the persisted record in place.
    pub async fn plant(&self, request: PlantBonsaiRequest) -> PlantingResult<PlantedBonsai> {
        let owner = OwnerAddress::new(request.owner)?;

        let mut breakdown_request = BreakdownRequest::new(request.task_name)?;
        if let Some(description) = request.description {
            breakdown_request = breakdown_request.with_description(description);
        }

        let completion = self.generator.generate(&breakdown_request).await?;
        let breakdown = TaskBreakdown::from_ai_response(&completion)?;
        let mut tree = TaskTree::from_breakdown(&breakdown, NodeId::from_counter(1))?;
        if let Some(description) = breakdown_request.description() {
            tree = tree.with_description(description);
        }

        let tree_id = tree.tree_id()?;
        let species = Species::for_tree(&tree_id);

        let existing = self.repository.find_by_owner(&owner).await?;
        let occupied: Vec<GridCell> = existing.iter().map(TreeRecord::cell).collect();
        let cell = self.dimensions.first_free_cell(&occupied)?;

        let metadata_document =
            render_token_metadata(tree.title(), species, GrowthStage::Seedling, &tree_id)?;
        let metadata_cid = request
            .metadata_cid
            .map(MetadataCid::new)
            .transpose()?
            .unwrap_or_else(MetadataCid::placeholder);

        let record = TreeRecord::plant(
            PlantTreeParams {
                owner: owner.clone(),
                tree_id: tree_id.clone(),
                species,
                cell,
                assigned_task: tree.canonical_json()?,
                metadata_cid,
            },
            &*self.clock,
        );
        self.repository.plant(&record).await?;

        let receipt = match self.minter.mint(&owner, &tree_id).await {
            Ok(receipt) => receipt,
            Err(source) => {
                warn!(tree_id = %tree_id, "mint failed after planting; record kept");
                return Err(PlantingError::MintFailed { tree_id, source });
            }
        };

        info!(
            owner = %record.owner(),
            tree_id = %record.tree_id(),
            cell = %record.cell(),
            "planted bonsai"
        );
        Ok(PlantedBonsai {
            record,
            tree,
            receipt,
            metadata_document,
        })
    }
}
