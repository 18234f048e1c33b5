//! Planted-tree records and their lifecycle.

use super::{GridCell, GrowthStage, MetadataCid, OwnerAddress, Species};
use crate::tree::domain::TreeId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Persistent record of one planted bonsai.
///
/// The serialised field names are part of the stored document format
/// (`treeId`, `assignedTask`, `metadataCID`); the assigned task is carried
/// as the canonical JSON document of its [`crate::tree::domain::TaskTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeRecord {
    owner: OwnerAddress,
    tree_id: TreeId,
    species: Species,
    growth_stage: GrowthStage,
    #[serde(flatten)]
    cell: GridCell,
    assigned_task: String,
    #[serde(rename = "metadataCID")]
    metadata_cid: MetadataCid,
    #[serde(rename = "createdAt")]
    planted_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for planting a new tree record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantTreeParams {
    /// Wallet address owning the planted tree.
    pub owner: OwnerAddress,
    /// Content-derived identity of the assigned task tree.
    pub tree_id: TreeId,
    /// Specimen rendered for this tree.
    pub species: Species,
    /// Grid cell the tree occupies.
    pub cell: GridCell,
    /// Canonical JSON document of the assigned task tree.
    pub assigned_task: String,
    /// Content identifier of the pinned token metadata.
    pub metadata_cid: MetadataCid,
}

/// Parameter object for reconstructing a persisted tree record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTreeRecordData {
    /// Persisted owner address.
    pub owner: OwnerAddress,
    /// Persisted tree identity.
    pub tree_id: TreeId,
    /// Persisted specimen.
    pub species: Species,
    /// Persisted growth stage at planting time.
    pub growth_stage: GrowthStage,
    /// Persisted grid cell.
    pub cell: GridCell,
    /// Persisted task tree document.
    pub assigned_task: String,
    /// Persisted metadata content identifier.
    pub metadata_cid: MetadataCid,
    /// Persisted planting timestamp.
    pub planted_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TreeRecord {
    /// Plants a new tree record.
    ///
    /// New plantings always start at the seedling stage with matching
    /// planting and update timestamps.
    #[must_use]
    pub fn plant(params: PlantTreeParams, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            owner: params.owner,
            tree_id: params.tree_id,
            species: params.species,
            growth_stage: GrowthStage::Seedling,
            cell: params.cell,
            assigned_task: params.assigned_task,
            metadata_cid: params.metadata_cid,
            planted_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTreeRecordData) -> Self {
        Self {
            owner: data.owner,
            tree_id: data.tree_id,
            species: data.species,
            growth_stage: data.growth_stage,
            cell: data.cell,
            assigned_task: data.assigned_task,
            metadata_cid: data.metadata_cid,
            planted_at: data.planted_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the owner address.
    #[must_use]
    pub const fn owner(&self) -> &OwnerAddress {
        &self.owner
    }

    /// Returns the tree identity.
    #[must_use]
    pub const fn tree_id(&self) -> &TreeId {
        &self.tree_id
    }

    /// Returns the specimen.
    #[must_use]
    pub const fn species(&self) -> Species {
        self.species
    }

    /// Returns the growth stage recorded at planting time.
    ///
    /// The stage shown to owners is derived from current progress instead;
    /// see [`GrowthStage::for_progress`].
    #[must_use]
    pub const fn growth_stage(&self) -> GrowthStage {
        self.growth_stage
    }

    /// Returns the occupied grid cell.
    #[must_use]
    pub const fn cell(&self) -> GridCell {
        self.cell
    }

    /// Returns the assigned task tree document.
    #[must_use]
    pub fn assigned_task(&self) -> &str {
        &self.assigned_task
    }

    /// Returns the metadata content identifier.
    #[must_use]
    pub const fn metadata_cid(&self) -> &MetadataCid {
        &self.metadata_cid
    }

    /// Returns the planting timestamp.
    #[must_use]
    pub const fn planted_at(&self) -> DateTime<Utc> {
        self.planted_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the assigned task document, recording when it changed.
    pub fn assign_task(&mut self, document: impl Into<String>, updated_at: DateTime<Utc>) {
        self.assigned_task = document.into();
        self.updated_at = updated_at;
    }
}
