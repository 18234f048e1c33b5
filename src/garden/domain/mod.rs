//! Domain model for the bonsai garden.
//!
//! The garden domain models planted-tree records, owner wallets, grid
//! placement, and the species and growth-stage rules that turn task progress
//! into something visible, while keeping persistence and chain concerns
//! outside of the domain boundary.

mod error;
mod grid;
mod growth;
mod ids;
mod record;

pub use error::{GardenDomainError, ParseGrowthStageError, ParseSpeciesError};
pub use grid::{GridCell, GridDimensions};
pub use growth::{GrowthStage, Species};
pub use ids::{MetadataCid, OwnerAddress};
pub use record::{PersistedTreeRecordData, PlantTreeParams, TreeRecord};
