//! Application services for planting and tending gardens.

mod planting;
mod tending;

pub use planting::{
    PlantBonsaiRequest, PlantedBonsai, PlantingError, PlantingResult, PlantingService,
};
pub use tending::{
    GardenView, PlantedCell, TendedTree, TendingError, TendingResult, TendingService,
};
