//! `PostgreSQL` adapters for planted-tree persistence.

mod models;
mod repository;
mod schema;

pub use repository::{GardenPgPool, PostgresTreeRecordRepository};

#[cfg(test)]
pub(crate) use models::TreeRow;
#[cfg(test)]
pub(crate) use repository::{row_to_record, to_new_row};
