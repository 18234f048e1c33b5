//! Diesel row models for planted-tree persistence.

use super::schema::trees;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for tree records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = trees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TreeRow {
    /// Hex-encoded tree identity.
    pub tree_id: String,
    /// Lowercased owner wallet address.
    pub owner: String,
    /// Specimen name.
    pub species: String,
    /// Growth stage recorded at planting time.
    pub growth_stage: String,
    /// Zero-based grid row.
    pub row: i16,
    /// Zero-based grid column.
    pub col: i16,
    /// Canonical task tree document.
    pub assigned_task: Value,
    /// Metadata content identifier.
    pub metadata_cid: String,
    /// Planting timestamp.
    pub planted_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for tree records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = trees)]
pub struct NewTreeRow {
    /// Hex-encoded tree identity.
    pub tree_id: String,
    /// Lowercased owner wallet address.
    pub owner: String,
    /// Specimen name.
    pub species: String,
    /// Growth stage recorded at planting time.
    pub growth_stage: String,
    /// Zero-based grid row.
    pub row: i16,
    /// Zero-based grid column.
    pub col: i16,
    /// Canonical task tree document.
    pub assigned_task: Value,
    /// Metadata content identifier.
    pub metadata_cid: String,
    /// Planting timestamp.
    pub planted_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
