//! `PostgreSQL` repository implementation for planted-tree storage.

use super::{
    models::{NewTreeRow, TreeRow},
    schema::trees,
};
use crate::garden::{
    domain::{
        GridCell, GrowthStage, MetadataCid, OwnerAddress, PersistedTreeRecordData, Species,
        TreeRecord,
    },
    ports::{TreeRecordRepository, TreeRecordRepositoryError, TreeRecordRepositoryResult},
};
use crate::tree::domain::TreeId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde_json::Value;

/// `PostgreSQL` connection pool type used by garden adapters.
pub type GardenPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed tree record repository.
#[derive(Debug, Clone)]
pub struct PostgresTreeRecordRepository {
    pool: GardenPgPool,
}

impl PostgresTreeRecordRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: GardenPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TreeRecordRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TreeRecordRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TreeRecordRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TreeRecordRepositoryError::persistence)?
    }
}

#[async_trait]
impl TreeRecordRepository for PostgresTreeRecordRepository {
    async fn plant(&self, record: &TreeRecord) -> TreeRecordRepositoryResult<()> {
        let tree_id = record.tree_id().clone();
        let new_row = to_new_row(record)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(trees::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TreeRecordRepositoryError::DuplicateTree(tree_id.clone())
                    }
                    _ => TreeRecordRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_assigned_task(
        &self,
        tree_id: &TreeId,
        document: &str,
        updated_at: DateTime<Utc>,
    ) -> TreeRecordRepositoryResult<()> {
        let document_value = serde_json::from_str::<Value>(document)
            .map_err(TreeRecordRepositoryError::persistence)?;
        let lookup_id = tree_id.clone();

        self.run_blocking(move |connection| {
            let updated_rows = diesel::update(
                trees::table.filter(trees::tree_id.eq(lookup_id.as_str().to_owned())),
            )
            .set((
                trees::assigned_task.eq(document_value),
                trees::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(TreeRecordRepositoryError::persistence)?;

            if updated_rows == 0 {
                return Err(TreeRecordRepositoryError::NotFound(lookup_id.clone()));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_owner(
        &self,
        owner: &OwnerAddress,
    ) -> TreeRecordRepositoryResult<Vec<TreeRecord>> {
        let lookup_owner = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = trees::table
                .filter(trees::owner.eq(lookup_owner))
                .order(trees::planted_at.asc())
                .select(TreeRow::as_select())
                .load::<TreeRow>(connection)
                .map_err(TreeRecordRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn find_by_tree_id(
        &self,
        tree_id: &TreeId,
    ) -> TreeRecordRepositoryResult<Option<TreeRecord>> {
        let lookup_id = tree_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = trees::table
                .filter(trees::tree_id.eq(lookup_id))
                .select(TreeRow::as_select())
                .first::<TreeRow>(connection)
                .optional()
                .map_err(TreeRecordRepositoryError::persistence)?;
            row.map(row_to_record).transpose()
        })
        .await
    }
}

/// Maps a domain record to its insert row.
pub(crate) fn to_new_row(record: &TreeRecord) -> TreeRecordRepositoryResult<NewTreeRow> {
    let assigned_task = serde_json::from_str::<Value>(record.assigned_task())
        .map_err(TreeRecordRepositoryError::persistence)?;

    Ok(NewTreeRow {
        tree_id: record.tree_id().as_str().to_owned(),
        owner: record.owner().as_str().to_owned(),
        species: record.species().as_str().to_owned(),
        growth_stage: record.growth_stage().as_str().to_owned(),
        row: i16::from(record.cell().row()),
        col: i16::from(record.cell().col()),
        assigned_task,
        metadata_cid: record.metadata_cid().as_str().to_owned(),
        planted_at: record.planted_at(),
        updated_at: record.updated_at(),
    })
}

/// Maps a query row back to a domain record.
///
/// JSONB storage normalises document key order; callers re-derive canonical
/// form from the decoded tree rather than from the stored bytes.
pub(crate) fn row_to_record(row: TreeRow) -> TreeRecordRepositoryResult<TreeRecord> {
    let TreeRow {
        tree_id: persisted_tree_id,
        owner: persisted_owner,
        species: persisted_species,
        growth_stage: persisted_stage,
        row: persisted_row,
        col: persisted_col,
        assigned_task: persisted_document,
        metadata_cid: persisted_cid,
        planted_at,
        updated_at,
    } = row;

    let tree_id = TreeId::new(persisted_tree_id).map_err(TreeRecordRepositoryError::persistence)?;
    let owner =
        OwnerAddress::new(persisted_owner).map_err(TreeRecordRepositoryError::persistence)?;
    let species = Species::try_from(persisted_species.as_str())
        .map_err(TreeRecordRepositoryError::persistence)?;
    let growth_stage = GrowthStage::try_from(persisted_stage.as_str())
        .map_err(TreeRecordRepositoryError::persistence)?;
    let grid_row = u8::try_from(persisted_row).map_err(TreeRecordRepositoryError::persistence)?;
    let grid_col = u8::try_from(persisted_col).map_err(TreeRecordRepositoryError::persistence)?;
    let assigned_task =
        serde_json::to_string(&persisted_document).map_err(TreeRecordRepositoryError::persistence)?;
    let metadata_cid =
        MetadataCid::new(persisted_cid).map_err(TreeRecordRepositoryError::persistence)?;

    let data = PersistedTreeRecordData {
        owner,
        tree_id,
        species,
        growth_stage,
        cell: GridCell::new(grid_row, grid_col),
        assigned_task,
        metadata_cid,
        planted_at,
        updated_at,
    };
    Ok(TreeRecord::from_persisted(data))
}
