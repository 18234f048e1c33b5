//! Diesel schema for planted-tree persistence.

diesel::table! {
    /// Planted bonsai records keyed by tree content identity.
    trees (tree_id) {
        /// Hex-encoded content identity of the assigned task tree.
        #[max_length = 64]
        tree_id -> Varchar,
        /// Lowercased wallet address of the owner.
        #[max_length = 42]
        owner -> Varchar,
        /// Specimen rendered for this tree.
        #[max_length = 16]
        species -> Varchar,
        /// Growth stage recorded at planting time.
        #[max_length = 4]
        growth_stage -> Varchar,
        /// Zero-based grid row.
        row -> SmallInt,
        /// Zero-based grid column.
        col -> SmallInt,
        /// Canonical task tree document.
        assigned_task -> Jsonb,
        /// Content identifier of the pinned token metadata.
        #[max_length = 255]
        metadata_cid -> Varchar,
        /// Planting timestamp.
        planted_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
