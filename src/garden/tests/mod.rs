//! Unit tests for the garden module.
//!
//! Tests are organised by behaviour: domain validation and record
//! lifecycle, grid placement, species and growth derivation, the planting
//! and tending services, and Postgres row mapping.
