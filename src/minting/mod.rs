//! Bonsai token minting for BloomBonsai.
//!
//! A planted tree is mint-ready once its record exists: the token commits to
//! the tree's content identity and the metadata document names the rendered
//! model asset. Chain interaction stays behind [`ports::BonsaiMinter`].

pub mod adapters;
pub mod domain;
pub mod ports;
