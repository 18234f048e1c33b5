//! BloomBonsai: gamified task gardening backend.
//!
//! Planting a bonsai decomposes a task into a three-level subtask tree,
//! persists the tree as a planted record on the owner's garden grid, and
//! mints a token committing to the tree's content hash. Tending toggles
//! subtask completion, which cascades up the tree and drives the growth
//! stage rendered in the garden.
//!
//! # Architecture
//!
//! BloomBonsai follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`tree`]: Recursive task-tree model, completion propagation, identity
//! - [`garden`]: Planted-tree records, grid placement, growth derivation
//! - [`breakdown`]: AI decomposition boundary and prompt rendering
//! - [`minting`]: Token metadata and the chain minting boundary

pub mod breakdown;
pub mod garden;
pub mod minting;
pub mod tree;
