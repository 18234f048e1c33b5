//! Garden management for BloomBonsai.
//!
//! A garden is one owner's 5×5 grid of planted bonsai trees. Planting
//! decomposes a task into a subtask tree, assigns the tree to the first free
//! cell in row-major order, persists the record, and mints a token bound to
//! the tree's content identity. Tending toggles subtask completion in the
//! assigned tree; the growth stage owners see is derived from completion
//! progress each time the garden is read. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
