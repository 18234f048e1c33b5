//! Task decomposition for BloomBonsai.
//!
//! Turning one task into a subtask tree is delegated to an AI generator
//! behind a port. This module owns the request shape, the decomposition
//! prompt, and deterministic generator adapters; interpreting the returned
//! payload belongs to [`crate::tree`].

pub mod adapters;
pub mod domain;
pub mod ports;
