//! Step definitions for garden tending behaviour scenarios.

pub mod then;
pub mod world;
