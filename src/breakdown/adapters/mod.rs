//! Adapter implementations for decomposition ports.

pub mod memory;
