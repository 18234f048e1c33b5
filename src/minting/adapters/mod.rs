//! Adapter implementations for minting ports.

pub mod memory;
