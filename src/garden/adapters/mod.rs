//! Adapter implementations for garden ports.

pub mod memory;
pub mod postgres;
