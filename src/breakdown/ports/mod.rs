//! Port contracts for task decomposition.

pub mod generator;

pub use generator::{BreakdownGenerator, BreakdownGeneratorResult, GeneratorError};
