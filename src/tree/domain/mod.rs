//! Domain model for decomposed task trees.
//!
//! The tree domain models AI-proposed task breakdowns, path-derived node
//! identifiers, cascading completion state, and the content-derived identity
//! used to mint a tree, while keeping persistence and generation concerns
//! outside of the domain boundary.

mod breakdown;
mod error;
mod ids;
mod subtask;
mod task_tree;

pub use breakdown::TaskBreakdown;
pub use error::TreeDomainError;
pub use ids::{NodeId, TreeId};
pub use subtask::{Progress, Subtask};
pub use task_tree::TaskTree;
