//! Task-tree modelling and completion propagation for BloomBonsai.
//!
//! A planted task is decomposed into a tree of subtasks. This module owns
//! that tree: building it from a generator breakdown, toggling node
//! completion with conjunction-of-children propagation, measuring progress,
//! and deriving the content hash that identifies the tree everywhere else in
//! the system.
//!
//! # Example
//!
//! ```
//! use bloombonsai::tree::domain::{NodeId, TaskBreakdown, TaskTree};
//!
//! let breakdown = TaskBreakdown::from_ai_response(
//!     r#"{"task": "Plan a birthday party", "subtasks": [{"task": "Choose a venue"}]}"#,
//! )
//! .expect("valid breakdown");
//! let tree = TaskTree::from_breakdown(&breakdown, NodeId::from_counter(1))
//!     .expect("valid tree");
//!
//! let venue = NodeId::new("1-1").expect("valid node id");
//! let toggled = tree.toggle(&venue);
//! assert!(toggled.is_complete());
//! ```

pub mod domain;
