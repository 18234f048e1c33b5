//! Subtask nodes and the recursive machinery shared with the tree root.

use super::{NodeId, TaskBreakdown, TreeDomainError};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// A single node beneath the root of a task tree.
///
/// Children are held behind [`Arc`] so that rebuilding one path of the tree
/// shares every untouched sibling subtree with the previous version instead
/// of cloning it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    id: NodeId,
    title: String,
    is_complete: bool,
    #[serde(default)]
    subtasks: Vec<Arc<Subtask>>,
}

impl Subtask {
    /// Returns the path-derived identifier of this node.
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        &self.id
    }

    /// Returns the node's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Reports whether this node is currently complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Returns the child nodes of this subtask.
    #[must_use]
    pub fn subtasks(&self) -> &[Arc<Self>] {
        &self.subtasks
    }

    /// Reports whether this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.subtasks.is_empty()
    }

    /// Counts completed and total nodes in the subtree rooted here,
    /// excluding this node itself.
    #[must_use]
    pub fn progress(&self) -> Progress {
        count_descendants(&self.subtasks)
    }
}

/// Completed and total descendant counts for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    completed: usize,
    total: usize,
}

impl Progress {
    /// Progress of a node with no descendants.
    pub const NONE: Self = Self {
        completed: 0,
        total: 0,
    };

    /// Creates progress counts directly.
    ///
    /// Counts normally come from [`Subtask::progress`] or the tree root;
    /// this constructor carries them across read-model boundaries.
    #[must_use]
    pub const fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Number of completed descendant nodes.
    #[must_use]
    pub const fn completed(self) -> usize {
        self.completed
    }

    /// Total number of descendant nodes.
    #[must_use]
    pub const fn total(self) -> usize {
        self.total
    }

    /// Reports whether every counted descendant is complete.
    ///
    /// A node without descendants reports `false`; completion of a bare
    /// root is tracked on the root itself rather than through its counts.
    #[must_use]
    pub const fn is_all_complete(self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Validates and normalises a task label from a breakdown payload.
pub(crate) fn validated_label(label: &str) -> Result<String, TreeDomainError> {
    let normalized = label.trim();
    if normalized.is_empty() {
        return Err(TreeDomainError::MalformedInput {
            reason: "empty task label".to_owned(),
        });
    }
    Ok(normalized.to_owned())
}

/// Builds the subtask forest for one breakdown level.
///
/// Children receive path-derived identifiers starting at position one and
/// every node starts incomplete.
pub(crate) fn build_from_breakdown(
    nodes: &[TaskBreakdown],
    parent: &NodeId,
) -> Result<Vec<Arc<Subtask>>, TreeDomainError> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let id = parent.child(NonZeroUsize::MIN.saturating_add(index));
            let title = validated_label(node.label())?;
            let subtasks = build_from_breakdown(node.subtasks(), &id)?;
            Ok(Arc::new(Subtask {
                id,
                title,
                is_complete: false,
                subtasks,
            }))
        })
        .collect()
}

/// Reports whether every node in the slice is complete.
pub(crate) fn all_complete(subtasks: &[Arc<Subtask>]) -> bool {
    subtasks.iter().all(|subtask| subtask.is_complete)
}

/// Completion state of a node after an explicit flip.
///
/// A leaf keeps the flipped value; a node with children immediately
/// re-derives its state from them, which makes the flip observable only on
/// leaves.
pub(crate) fn derived_completion(flipped: bool, subtasks: &[Arc<Subtask>]) -> bool {
    if subtasks.is_empty() {
        flipped
    } else {
        all_complete(subtasks)
    }
}

/// Counts completed and total nodes across a forest, recursively.
pub(crate) fn count_descendants(subtasks: &[Arc<Subtask>]) -> Progress {
    subtasks.iter().fold(Progress::NONE, |acc, subtask| {
        let below = count_descendants(&subtask.subtasks);
        Progress {
            completed: acc.completed + usize::from(subtask.is_complete) + below.completed,
            total: acc.total + 1 + below.total,
        }
    })
}

/// Rebuilds the sibling slice containing `node_id`, sharing untouched nodes.
///
/// Returns `None` when the identifier does not occur anywhere in the forest,
/// in which case the caller leaves its own level untouched. Identifiers are
/// unique by construction, so the first depth-first match wins.
pub(crate) fn toggle_in_siblings(
    siblings: &[Arc<Subtask>],
    node_id: &NodeId,
) -> Option<Vec<Arc<Subtask>>> {
    let (changed_index, replacement) =
        siblings
            .iter()
            .enumerate()
            .find_map(|(index, sibling)| {
                rebuild_toggled(sibling, node_id).map(|rebuilt| (index, rebuilt))
            })?;
    let rebuilt_level = siblings
        .iter()
        .enumerate()
        .map(|(index, sibling)| {
            if index == changed_index {
                Arc::clone(&replacement)
            } else {
                Arc::clone(sibling)
            }
        })
        .collect();
    Some(rebuilt_level)
}

/// Rebuilds a single subtask if the toggle target lies at or below it.
fn rebuild_toggled(subtask: &Subtask, node_id: &NodeId) -> Option<Arc<Subtask>> {
    if subtask.id == *node_id {
        let flipped = !subtask.is_complete;
        return Some(Arc::new(Subtask {
            id: subtask.id.clone(),
            title: subtask.title.clone(),
            is_complete: derived_completion(flipped, &subtask.subtasks),
            subtasks: subtask.subtasks.clone(),
        }));
    }
    let subtasks = toggle_in_siblings(&subtask.subtasks, node_id)?;
    Some(Arc::new(Subtask {
        id: subtask.id.clone(),
        title: subtask.title.clone(),
        is_complete: all_complete(&subtasks),
        subtasks,
    }))
}
