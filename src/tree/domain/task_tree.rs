//! The task-tree aggregate: construction, completion toggling, and identity.

use super::{NodeId, Progress, Subtask, TaskBreakdown, TreeDomainError, TreeId, subtask};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// A decomposed task with propagated completion state.
///
/// The tree is an immutable value: [`TaskTree::toggle`] returns a new version
/// that shares every untouched subtree with its predecessor. A non-leaf node
/// never stores an independent completion flag; it is always the conjunction
/// of its children's flags, which [`TaskTree::from_breakdown`] and
/// [`TaskTree::toggle`] maintain.
///
/// The serialised form uses camel-cased field names (`isComplete`,
/// `subtasks`), and the field order below is the canonical document order
/// that [`TaskTree::tree_id`] hashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTree {
    id: NodeId,
    title: String,
    description: String,
    is_complete: bool,
    #[serde(default)]
    subtasks: Vec<Arc<Subtask>>,
}

impl TaskTree {
    /// Builds a tree from a parsed breakdown payload.
    ///
    /// The root takes the given identifier, children derive theirs from
    /// their one-based position (`"1"`, `"1-1"`, `"1-1-2"`), every node
    /// starts incomplete, and the description starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`TreeDomainError::MalformedInput`] when a task label at any
    /// level is empty after trimming.
    pub fn from_breakdown(
        breakdown: &TaskBreakdown,
        root: NodeId,
    ) -> Result<Self, TreeDomainError> {
        let title = subtask::validated_label(breakdown.label())?;
        let subtasks = subtask::build_from_breakdown(breakdown.subtasks(), &root)?;
        Ok(Self {
            id: root,
            title,
            description: String::new(),
            is_complete: false,
            subtasks,
        })
    }

    /// Replaces the tree's description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the root identifier.
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        &self.id
    }

    /// Returns the root task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tree's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Reports whether the whole task is complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Returns the top-level subtasks.
    #[must_use]
    pub fn subtasks(&self) -> &[Arc<Subtask>] {
        &self.subtasks
    }

    /// Finds a descendant node by identifier via depth-first search.
    ///
    /// Returns `None` for identifiers absent from the tree, including the
    /// root's own identifier.
    #[must_use]
    pub fn find(&self, node_id: &NodeId) -> Option<&Subtask> {
        let mut stack: Vec<&Arc<Subtask>> = self.subtasks.iter().rev().collect();
        while let Some(subtask) = stack.pop() {
            if subtask.id() == node_id {
                return Some(subtask);
            }
            stack.extend(subtask.subtasks().iter().rev());
        }
        None
    }

    /// Returns a new tree with the identified node's completion toggled and
    /// the change propagated to its ancestors.
    ///
    /// The matched node's flag is flipped; a matched node with children then
    /// immediately re-derives its flag from them, so in practice only leaf
    /// toggles change state. Every ancestor on the path back to the root,
    /// root included, recomputes its flag as the conjunction of its
    /// children's flags. Subtrees off that path are shared with `self`
    /// rather than copied.
    ///
    /// Toggling an identifier that does not occur in the tree is a no-op
    /// that returns an equal tree.
    #[must_use]
    pub fn toggle(&self, node_id: &NodeId) -> Self {
        if self.id == *node_id {
            let flipped = !self.is_complete;
            return Self {
                id: self.id.clone(),
                title: self.title.clone(),
                description: self.description.clone(),
                is_complete: subtask::derived_completion(flipped, &self.subtasks),
                subtasks: self.subtasks.clone(),
            };
        }
        subtask::toggle_in_siblings(&self.subtasks, node_id).map_or_else(
            || self.clone(),
            |subtasks| Self {
                id: self.id.clone(),
                title: self.title.clone(),
                description: self.description.clone(),
                is_complete: subtask::all_complete(&subtasks),
                subtasks,
            },
        )
    }

    /// Counts completed and total descendant nodes, excluding the root.
    #[must_use]
    pub fn progress(&self) -> Progress {
        subtask::count_descendants(&self.subtasks)
    }

    /// Renders the canonical document form of the tree.
    ///
    /// The encoding is deterministic: fields appear in declaration order and
    /// subtask arrays preserve their positional order, so equal trees always
    /// produce identical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TreeDomainError::Serialization`] when the document cannot
    /// be rendered.
    pub fn canonical_json(&self) -> Result<String, TreeDomainError> {
        serde_json::to_string(self).map_err(|err| TreeDomainError::Serialization {
            reason: err.to_string(),
        })
    }

    /// Decodes a tree from its canonical document form.
    ///
    /// # Errors
    ///
    /// Returns [`TreeDomainError::MalformedDocument`] when the document does
    /// not match the expected shape.
    pub fn from_canonical_json(document: &str) -> Result<Self, TreeDomainError> {
        serde_json::from_str(document).map_err(|err| TreeDomainError::MalformedDocument {
            reason: err.to_string(),
        })
    }

    /// Computes the tree's content-derived identity.
    ///
    /// The identity is the SHA-256 digest of [`TaskTree::canonical_json`],
    /// hex encoded, so it commits to titles, structure, and completion
    /// flags alike.
    ///
    /// # Errors
    ///
    /// Returns [`TreeDomainError::Serialization`] when the canonical
    /// document cannot be rendered.
    pub fn tree_id(&self) -> Result<TreeId, TreeDomainError> {
        let canonical = self.canonical_json()?;
        Ok(TreeId::from_digest(Sha256::digest(canonical.as_bytes())))
    }
}
