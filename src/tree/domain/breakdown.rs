//! Nested breakdown payloads produced by the AI decomposition step.

use super::TreeDomainError;
use serde::{Deserialize, Serialize};

/// One level of an AI-proposed task decomposition.
///
/// The wire shape mirrors the generator contract: every node carries a `task`
/// label and an optional `subtasks` array of the same shape. Unknown fields
/// are tolerated so that chattier generator output still parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBreakdown {
    task: String,
    #[serde(default)]
    subtasks: Vec<TaskBreakdown>,
}

impl TaskBreakdown {
    /// Creates a leaf breakdown node with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            task: label.into(),
            subtasks: Vec::new(),
        }
    }

    /// Replaces the child nodes of this breakdown level.
    #[must_use]
    pub fn with_subtasks(mut self, subtasks: impl IntoIterator<Item = Self>) -> Self {
        self.subtasks = subtasks.into_iter().collect();
        self
    }

    /// Parses a raw generator completion into a breakdown.
    ///
    /// Generators frequently wrap their JSON payload in a Markdown code
    /// fence; the fence is stripped before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`TreeDomainError::MalformedInput`] when the payload is not
    /// valid JSON of the expected nested shape, including a missing `task`
    /// label at any level.
    pub fn from_ai_response(raw: &str) -> Result<Self, TreeDomainError> {
        let payload = strip_markdown_fence(raw);
        serde_json::from_str(payload).map_err(|err| TreeDomainError::MalformedInput {
            reason: err.to_string(),
        })
    }

    /// Returns the task label of this node.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.task
    }

    /// Returns the child nodes of this level.
    #[must_use]
    pub fn subtasks(&self) -> &[Self] {
        &self.subtasks
    }
}

/// Removes a surrounding Markdown code fence, if present.
fn strip_markdown_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_prefix = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let without_suffix = without_prefix
        .strip_suffix("```")
        .unwrap_or(without_prefix);
    without_suffix.trim()
}
