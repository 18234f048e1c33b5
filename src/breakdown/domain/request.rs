//! Breakdown requests and the decomposition prompt.

use super::BreakdownDomainError;
use minijinja::Environment;
use serde_json::{Map, Value};

/// Prompt sent to the generator for task decomposition.
///
/// The constraints match what the tree domain accepts: at most three levels
/// and at most four children per node, with a bare JSON object as the only
/// expected output.
const BREAKDOWN_PROMPT_TEMPLATE: &str = "\
You are a task management assistant. Break the given task into subtasks \
under the following constraints:
Level 1: the main task itself (e.g. \"Plan a birthday party\").
Level 2: up to 4 subtasks (e.g. \"Choose a venue\", \"Send invitations\").
Level 3: up to 4 sub-subtasks per Level 2 subtask. Level 3 tasks have no further subtasks.
Respond with only a JSON object in which every node carries a \"task\" label and a \"subtasks\" array.
Example format: {\"task\": \"Plan a birthday party\", \"subtasks\": [{\"task\": \"Choose a venue\", \"subtasks\": []}]}
Task: {{ task_name }}{% if description %} {{ description }}{% endif %}";

/// A validated request for decomposing one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRequest {
    task_name: String,
    description: Option<String>,
}

impl BreakdownRequest {
    /// Creates a request for the given task name.
    ///
    /// # Errors
    ///
    /// Returns [`BreakdownDomainError::EmptyTaskName`] when the name is
    /// empty after trimming.
    pub fn new(task_name: impl Into<String>) -> Result<Self, BreakdownDomainError> {
        let raw = task_name.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BreakdownDomainError::EmptyTaskName);
        }
        Ok(Self {
            task_name: normalized.to_owned(),
            description: None,
        })
    }

    /// Attaches an optional description appended to the prompt.
    ///
    /// Descriptions that are empty after trimming are dropped.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let raw = description.into();
        let normalized = raw.trim();
        self.description = if normalized.is_empty() {
            None
        } else {
            Some(normalized.to_owned())
        };
        self
    }

    /// Returns the task name.
    #[must_use]
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Renders the decomposition prompt for this request.
    ///
    /// # Errors
    ///
    /// Returns [`BreakdownDomainError::TemplateRender`] when the template
    /// fails to render.
    pub fn render_prompt(&self) -> Result<String, BreakdownDomainError> {
        let environment = Environment::new();
        let context = build_prompt_context(self);
        environment
            .render_str(BREAKDOWN_PROMPT_TEMPLATE, context)
            .map_err(|error| BreakdownDomainError::TemplateRender {
                reason: error.to_string(),
            })
    }
}

fn build_prompt_context(request: &BreakdownRequest) -> Map<String, Value> {
    let mut context = Map::new();
    context.insert(
        "task_name".to_owned(),
        Value::String(request.task_name.clone()),
    );
    context.insert(
        "description".to_owned(),
        request
            .description
            .clone()
            .map_or(Value::Null, Value::String),
    );
    context
}
