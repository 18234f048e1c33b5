//! Error types for breakdown requests and prompt rendering.

use thiserror::Error;

/// Errors returned while building breakdown requests or prompts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BreakdownDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The prompt template failed to render.
    #[error("prompt template rendering failed: {reason}")]
    TemplateRender {
        /// Renderer diagnostic for the failed template.
        reason: String,
    },
}
