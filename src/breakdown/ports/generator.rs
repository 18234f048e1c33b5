//! Generator port for AI task decomposition.

use crate::breakdown::domain::BreakdownRequest;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for breakdown generator operations.
pub type BreakdownGeneratorResult<T> = Result<T, GeneratorError>;

/// Contract for producing raw decomposition completions.
///
/// Implementations return the completion text as-is; parsing and validation
/// belong to the tree domain so that malformed output is rejected in one
/// place regardless of the backing model.
#[async_trait]
pub trait BreakdownGenerator: Send + Sync {
    /// Produces a raw completion for the given request.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Rejected`] when the backend refuses the
    /// request and [`GeneratorError::Backend`] for transport failures.
    async fn generate(&self, request: &BreakdownRequest) -> BreakdownGeneratorResult<String>;
}

/// Errors returned by breakdown generator implementations.
#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    /// The backend refused to produce a completion.
    #[error("breakdown generator rejected the request: {reason}")]
    Rejected {
        /// Backend-supplied refusal reason.
        reason: String,
    },

    /// Transport or backend failure.
    #[error("breakdown generator failure: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl GeneratorError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
