//! Deterministic in-process generators for tests and offline use.

use crate::breakdown::{
    domain::BreakdownRequest,
    ports::{BreakdownGenerator, BreakdownGeneratorResult, GeneratorError},
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Generator that answers from a fixed repertoire instead of a model.
///
/// Three modes cover the test surface: echoing a deterministic two-level
/// decomposition built around the requested task name, replaying scripted
/// completions in order, and failing every request.
#[derive(Debug, Clone)]
pub struct CannedBreakdownGenerator {
    mode: Mode,
}

#[derive(Debug, Clone)]
enum Mode {
    Echoing,
    Scripted(Arc<Mutex<VecDeque<String>>>),
    Failing(String),
}

impl CannedBreakdownGenerator {
    /// Creates a generator that decomposes any task into a fixed two-level
    /// plan titled after the requested task name.
    #[must_use]
    pub const fn echoing() -> Self {
        Self { mode: Mode::Echoing }
    }

    /// Creates a generator that replays the given completions in order and
    /// rejects requests once they run out.
    #[must_use]
    pub fn scripted(responses: impl IntoIterator<Item = String>) -> Self {
        Self {
            mode: Mode::Scripted(Arc::new(Mutex::new(responses.into_iter().collect()))),
        }
    }

    /// Creates a generator that rejects every request with the given reason.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            mode: Mode::Failing(reason.into()),
        }
    }
}

#[async_trait]
impl BreakdownGenerator for CannedBreakdownGenerator {
    async fn generate(&self, request: &BreakdownRequest) -> BreakdownGeneratorResult<String> {
        match &self.mode {
            Mode::Echoing => Ok(echo_breakdown(request)),
            Mode::Scripted(queue) => {
                let mut responses = queue.lock().map_err(|err| {
                    GeneratorError::backend(std::io::Error::other(err.to_string()))
                })?;
                responses.pop_front().ok_or_else(|| GeneratorError::Rejected {
                    reason: "no scripted completion left".to_owned(),
                })
            }
            Mode::Failing(reason) => Err(GeneratorError::Rejected {
                reason: reason.clone(),
            }),
        }
    }
}

/// Builds the fixed two-level decomposition around the requested task name.
///
/// Distinct task names yield distinct trees and therefore distinct tree
/// identities, which placement and duplicate-planting flows rely on.
fn echo_breakdown(request: &BreakdownRequest) -> String {
    serde_json::json!({
        "task": request.task_name(),
        "subtasks": [
            {
                "task": "Outline the approach",
                "subtasks": [
                    {"task": "List the known constraints", "subtasks": []},
                    {"task": "Draft the plan", "subtasks": []},
                ],
            },
            {
                "task": "Execute the plan",
                "subtasks": [
                    {"task": "Work through each step", "subtasks": []},
                    {"task": "Review the outcome", "subtasks": []},
                ],
            },
        ],
    })
    .to_string()
}
