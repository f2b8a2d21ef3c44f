//! Step definitions.
//!
//! Steps are the units of work a build workflow runs in order: generating
//! or overlaying the project, installing extras, patching the manifest.
//!
//! # Step Lifecycle
//!
//! 1. **Registration**: Steps are registered with a `StepRegistry` by name.
//! 2. **Lookup**: The `WorkflowExecutor` looks steps up by name.
//! 3. **Gating**: `should_run` decides whether the step has anything to do.
//! 4. **Execution**: `execute` runs with a mutable `BuildContext`.
//! 5. **Result**: A `StepResult` is recorded in the build log.
//!
//! Returning `Err` from `execute` is fatal and stops the build. A step that
//! fails in a way the build can survive returns `Ok` with a failed result.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::BuildContext;
use crate::error::CoreResult;
use crate::state::BuildState;

/// How a step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Completed,
    Skipped,
    Failed,
}

impl std::fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Skipped => write!(f, "skipped"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Result from step execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub step: String,
    pub outcome: StepOutcome,
    pub message: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl StepResult {
    fn with_outcome(step: impl Into<String>, outcome: StepOutcome) -> Self {
        let now = Utc::now();
        Self {
            step: step.into(),
            outcome,
            message: None,
            started_at: now,
            completed_at: now,
        }
    }

    pub fn completed(step: impl Into<String>) -> Self {
        Self::with_outcome(step, StepOutcome::Completed)
    }

    pub fn skipped(step: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::with_outcome(step, StepOutcome::Skipped).with_message(reason)
    }

    pub fn failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_outcome(step, StepOutcome::Failed).with_message(message)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn started(mut self, at: DateTime<Utc>) -> Self {
        self.started_at = at;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.outcome == StepOutcome::Completed
    }

    pub fn is_failed(&self) -> bool {
        self.outcome == StepOutcome::Failed
    }
}

/// Trait for step implementations.
#[async_trait]
pub trait Step: Send + Sync {
    /// Unique step name, used for registry lookup and in workflow definitions.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Builder state the step runs in.
    fn state(&self) -> BuildState;

    /// Execute the step.
    async fn execute(&self, context: &mut BuildContext) -> CoreResult<StepResult>;

    /// Check if the step has anything to do for the context.
    ///
    /// Default: always run.
    fn should_run(&self, _context: &BuildContext) -> bool {
        true
    }
}
