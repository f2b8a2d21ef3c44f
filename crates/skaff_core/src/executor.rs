//! Workflow execution and the partial-completion build log.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::context::{BuildContext, BuildMode};
use crate::error::{CoreError, CoreResult};
use crate::project::{Language, ProjectType};
use crate::registry::StepRegistry;
use crate::state::BuildState;
use crate::step::{StepOutcome, StepResult};

/// Record of one build: every state entered and every step result.
///
/// The log is the only place that says how far a build got, since nothing
/// is rolled back when a later step fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildLog {
    pub execution_id: Uuid,
    pub language: Language,
    pub project_type: ProjectType,
    pub mode: Option<BuildMode>,
    pub workflow: Option<String>,
    pub target_path: Option<PathBuf>,
    /// Current state
    pub state: BuildState,
    /// Every state entered, in order
    pub history: Vec<BuildState>,
    /// Results from each step execution
    pub steps: Vec<StepResult>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Reason for cancel, abort or failure
    pub error: Option<String>,
}

impl BuildLog {
    /// Create a log in the `Start` state.
    pub fn new(language: Language, project_type: ProjectType) -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            language,
            project_type,
            mode: None,
            workflow: None,
            target_path: None,
            state: BuildState::Start,
            history: vec![BuildState::Start],
            steps: Vec::new(),
            started_at: Utc::now(),
            completed_at: None,
            error: None,
        }
    }

    /// Move to `next`, rejecting transitions the state machine forbids.
    pub fn advance(&mut self, next: BuildState) -> CoreResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        debug!("Build {}: {} -> {}", self.execution_id, self.state, next);
        self.state = next;
        self.history.push(next);
        if next.is_terminal() {
            self.completed_at = Some(Utc::now());
        }
        Ok(())
    }

    fn terminate(&mut self, state: BuildState, reason: impl Into<String>) -> CoreResult<()> {
        self.advance(state)?;
        self.error = Some(reason.into());
        Ok(())
    }

    /// The user declined the confirmation.
    pub fn cancel(&mut self) -> CoreResult<()> {
        self.terminate(BuildState::Canceled, "Operation canceled")
    }

    /// A precondition failed before any change was made.
    pub fn abort(&mut self, reason: impl Into<String>) -> CoreResult<()> {
        self.terminate(BuildState::Aborted, reason)
    }

    /// A step failed fatally.
    pub fn fail(&mut self, reason: impl Into<String>) -> CoreResult<()> {
        self.terminate(BuildState::Failed, reason)
    }

    pub fn record(&mut self, result: StepResult) {
        self.steps.push(result);
    }

    pub fn step(&self, name: &str) -> Option<&StepResult> {
        self.steps.iter().find(|s| s.step == name)
    }

    /// Names of steps that completed.
    pub fn completed_steps(&self) -> Vec<&str> {
        self.steps_with(StepOutcome::Completed)
    }

    /// Names of steps that failed, fatally or not.
    pub fn failed_steps(&self) -> Vec<&str> {
        self.steps_with(StepOutcome::Failed)
    }

    fn steps_with(&self, outcome: StepOutcome) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.outcome == outcome)
            .map(|s| s.step.as_str())
            .collect()
    }

    /// The build stopped with some steps already applied.
    pub fn is_partial(&self) -> bool {
        self.state == BuildState::Failed && !self.completed_steps().is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.state == BuildState::Done
    }
}

/// An ordered list of step names.
#[derive(Debug, Clone)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub steps: Vec<String>,
}

impl Workflow {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }
}

/// Predefined workflows.
pub struct Workflows;

impl Workflows {
    /// generate → install-extras → patch-manifest
    pub fn from_scratch() -> Workflow {
        Workflow::new("from-scratch", "Create From Scratch")
            .step(crate::steps::GENERATE)
            .step(crate::steps::INSTALL_EXTRAS)
            .step(crate::steps::PATCH_MANIFEST)
    }

    /// overlay-template → install-extras → patch-manifest
    pub fn enhance() -> Workflow {
        Workflow::new("enhance", "Enhance Existing")
            .step(crate::steps::OVERLAY_TEMPLATE)
            .step(crate::steps::INSTALL_EXTRAS)
            .step(crate::steps::PATCH_MANIFEST)
    }

    pub fn for_mode(mode: BuildMode) -> Workflow {
        match mode {
            BuildMode::FromScratch => Self::from_scratch(),
            BuildMode::Enhance => Self::enhance(),
        }
    }
}

/// Runs workflows step by step against a build log.
pub struct WorkflowExecutor {
    registry: Arc<StepRegistry>,
}

impl WorkflowExecutor {
    pub fn new(registry: Arc<StepRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Run every step of `workflow` in order, ending in `Done`.
    ///
    /// Non-fatal step failures are recorded and the workflow continues. A
    /// fatal error moves the log to `Failed` and is returned; the log keeps
    /// the results of the steps that ran before it.
    pub async fn run(
        &self,
        workflow: &Workflow,
        context: &mut BuildContext,
        log: &mut BuildLog,
    ) -> CoreResult<()> {
        info!("Starting workflow: {} ({})", workflow.name, workflow.id);
        log.workflow = Some(workflow.id.clone());

        let total = workflow.steps.len();
        for (i, name) in workflow.steps.iter().enumerate() {
            let step = match self.registry.get_required(name) {
                Ok(step) => step,
                Err(e) => {
                    error!("Step '{}' not found in registry", name);
                    log.fail(e.to_string())?;
                    return Err(e);
                }
            };

            if step.state() != log.state {
                log.advance(step.state())?;
            }

            if !step.should_run(context) {
                debug!("Skipping step '{}': nothing to do", name);
                log.record(StepResult::skipped(name, "nothing to do"));
                continue;
            }

            info!(
                "Executing step [{}/{}]: {} ({})",
                i + 1,
                total,
                name,
                step.description()
            );
            let started = Utc::now();

            match step.execute(context).await {
                Ok(result) => {
                    let result = result.started(started);
                    match result.outcome {
                        StepOutcome::Failed => warn!(
                            "Step '{}' failed, continuing: {}",
                            name,
                            result.message.as_deref().unwrap_or("no details")
                        ),
                        outcome => debug!("Step '{}' {}", name, outcome),
                    }
                    log.record(result);
                }
                Err(e) => {
                    error!("Step '{}' execution error: {}", name, e);
                    log.record(StepResult::failed(name, e.to_string()).started(started));
                    log.fail(e.to_string())?;
                    return Err(e);
                }
            }
        }

        log.advance(BuildState::Done)?;
        info!("Workflow '{}' finished", workflow.name);
        Ok(())
    }
}
