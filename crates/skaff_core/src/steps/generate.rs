//! Runs the framework generator for a from-scratch build.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use skaff_runner::CommandRunner;
use tracing::{error, info};

use super::GENERATE;
use crate::context::BuildContext;
use crate::error::CoreResult;
use crate::project::generator_for;
use crate::state::BuildState;
use crate::step::{Step, StepResult};

/// Invokes the starter kit for the project's (language, type) pair in the
/// working directory. A failing generator does not stop the build.
pub struct GenerateStep {
    runner: Arc<dyn CommandRunner>,
}

impl GenerateStep {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl Step for GenerateStep {
    fn name(&self) -> &str {
        GENERATE
    }

    fn description(&self) -> &str {
        "Run the framework generator"
    }

    fn state(&self) -> BuildState {
        BuildState::FromScratch
    }

    async fn execute(&self, context: &mut BuildContext) -> CoreResult<StepResult> {
        let Some(generator) = generator_for(&context.language, &context.project_type) else {
            return Ok(StepResult::skipped(
                GENERATE,
                format!(
                    "no generator for {}/{}",
                    context.language, context.project_type
                ),
            ));
        };

        let spec = generator.command(&context.project_name, &context.working_dir);
        info!("Creating {} project: {}", context.project_type, spec);
        context.set_output("generator", json!(spec.display_line()));

        match self.runner.run(&spec).await {
            Ok(result) if result.success() => Ok(StepResult::completed(GENERATE)
                .with_message(format!("created {}", context.project_name))),
            Ok(result) => {
                let message = format!("`{}` failed with {}", spec, result.status_line());
                error!("Error creating project: {}", message);
                Ok(StepResult::failed(GENERATE, message))
            }
            Err(e) => {
                let message = format!("`{}` could not be run: {}", spec, e);
                error!("Error creating project: {}", message);
                Ok(StepResult::failed(GENERATE, message))
            }
        }
    }
}
