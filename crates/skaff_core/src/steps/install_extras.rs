//! Installs the extra packages implied by the chosen options.

use async_trait::async_trait;
use serde_json::json;
use skaff_runner::{DependencyInstaller, DependencyKind, InstallOutcome};

use super::INSTALL_EXTRAS;
use crate::context::BuildContext;
use crate::error::CoreResult;
use crate::state::BuildState;
use crate::step::{Step, StepResult};

/// Install failures are recorded in the result and never stop the build.
pub struct InstallExtrasStep {
    installer: DependencyInstaller,
}

impl InstallExtrasStep {
    pub fn new(installer: DependencyInstaller) -> Self {
        Self { installer }
    }
}

#[async_trait]
impl Step for InstallExtrasStep {
    fn name(&self) -> &str {
        INSTALL_EXTRAS
    }

    fn description(&self) -> &str {
        "Install UI library and routing packages"
    }

    fn state(&self) -> BuildState {
        BuildState::InstallExtras
    }

    fn should_run(&self, context: &BuildContext) -> bool {
        !context.extras.is_empty()
    }

    async fn execute(&self, context: &mut BuildContext) -> CoreResult<StepResult> {
        let outcome = self
            .installer
            .install(&context.extras, DependencyKind::Runtime, &context.target_path)
            .await;
        context.set_output("install", json!(outcome));

        match outcome {
            InstallOutcome::Failed(message) => Ok(StepResult::failed(INSTALL_EXTRAS, message)),
            _ => Ok(StepResult::completed(INSTALL_EXTRAS).with_message(format!(
                "{} packages with {}",
                context.extras.len(),
                self.installer.package_manager()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{BuildMode, BuildRequest};
    use crate::project::{Language, ProjectOptions, ProjectType, UiLibrary};
    use skaff_runner::{PackageManager, RecordingRunner};
    use std::sync::Arc;

    fn context(options: ProjectOptions) -> BuildContext {
        let request = BuildRequest::new(
            "/work/app",
            Language::JavaScript,
            ProjectType::React,
            BuildMode::Enhance,
        )
        .with_options(options);
        BuildContext::from_request(&request)
    }

    #[test]
    fn test_skipped_without_extras() {
        let step = InstallExtrasStep::new(DependencyInstaller::new(
            Arc::new(RecordingRunner::new()),
            PackageManager::Npm,
        ));
        assert!(!step.should_run(&context(ProjectOptions::default())));
        assert!(step.should_run(&context(ProjectOptions::new(UiLibrary::None, true))));
    }

    #[tokio::test]
    async fn test_single_install_call() {
        let runner = RecordingRunner::new();
        let step = InstallExtrasStep::new(DependencyInstaller::new(
            Arc::new(runner.clone()),
            PackageManager::Yarn,
        ));
        let mut ctx = context(ProjectOptions::new(UiLibrary::Bootstrap, true));

        let result = step.execute(&mut ctx).await.unwrap();
        assert!(result.is_completed());
        assert_eq!(result.message.as_deref(), Some("3 packages with yarn"));

        let lines: Vec<String> = runner.calls().iter().map(|c| c.display_line()).collect();
        assert_eq!(lines, vec!["yarn add bootstrap react-bootstrap react-router-dom"]);
    }

    #[tokio::test]
    async fn test_failure_is_recorded_not_raised() {
        let runner = RecordingRunner::new().fail_next(1);
        let step = InstallExtrasStep::new(DependencyInstaller::new(
            Arc::new(runner.clone()),
            PackageManager::Npm,
        ));
        let mut ctx = context(ProjectOptions::new(UiLibrary::MaterialUi, true));

        let result = step.execute(&mut ctx).await.unwrap();
        assert!(result.is_failed());
        assert_eq!(runner.call_count(), 1);
        assert_eq!(ctx.outputs["install"]["status"], serde_json::json!("failed"));
    }
}
