//! Dependency installation through the configured package manager.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::package_manager::{DependencyKind, PackageManager};
use crate::runner::CommandRunner;

/// Result of an install request.
///
/// Failures are reported here rather than as errors: a failed install does
/// not stop the surrounding workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum InstallOutcome {
    /// Empty package list, nothing was run.
    Skipped,
    /// Package manager exited successfully.
    Installed(Vec<String>),
    /// Package manager could not be run or exited non-zero.
    Failed(String),
}

impl InstallOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Installs packages by invoking the package manager once per request.
#[derive(Clone)]
pub struct DependencyInstaller {
    runner: Arc<dyn CommandRunner>,
    package_manager: PackageManager,
}

impl DependencyInstaller {
    pub fn new(runner: Arc<dyn CommandRunner>, package_manager: PackageManager) -> Self {
        Self {
            runner,
            package_manager,
        }
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    /// Install `packages` in `project_path`, batched into one invocation.
    pub async fn install(
        &self,
        packages: &[String],
        kind: DependencyKind,
        project_path: &Path,
    ) -> InstallOutcome {
        if packages.is_empty() {
            return InstallOutcome::Skipped;
        }

        info!(
            "Installing {} {} dependencies with {}: {}",
            packages.len(),
            kind,
            self.package_manager,
            packages.join(", ")
        );

        let spec = self
            .package_manager
            .install_command(packages, kind, project_path);

        match self.runner.run(&spec).await {
            Ok(result) if result.success() => InstallOutcome::Installed(packages.to_vec()),
            Ok(result) => {
                let message = format!("`{}` failed with {}", spec, result.status_line());
                error!("Error installing {} dependencies: {}", kind, message);
                InstallOutcome::Failed(message)
            }
            Err(e) => {
                let message = format!("`{}` could not be run: {}", spec, e);
                error!("Error installing {} dependencies: {}", kind, message);
                InstallOutcome::Failed(message)
            }
        }
    }
}

impl std::fmt::Debug for DependencyInstaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyInstaller")
            .field("package_manager", &self.package_manager)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunnerError;
    use crate::runner::{ExecutionResult, MockCommandRunner};
    use chrono::Utc;

    fn exit(code: i32) -> ExecutionResult {
        let now = Utc::now();
        ExecutionResult {
            exit_code: Some(code),
            started_at: now,
            finished_at: now,
            duration_ms: 1,
        }
    }

    #[tokio::test]
    async fn test_empty_list_runs_nothing() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run().never();

        let installer = DependencyInstaller::new(Arc::new(mock), PackageManager::Npm);
        let outcome = installer
            .install(&[], DependencyKind::Runtime, Path::new("/app"))
            .await;
        assert_eq!(outcome, InstallOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_batches_packages_into_one_call() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .times(1)
            .withf(|spec| {
                spec.program == "npm"
                    && spec.args == ["install", "bootstrap", "react-bootstrap", "--save"]
                    && spec.workdir == Path::new("/app")
            })
            .returning(|_| Ok(exit(0)));

        let installer = DependencyInstaller::new(Arc::new(mock), PackageManager::Npm);
        let packages = vec!["bootstrap".to_string(), "react-bootstrap".to_string()];
        let outcome = installer
            .install(&packages, DependencyKind::Runtime, Path::new("/app"))
            .await;
        assert_eq!(outcome, InstallOutcome::Installed(packages));
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_reported() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run().times(1).returning(|_| Ok(exit(1)));

        let installer = DependencyInstaller::new(Arc::new(mock), PackageManager::Npm);
        let outcome = installer
            .install(&["eslint".to_string()], DependencyKind::Dev, Path::new("/app"))
            .await;
        assert!(outcome.is_failure());
    }

    #[tokio::test]
    async fn test_spawn_error_is_reported() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run()
            .times(1)
            .returning(|_| Err(RunnerError::ProgramNotFound("yarn".to_string())));

        let installer = DependencyInstaller::new(Arc::new(mock), PackageManager::Yarn);
        let outcome = installer
            .install(&["axios".to_string()], DependencyKind::Runtime, Path::new("/app"))
            .await;
        match outcome {
            InstallOutcome::Failed(message) => assert!(message.contains("Program not found")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
