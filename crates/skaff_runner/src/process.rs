//! Process-backed command runner.

use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use tokio::process::Command;
use tracing::{debug, info};

use crate::command::CommandSpec;
use crate::error::{RunnerError, RunnerResult};
use crate::runner::{CommandRunner, ExecutionResult};

/// Runs commands as child processes sharing the tool's stdio.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the executable name for the host platform.
    ///
    /// Node tooling ships `.cmd` shims on Windows.
    fn program_name(program: &str) -> String {
        if cfg!(windows) && matches!(program, "npm" | "npx" | "yarn" | "pnpm") {
            format!("{}.cmd", program)
        } else {
            program.to_string()
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, spec: &CommandSpec) -> RunnerResult<ExecutionResult> {
        if !spec.workdir.is_dir() {
            return Err(RunnerError::MissingWorkdir(spec.workdir.clone()));
        }

        info!("Running: {}", spec);
        debug!("Working directory: {:?}", spec.workdir);

        let started_at = Utc::now();
        let start = Instant::now();

        let status = Command::new(Self::program_name(&spec.program))
            .args(&spec.args)
            .current_dir(&spec.workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => RunnerError::ProgramNotFound(spec.program.clone()),
                _ => RunnerError::SpawnFailed {
                    program: spec.program.clone(),
                    message: e.to_string(),
                },
            })?;

        let result = ExecutionResult {
            exit_code: status.code(),
            started_at,
            finished_at: Utc::now(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        debug!("{} finished with {}", spec.program, result.status_line());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_workdir() {
        let temp = tempdir().unwrap();
        let spec = CommandSpec::new("npm", temp.path().join("absent")).arg("--version");

        let err = ProcessRunner::new().run(&spec).await.unwrap_err();
        assert!(matches!(err, RunnerError::MissingWorkdir(_)));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let temp = tempdir().unwrap();
        let spec = CommandSpec::new("skaff-definitely-not-a-program", temp.path());

        let err = ProcessRunner::new().run(&spec).await.unwrap_err();
        assert!(matches!(err, RunnerError::ProgramNotFound(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_codes() {
        let temp = tempdir().unwrap();
        let runner = ProcessRunner::new();

        let ok = runner.run(&CommandSpec::new("true", temp.path())).await.unwrap();
        assert!(ok.success());

        let failed = runner.run(&CommandSpec::new("false", temp.path())).await.unwrap();
        assert!(!failed.success());
        assert_eq!(failed.exit_code, Some(1));
    }
}
