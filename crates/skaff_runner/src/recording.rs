//! Recording command runner for testing.
//!
//! Captures every command it is asked to run and answers with predefined
//! exit codes, so workflows can be exercised without spawning npm or npx.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::command::CommandSpec;
use crate::error::{RunnerError, RunnerResult};
use crate::runner::{CommandRunner, ExecutionResult};

/// Side effect invoked for each command, e.g. to fake generator output.
pub type RunHook = Arc<dyn Fn(&CommandSpec) + Send + Sync>;

/// Predefined answer for a `run` call.
#[derive(Debug, Clone)]
pub enum RecordedResponse {
    Exit(i32),
    SpawnError(String),
}

/// Runner that records commands instead of executing them.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<RwLock<Vec<CommandSpec>>>,
    responses: Arc<RwLock<VecDeque<RecordedResponse>>>,
    hook: Option<RunHook>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next call. Calls beyond the queue exit 0.
    pub fn respond(self, response: RecordedResponse) -> Self {
        self.responses.write().push_back(response);
        self
    }

    /// Queue a non-zero exit for the next call.
    pub fn fail_next(self, exit_code: i32) -> Self {
        self.respond(RecordedResponse::Exit(exit_code))
    }

    pub fn with_hook(mut self, hook: RunHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// All captured commands, in call order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.read().clone()
    }

    /// Captured commands for one program.
    pub fn calls_to(&self, program: &str) -> Vec<CommandSpec> {
        self.calls
            .read()
            .iter()
            .filter(|c| c.program == program)
            .cloned()
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().len()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, spec: &CommandSpec) -> RunnerResult<ExecutionResult> {
        self.calls.write().push(spec.clone());

        let response = self
            .responses
            .write()
            .pop_front()
            .unwrap_or(RecordedResponse::Exit(0));

        let exit_code = match response {
            RecordedResponse::Exit(code) => code,
            RecordedResponse::SpawnError(message) => {
                return Err(RunnerError::SpawnFailed {
                    program: spec.program.clone(),
                    message,
                });
            }
        };

        if let Some(hook) = &self.hook {
            hook(spec);
        }

        let now = Utc::now();
        Ok(ExecutionResult {
            exit_code: Some(exit_code),
            started_at: now,
            finished_at: now,
            duration_ms: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_records_calls_and_responses() {
        let runner = RecordingRunner::new().fail_next(2);
        let spec = CommandSpec::new("npm", "/tmp").arg("install");

        let first = runner.run(&spec).await.unwrap();
        let second = runner.run(&spec).await.unwrap();

        assert_eq!(first.exit_code, Some(2));
        assert!(second.success());
        assert_eq!(runner.call_count(), 2);
        assert_eq!(runner.calls_to("npm").len(), 2);
        assert!(runner.calls_to("npx").is_empty());
    }

    #[tokio::test]
    async fn test_spawn_error_skips_hook() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let runner = RecordingRunner::new()
            .respond(RecordedResponse::SpawnError("boom".to_string()))
            .with_hook(Arc::new(move |_: &CommandSpec| {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        let spec = CommandSpec::new("npx", "/tmp");

        assert!(runner.run(&spec).await.is_err());
        assert!(runner.run(&spec).await.is_ok());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
