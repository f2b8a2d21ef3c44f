//! External project generators (framework starter kits).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::command::CommandSpec;

/// Placeholder replaced by the project name in generator arguments.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// A starter-kit invocation such as `npx create-react-app {name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generator {
    pub program: String,
    pub args: Vec<String>,
}

impl Generator {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Build the command creating `project_name` inside `workdir`.
    pub fn command(&self, project_name: &str, workdir: &Path) -> CommandSpec {
        CommandSpec::new(&self.program, workdir).args(
            self.args
                .iter()
                .map(|a| a.replace(NAME_PLACEHOLDER, project_name)),
        )
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.program, self.args.join(" "))
    }
}
