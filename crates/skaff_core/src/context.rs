//! Build request and the context shared by steps.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::project::{Language, ProjectOptions, ProjectType};
use crate::state::BuildState;

/// How the project is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildMode {
    /// Run an external generator into a new directory.
    FromScratch,
    /// Overlay the bundled template onto an existing directory.
    Enhance,
}

impl BuildMode {
    /// Builder state the mode enters after confirmation.
    pub fn state(&self) -> BuildState {
        match self {
            Self::FromScratch => BuildState::FromScratch,
            Self::Enhance => BuildState::Enhance,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FromScratch => "Create a new project from scratch",
            Self::Enhance => "Enhance the current directory",
        }
    }
}

/// Everything the user decided for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRequest {
    /// Directory the tool was started in
    pub working_dir: PathBuf,
    pub language: Language,
    pub project_type: ProjectType,
    pub mode: BuildMode,
    /// Directory name created by the generator (from-scratch only)
    pub project_name: Option<String>,
    pub options: ProjectOptions,
}

impl BuildRequest {
    pub fn new(
        working_dir: impl Into<PathBuf>,
        language: Language,
        project_type: ProjectType,
        mode: BuildMode,
    ) -> Self {
        Self {
            working_dir: working_dir.into(),
            language,
            project_type,
            mode,
            project_name: None,
            options: ProjectOptions::default(),
        }
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn with_options(mut self, options: ProjectOptions) -> Self {
        self.options = options;
        self
    }

    /// Project name, falling back to the type's default.
    pub fn project_name(&self) -> String {
        self.project_name
            .clone()
            .unwrap_or_else(|| self.project_type.default_project_name())
    }

    /// Directory the build writes into.
    pub fn target_path(&self) -> PathBuf {
        match self.mode {
            BuildMode::FromScratch => self.working_dir.join(self.project_name()),
            BuildMode::Enhance => self.working_dir.clone(),
        }
    }
}

/// Mutable state threaded through the steps of one build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildContext {
    /// Unique execution ID
    pub execution_id: Uuid,
    pub working_dir: PathBuf,
    pub target_path: PathBuf,
    pub project_name: String,
    pub language: Language,
    pub project_type: ProjectType,
    pub mode: BuildMode,
    pub options: ProjectOptions,
    /// Runtime packages the install step adds
    pub extras: Vec<String>,
    /// Output data from steps
    pub outputs: HashMap<String, serde_json::Value>,
}

impl BuildContext {
    pub fn from_request(request: &BuildRequest) -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            working_dir: request.working_dir.clone(),
            target_path: request.target_path(),
            project_name: request.project_name(),
            language: request.language.clone(),
            project_type: request.project_type.clone(),
            mode: request.mode,
            options: request.options,
            extras: request.options.extra_dependencies(&request.project_type),
            outputs: HashMap::new(),
        }
    }

    /// Set an output value (used by steps).
    pub fn set_output(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.outputs.insert(key.into(), value);
    }

    /// Get an output value.
    pub fn get_output<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.outputs
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
