//! # skaff_core
//!
//! Project builder for skaff.
//!
//! A build moves through an explicit state machine:
//!
//! - **Confirm**: the frontend opens a log with [`ProjectBuilder::begin`] and
//!   either cancels it or passes it to [`ProjectBuilder::build`]
//! - **Preflight**: path and catalog checks that abort before any change
//! - **Workflow**: named steps run in order by the [`WorkflowExecutor`]
//! - **Log**: every state and step result lands in the [`BuildLog`]
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use skaff_core::{BuildMode, BuildRequest, Language, ProjectBuilder, ProjectType};
//!
//! let builder = ProjectBuilder::new(store, enhancer, runner, PackageManager::Npm);
//! let log = builder.begin(Language::JavaScript, ProjectType::React)?;
//! let request = BuildRequest::new(cwd, Language::JavaScript, ProjectType::React, BuildMode::Enhance);
//! let log = builder.build(&request, log).await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod executor;
pub mod project;
pub mod registry;
pub mod state;
pub mod step;
pub mod steps;

pub use builder::{is_valid_project_name, ProjectBuilder};
pub use context::{BuildContext, BuildMode, BuildRequest};
pub use error::{BuildFailure, CoreError, CoreResult};
pub use executor::{BuildLog, Workflow, WorkflowExecutor, Workflows};
pub use project::{
    generator_for, ApplicableOptions, Language, ProjectOptions, ProjectType, UiLibrary,
    ROUTER_PACKAGE,
};
pub use registry::StepRegistry;
pub use state::BuildState;
pub use step::{Step, StepOutcome, StepResult};
pub use steps::default_registry;
