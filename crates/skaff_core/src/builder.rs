//! Project builder: drives one build through the state machine.

use std::sync::Arc;

use skaff_manifest::ManifestEnhancer;
use skaff_runner::{CommandRunner, DependencyInstaller, PackageManager};
use skaff_templates::TemplateStore;
use tracing::{info, warn};

use crate::context::{BuildContext, BuildMode, BuildRequest};
use crate::error::{BuildFailure, CoreResult};
use crate::executor::{BuildLog, WorkflowExecutor, Workflows};
use crate::project::{generator_for, Language, ProjectType};
use crate::steps::default_registry;

/// Check a directory name for a new project.
///
/// Names are limited to ASCII letters, digits, `-`, `_` and `.`, and may
/// not start with `-` or `.`.
pub fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !name.starts_with(['-', '.'])
}

/// Builds projects from requests collected by the frontend.
pub struct ProjectBuilder {
    store: Arc<TemplateStore>,
    executor: WorkflowExecutor,
}

impl ProjectBuilder {
    pub fn new(
        store: Arc<TemplateStore>,
        enhancer: Arc<ManifestEnhancer>,
        runner: Arc<dyn CommandRunner>,
        package_manager: PackageManager,
    ) -> Self {
        let installer = DependencyInstaller::new(runner.clone(), package_manager);
        let registry = default_registry(store.clone(), enhancer, runner, installer);
        Self {
            store,
            executor: WorkflowExecutor::new(Arc::new(registry)),
        }
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Open a build log waiting for the user's confirmation.
    pub fn begin(&self, language: Language, project_type: ProjectType) -> CoreResult<BuildLog> {
        let mut log = BuildLog::new(language, project_type);
        log.advance(crate::state::BuildState::ConfirmChoice)?;
        Ok(log)
    }

    /// The user declined; nothing is touched.
    pub fn cancel(&self, mut log: BuildLog) -> CoreResult<BuildLog> {
        log.cancel()?;
        info!("Build {} canceled", log.execution_id);
        Ok(log)
    }

    /// Run the build described by `request`.
    ///
    /// A failed precondition ends the log in `Aborted` and is not an error.
    /// A fatal step error is returned together with the partial log.
    pub async fn build(
        &self,
        request: &BuildRequest,
        mut log: BuildLog,
    ) -> Result<BuildLog, BuildFailure> {
        log.mode = Some(request.mode);
        log.target_path = Some(request.target_path());

        if let Err(e) = log.advance(request.mode.state()) {
            return Err(BuildFailure::new(log, e));
        }

        if let Some(reason) = self.preflight(request) {
            warn!("Build aborted: {}", reason);
            return match log.abort(reason) {
                Ok(()) => Ok(log),
                Err(e) => Err(BuildFailure::new(log, e)),
            };
        }

        let workflow = Workflows::for_mode(request.mode);
        let mut context = BuildContext::from_request(request);
        context.execution_id = log.execution_id;

        match self.executor.run(&workflow, &mut context, &mut log).await {
            Ok(()) => Ok(log),
            Err(e) => Err(BuildFailure::new(log, e)),
        }
    }

    /// Reason the request cannot start, if any. Runs before any change.
    fn preflight(&self, request: &BuildRequest) -> Option<String> {
        let language = &request.language;
        let project_type = &request.project_type;

        match request.mode {
            BuildMode::Enhance => {
                if !self.store.exists(language.as_str(), project_type.as_str()) {
                    return Some(format!("Template not found: {}/{}", language, project_type));
                }
                if !request.working_dir.is_dir() {
                    return Some(format!(
                        "Directory {} does not exist",
                        request.working_dir.display()
                    ));
                }
            }
            BuildMode::FromScratch => {
                let name = request.project_name();
                if !is_valid_project_name(&name) {
                    return Some(format!("Invalid project name: {:?}", name));
                }
                let target = request.target_path();
                if target.exists() {
                    return Some(format!("Directory {} already exists", target.display()));
                }
                if generator_for(language, project_type).is_none() {
                    return Some(format!(
                        "No generator for {} projects in {}",
                        project_type, language
                    ));
                }
            }
        }
        None
    }
}

impl std::fmt::Debug for ProjectBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectBuilder")
            .field("store", &self.store)
            .field("registry", self.executor.registry())
            .finish()
    }
}
