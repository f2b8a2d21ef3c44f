//! Overlays the bundled template onto the target directory.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use skaff_templates::{copy_template, TemplateStore};
use tracing::info;

use super::OVERLAY_TEMPLATE;
use crate::context::BuildContext;
use crate::error::CoreResult;
use crate::state::BuildState;
use crate::step::{Step, StepResult};

pub struct OverlayTemplateStep {
    store: Arc<TemplateStore>,
}

impl OverlayTemplateStep {
    pub fn new(store: Arc<TemplateStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Step for OverlayTemplateStep {
    fn name(&self) -> &str {
        OVERLAY_TEMPLATE
    }

    fn description(&self) -> &str {
        "Copy the bundled template over the project"
    }

    fn state(&self) -> BuildState {
        BuildState::Enhance
    }

    /// Copy errors are fatal; files copied before the error stay in place.
    async fn execute(&self, context: &mut BuildContext) -> CoreResult<StepResult> {
        let report = copy_template(
            &self.store,
            context.language.as_str(),
            context.project_type.as_str(),
            &context.target_path,
        )?;

        info!(
            "Enhanced {:?} with template {} ({} files)",
            report.destination, report.key, report.files
        );
        context.set_output("template_files", json!(report.files));

        Ok(StepResult::completed(OVERLAY_TEMPLATE)
            .with_message(format!("{} files from {}", report.files, report.key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{BuildMode, BuildRequest};
    use crate::error::CoreError;
    use crate::project::{Language, ProjectType};
    use std::fs;
    use tempfile::TempDir;

    fn store_with_react() -> (TempDir, Arc<TemplateStore>) {
        let root = TempDir::new().unwrap();
        let template = root.path().join("javascript/react/src");
        fs::create_dir_all(&template).unwrap();
        fs::write(template.join("App.js"), "export default 1;\n").unwrap();
        fs::write(root.path().join("javascript/react/.prettierrc"), "{}\n").unwrap();
        let store = Arc::new(TemplateStore::new(root.path()));
        (root, store)
    }

    #[tokio::test]
    async fn test_overlays_onto_target() {
        let (_root, store) = store_with_react();
        let target = TempDir::new().unwrap();
        fs::create_dir_all(target.path().join("src")).unwrap();
        fs::write(target.path().join("src/App.js"), "old").unwrap();

        let request = BuildRequest::new(
            target.path(),
            Language::JavaScript,
            ProjectType::React,
            BuildMode::Enhance,
        );
        let mut ctx = BuildContext::from_request(&request);

        let result = OverlayTemplateStep::new(store).execute(&mut ctx).await.unwrap();
        assert!(result.is_completed());
        assert_eq!(
            fs::read_to_string(target.path().join("src/App.js")).unwrap(),
            "export default 1;\n"
        );
        assert!(target.path().join(".prettierrc").is_file());
        assert_eq!(ctx.get_output::<usize>("template_files"), Some(2));
    }

    #[tokio::test]
    async fn test_missing_template_is_an_error() {
        let (_root, store) = store_with_react();
        let target = TempDir::new().unwrap();
        let request = BuildRequest::new(
            target.path(),
            Language::TypeScript,
            ProjectType::Vue,
            BuildMode::Enhance,
        );
        let mut ctx = BuildContext::from_request(&request);

        let result = OverlayTemplateStep::new(store).execute(&mut ctx).await;
        assert!(matches!(result, Err(CoreError::Template(_))));
    }
}
