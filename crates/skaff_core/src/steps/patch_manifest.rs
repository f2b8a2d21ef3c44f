//! Merges the enhancement defaults into the project's package.json.

use std::sync::Arc;

use async_trait::async_trait;
use skaff_manifest::{EnhanceOutcome, ManifestEnhancer};

use super::PATCH_MANIFEST;
use crate::context::BuildContext;
use crate::error::CoreResult;
use crate::state::BuildState;
use crate::step::{Step, StepResult};

pub struct PatchManifestStep {
    enhancer: Arc<ManifestEnhancer>,
}

impl PatchManifestStep {
    pub fn new(enhancer: Arc<ManifestEnhancer>) -> Self {
        Self { enhancer }
    }
}

#[async_trait]
impl Step for PatchManifestStep {
    fn name(&self) -> &str {
        PATCH_MANIFEST
    }

    fn description(&self) -> &str {
        "Add lint and format scripts and pinned dependencies"
    }

    fn state(&self) -> BuildState {
        BuildState::ManifestPatch
    }

    async fn execute(&self, context: &mut BuildContext) -> CoreResult<StepResult> {
        let result = match self.enhancer.enhance(&context.target_path)? {
            EnhanceOutcome::Missing(path) => {
                StepResult::skipped(PATCH_MANIFEST, format!("no manifest at {}", path.display()))
            }
            EnhanceOutcome::Unchanged(path) => StepResult::completed(PATCH_MANIFEST)
                .with_message(format!("{} already up to date", path.display())),
            EnhanceOutcome::Updated(path) => StepResult::completed(PATCH_MANIFEST)
                .with_message(format!("updated {}", path.display())),
        };
        Ok(result)
    }
}
