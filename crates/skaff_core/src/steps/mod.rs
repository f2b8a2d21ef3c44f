//! Step implementations for the project builder workflows.

pub mod generate;
pub mod install_extras;
pub mod overlay;
pub mod patch_manifest;

use std::sync::Arc;

use skaff_manifest::ManifestEnhancer;
use skaff_runner::{CommandRunner, DependencyInstaller};
use skaff_templates::TemplateStore;

use crate::registry::StepRegistry;

pub use generate::GenerateStep;
pub use install_extras::InstallExtrasStep;
pub use overlay::OverlayTemplateStep;
pub use patch_manifest::PatchManifestStep;

pub const GENERATE: &str = "generate";
pub const OVERLAY_TEMPLATE: &str = "overlay-template";
pub const INSTALL_EXTRAS: &str = "install-extras";
pub const PATCH_MANIFEST: &str = "patch-manifest";

/// Create a registry holding every builder step.
pub fn default_registry(
    store: Arc<TemplateStore>,
    enhancer: Arc<ManifestEnhancer>,
    runner: Arc<dyn CommandRunner>,
    installer: DependencyInstaller,
) -> StepRegistry {
    let mut registry = StepRegistry::new();
    registry.register(Arc::new(GenerateStep::new(runner)));
    registry.register(Arc::new(OverlayTemplateStep::new(store)));
    registry.register(Arc::new(InstallExtrasStep::new(installer)));
    registry.register(Arc::new(PatchManifestStep::new(enhancer)));
    registry
}
