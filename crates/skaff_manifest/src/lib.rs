//! # skaff_manifest
//!
//! Reads a project's `package.json`, overlays a fixed set of scripts and
//! dependency pins, and writes it back with stable formatting.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use skaff_manifest::{EnhancementDefaults, ManifestEnhancer};
//!
//! let enhancer = ManifestEnhancer::new(Arc::new(EnhancementDefaults::builtin()));
//! enhancer.enhance(Path::new("./my-app")).unwrap();
//! ```

pub mod defaults;
pub mod enhancer;
pub mod error;
pub mod manifest;

pub use defaults::EnhancementDefaults;
pub use enhancer::{EnhanceOutcome, ManifestEnhancer};
pub use error::{ManifestError, ManifestResult};
pub use manifest::{PackageManifest, MANIFEST_FILE};
