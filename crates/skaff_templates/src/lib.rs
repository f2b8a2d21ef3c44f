//! # skaff_templates
//!
//! Bundled template store for skaff.
//!
//! Templates are plain directory trees keyed by `(language, kind)` and laid
//! out as `<root>/<language>/<kind>/`. Copying a template overlays the whole
//! tree onto a destination directory.
//!
//! ## Example
//!
//! ```rust,no_run
//! use skaff_templates::{copy_template, TemplateStore};
//! use std::path::Path;
//!
//! let store = TemplateStore::bundled();
//! let report = copy_template(&store, "javascript", "react", Path::new(".")).unwrap();
//! println!("copied {} files", report.files);
//! ```

pub mod copier;
pub mod error;
pub mod store;

pub use copier::{copy_template, CopyReport};
pub use error::{TemplateError, TemplateResult};
pub use store::{Template, TemplateKey, TemplateStore, TEMPLATES_DIR};
