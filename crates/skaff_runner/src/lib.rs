//! # skaff_runner
//!
//! External process execution for skaff.
//!
//! Everything skaff shells out to goes through the [`CommandRunner`] trait:
//!
//! - **Package managers**: npm, yarn and pnpm install commands
//! - **Generators**: framework starter kits such as `create-react-app`
//! - **Process runner**: runs children with inherited stdio
//! - **Recording runner**: captures commands for tests
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use skaff_runner::{DependencyInstaller, DependencyKind, PackageManager, ProcessRunner};
//!
//! #[tokio::main]
//! async fn main() {
//!     let installer = DependencyInstaller::new(Arc::new(ProcessRunner::new()), PackageManager::Npm);
//!     let outcome = installer
//!         .install(&["axios".to_string()], DependencyKind::Runtime, Path::new("./my-app"))
//!         .await;
//!     println!("{:?}", outcome);
//! }
//! ```

pub mod command;
pub mod error;
pub mod generator;
pub mod installer;
pub mod package_manager;
pub mod process;
pub mod recording;
pub mod runner;

pub use command::CommandSpec;
pub use error::{RunnerError, RunnerResult};
pub use generator::{Generator, NAME_PLACEHOLDER};
pub use installer::{DependencyInstaller, InstallOutcome};
pub use package_manager::{DependencyKind, PackageManager};
pub use process::ProcessRunner;
pub use recording::{RecordedResponse, RecordingRunner, RunHook};
pub use runner::{CommandRunner, ExecutionResult};
