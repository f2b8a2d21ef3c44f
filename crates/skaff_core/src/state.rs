//! Builder state machine.
//!
//! ```text
//! Start -> ConfirmChoice -> FromScratch | Enhance -> InstallExtras -> ManifestPatch -> Done
//!              |                  |
//!              v                  v
//!           Canceled           Aborted
//! ```
//!
//! `Failed` is reachable from every working state.

use serde::{Deserialize, Serialize};

/// State of a project build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildState {
    Start,
    ConfirmChoice,
    FromScratch,
    Enhance,
    InstallExtras,
    ManifestPatch,
    Done,
    /// The user declined the confirmation.
    Canceled,
    /// A path precondition failed before anything was changed.
    Aborted,
    /// A step failed fatally; earlier steps remain applied.
    Failed,
}

impl BuildState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::ConfirmChoice => "confirm_choice",
            Self::FromScratch => "from_scratch",
            Self::Enhance => "enhance",
            Self::InstallExtras => "install_extras",
            Self::ManifestPatch => "manifest_patch",
            Self::Done => "done",
            Self::Canceled => "canceled",
            Self::Aborted => "aborted",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Done | Self::Canceled | Self::Aborted | Self::Failed
        )
    }

    /// Whether the machine may move from `self` to `next`.
    pub fn can_transition_to(&self, next: BuildState) -> bool {
        use BuildState::*;

        match (self, next) {
            (Start, ConfirmChoice) => true,
            (ConfirmChoice, FromScratch | Enhance | Canceled) => true,
            (FromScratch | Enhance, InstallExtras | Aborted | Failed) => true,
            (InstallExtras, ManifestPatch | Failed) => true,
            (ManifestPatch, Done | Failed) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for BuildState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
