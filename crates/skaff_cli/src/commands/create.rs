//! Create command - Build or enhance a project interactively.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use skaff_core::{
    BuildFailure, BuildLog, BuildMode, BuildState, Language, ProjectBuilder, ProjectType,
    StepOutcome,
};
use skaff_runner::ProcessRunner;

use crate::commands::Cli;
use crate::interactive::{run_interactive, DialoguerPrompter, Interaction};
use crate::settings::{working_dir, Settings};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project language (javascript, typescript)
    pub language: String,

    /// Project type (react, next, vue, node)
    #[arg(value_name = "TYPE")]
    pub project_type: String,
}

pub async fn execute(cli: &Cli, args: &CreateArgs) -> Result<()> {
    let settings = Settings::resolve(cli)?;
    let language = Language::from_str(&args.language);
    let project_type = ProjectType::from_str(&args.project_type);
    info!("Create {} project in {}", project_type, language);

    let builder = ProjectBuilder::new(
        settings.store,
        settings.enhancer,
        Arc::new(ProcessRunner::new()),
        settings.package_manager,
    );
    let cwd = working_dir()?;

    match run_interactive(&mut DialoguerPrompter, &builder, language, project_type, &cwd).await {
        Ok(Interaction::Canceled(_)) => Ok(()),
        Ok(Interaction::Built(log)) => {
            print_summary(&log);
            Ok(())
        }
        Err(e) => {
            if let Some(failure) = e.downcast_ref::<BuildFailure>() {
                print_summary(&failure.log);
            }
            Err(e.context("Build failed"))
        }
    }
}

fn print_summary(log: &BuildLog) {
    for line in summary_lines(log) {
        println!("{}", line);
    }
}

/// Console report for a finished build log.
fn summary_lines(log: &BuildLog) -> Vec<String> {
    let mut lines = Vec::new();
    let target = log
        .target_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let reason = log.error.as_deref().unwrap_or("unknown reason");

    match log.state {
        BuildState::Done => {
            let verb = match log.mode {
                Some(BuildMode::Enhance) => "Enhanced",
                _ => "Created",
            };
            lines.push(format!(
                "✅ {} {} project in {} at {}",
                verb, log.project_type, log.language, target
            ));
        }
        BuildState::Aborted => lines.push(format!("⚠️  Nothing was changed: {}", reason)),
        BuildState::Failed => lines.push(format!("❌ Build stopped: {}", reason)),
        BuildState::Canceled => lines.push("Operation canceled.".to_string()),
        _ => {}
    }

    if !log.steps.is_empty() {
        lines.push(String::new());
        lines.push("Steps:".to_string());
        for step in &log.steps {
            let icon = match step.outcome {
                StepOutcome::Completed => "✓",
                StepOutcome::Skipped => "-",
                StepOutcome::Failed => "✗",
            };
            match &step.message {
                Some(message) => lines.push(format!("  {} {:<17} {}", icon, step.step, message)),
                None => lines.push(format!("  {} {}", icon, step.step)),
            }
        }
    }

    if log.is_partial() {
        lines.push(String::new());
        lines.push("Completed steps were not rolled back.".to_string());
    }

    if log.state == BuildState::Done && log.mode == Some(BuildMode::FromScratch) {
        lines.push(String::new());
        lines.push("Next steps:".to_string());
        lines.push(format!("  cd {}", target));
    }

    lines
}
