//! Interactive prompt sequence for `skaff create`.

use std::path::Path;

use anyhow::Result;
use skaff_core::{
    is_valid_project_name, BuildLog, BuildMode, BuildRequest, Language, ProjectBuilder,
    ProjectOptions, ProjectType, UiLibrary,
};

/// Source of answers for the create prompts.
pub trait Prompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Returns the index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    fn input(&mut self, prompt: &str, default: &str) -> Result<String>;
}

/// Terminal prompts.
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Ok(dialoguer::Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn input(&mut self, prompt: &str, default: &str) -> Result<String> {
        Ok(dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .validate_with(|name: &String| -> std::result::Result<(), String> {
                if is_valid_project_name(name) {
                    Ok(())
                } else {
                    Err("use letters, digits, '-', '_' or '.'".to_string())
                }
            })
            .interact_text()?)
    }
}

/// How an interactive run ended, short of an error.
#[derive(Debug)]
pub enum Interaction {
    /// The user declined the confirmation.
    Canceled(BuildLog),
    /// The builder ran; the log is in `Done` or `Aborted`.
    Built(BuildLog),
}

/// Ask the create questions, then run the build.
///
/// Fatal build errors come back as a [`skaff_core::BuildFailure`] carrying the partial
/// log; prompt errors are returned as-is.
pub async fn run_interactive(
    prompter: &mut dyn Prompter,
    builder: &ProjectBuilder,
    language: Language,
    project_type: ProjectType,
    working_dir: &Path,
) -> Result<Interaction> {
    let log = builder.begin(language.clone(), project_type.clone())?;

    let question = format!(
        "Are you sure you want to create a {} project in {}?",
        project_type, language
    );
    if !prompter.confirm(&question, true)? {
        println!("Operation canceled.");
        return Ok(Interaction::Canceled(builder.cancel(log)?));
    }

    let modes = [BuildMode::FromScratch, BuildMode::Enhance];
    let labels: Vec<String> = modes.iter().map(|m| m.label().to_string()).collect();
    let mode = modes[prompter.select("What would you like to do?", &labels, 0)?];

    let mut request = BuildRequest::new(working_dir, language, project_type.clone(), mode);

    if mode == BuildMode::FromScratch {
        let name = prompter.input("Project name", &project_type.default_project_name())?;
        request = request.with_project_name(name.trim());
    }

    let applicable = project_type.applicable_options();
    let mut options = ProjectOptions::default();
    if applicable.ui_library {
        let libraries = UiLibrary::all();
        let labels: Vec<String> = libraries.iter().map(|l| l.label().to_string()).collect();
        options.ui_library = libraries[prompter.select("Choose a UI library", &labels, 0)?];
    }
    if applicable.routing {
        options.use_routing = prompter.confirm("Do you want to add routing?", false)?;
    }
    request = request.with_options(options);

    let log = builder.build(&request, log).await?;
    Ok(Interaction::Built(log))
}
