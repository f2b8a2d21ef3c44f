//! List command - Show bundled templates and their generators.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use skaff_core::{generator_for, Language, ProjectType};
use skaff_templates::TemplateStore;

use crate::commands::Cli;
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TemplateEntry {
    language: String,
    project_type: String,
    /// Generator command line, if the pair can be created from scratch
    generator: Option<String>,
}

pub fn execute(cli: &Cli, args: &ListArgs) -> Result<()> {
    let settings = Settings::resolve(cli)?;
    let entries = template_entries(&settings.store)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No templates found in {}", settings.store.root().display());
        return Ok(());
    }

    println!("Templates in {}:", settings.store.root().display());
    for entry in &entries {
        let pair = format!("{}/{}", entry.language, entry.project_type);
        match &entry.generator {
            Some(generator) => println!("  {:<24} {}", pair, generator),
            None => println!("  {:<24} (enhance only)", pair),
        }
    }

    Ok(())
}

fn template_entries(store: &TemplateStore) -> Result<Vec<TemplateEntry>> {
    let keys = store.list().context("Failed to list templates")?;

    Ok(keys
        .into_iter()
        .map(|key| {
            let generator = generator_for(
                &Language::from_str(&key.language),
                &ProjectType::from_str(&key.kind),
            );
            TemplateEntry {
                generator: generator.map(|g| g.to_string()),
                language: key.language,
                project_type: key.kind,
            }
        })
        .collect())
}
