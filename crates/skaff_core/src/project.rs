//! Project model: languages, project types and per-run options.
//!
//! Project types form a closed set, each carrying the options it offers, so
//! prompts and dependency accounting never compare raw type names.

use serde::{Deserialize, Serialize};
use skaff_runner::Generator;

/// Source language of the project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    JavaScript,
    TypeScript,
    Custom(String),
}

impl Language {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "javascript" | "js" => Self::JavaScript,
            "typescript" | "ts" => Self::TypeScript,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Custom(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which optional prompts apply to a project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicableOptions {
    pub ui_library: bool,
    pub routing: bool,
}

/// Kind of project to scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    React,
    Next,
    Vue,
    Node,
    Custom(String),
}

impl ProjectType {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "react" => Self::React,
            "next" | "nextjs" => Self::Next,
            "vue" => Self::Vue,
            "node" | "express" => Self::Node,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::React => "react",
            Self::Next => "next",
            Self::Vue => "vue",
            Self::Node => "node",
            Self::Custom(s) => s.as_str(),
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::React, Self::Next, Self::Vue, Self::Node]
    }

    /// Options the user may choose for this type.
    pub fn applicable_options(&self) -> ApplicableOptions {
        match self {
            Self::React => ApplicableOptions {
                ui_library: true,
                routing: true,
            },
            Self::Next => ApplicableOptions {
                ui_library: true,
                routing: false,
            },
            Self::Vue | Self::Node | Self::Custom(_) => ApplicableOptions::default(),
        }
    }

    pub fn default_project_name(&self) -> String {
        format!("my-{}-app", self.as_str())
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Component library added to the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiLibrary {
    #[default]
    None,
    MaterialUi,
    Bootstrap,
}

impl UiLibrary {
    pub fn all() -> [Self; 3] {
        [Self::None, Self::MaterialUi, Self::Bootstrap]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::MaterialUi => "Material-UI",
            Self::Bootstrap => "Bootstrap",
        }
    }

    /// Runtime packages the library needs.
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::MaterialUi => &["@mui/material", "@emotion/react", "@emotion/styled"],
            Self::Bootstrap => &["bootstrap", "react-bootstrap"],
        }
    }
}

impl std::fmt::Display for UiLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Package providing client-side routing.
pub const ROUTER_PACKAGE: &str = "react-router-dom";

/// Choices collected for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectOptions {
    pub ui_library: UiLibrary,
    pub use_routing: bool,
}

impl ProjectOptions {
    pub fn new(ui_library: UiLibrary, use_routing: bool) -> Self {
        Self {
            ui_library,
            use_routing,
        }
    }

    /// Extra dependencies implied by these options for `project_type`.
    ///
    /// Options the type does not offer are ignored.
    pub fn extra_dependencies(&self, project_type: &ProjectType) -> Vec<String> {
        let applicable = project_type.applicable_options();
        let mut extras = Vec::new();

        if applicable.ui_library {
            extras.extend(self.ui_library.packages().iter().map(|p| p.to_string()));
        }
        if applicable.routing && self.use_routing {
            extras.push(ROUTER_PACKAGE.to_string());
        }
        extras
    }
}

/// Starter kit used to create a (language, type) project from scratch.
pub fn generator_for(language: &Language, project_type: &ProjectType) -> Option<Generator> {
    use Language::{JavaScript, TypeScript};
    use ProjectType::{Next, Node, React, Vue};

    let generator = match (language, project_type) {
        (JavaScript, React) => Generator::new("npx", &["create-react-app", "{name}"]),
        (TypeScript, React) => Generator::new(
            "npx",
            &["create-react-app", "{name}", "--template", "typescript"],
        ),
        (JavaScript, Next) => Generator::new(
            "npx",
            &["create-next-app@latest", "{name}", "--js", "--eslint", "--use-npm"],
        ),
        (TypeScript, Next) => Generator::new(
            "npx",
            &["create-next-app@latest", "{name}", "--ts", "--eslint", "--use-npm"],
        ),
        (JavaScript, Vue) => Generator::new("npm", &["create", "vue@latest", "{name}"]),
        (TypeScript, Vue) => Generator::new(
            "npm",
            &["create", "vue@latest", "{name}", "--", "--typescript"],
        ),
        (JavaScript, Node) => Generator::new("npx", &["express-generator", "{name}"]),
        _ => return None,
    };
    Some(generator)
}
