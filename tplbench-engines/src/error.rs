use std::path::PathBuf;

use crate::{Engine, Scenario};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Tera error: {0}")]
    Tera(#[from] tera::Error),
    #[error("Handlebars template error: {0}")]
    HandlebarsTemplate(#[from] Box<handlebars::TemplateError>),
    #[error("Handlebars render error: {0}")]
    HandlebarsRender(#[from] handlebars::RenderError),
    #[error("MiniJinja error: {0}")]
    MiniJinja(#[from] minijinja::Error),
    #[error("Liquid error: {0}")]
    Liquid(#[from] liquid::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not read template `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{engine} has no templates for the {scenario} benchmark")]
    Unsupported { engine: Engine, scenario: Scenario },
    #[error("Entry template `{0}` is not part of the template set")]
    MissingEntry(String),
}

impl From<handlebars::TemplateError> for Error {
    fn from(value: handlebars::TemplateError) -> Self {
        Self::HandlebarsTemplate(Box::new(value))
    }
}
