use thiserror::Error;

use vitals_render::RenderError;
use vitals_template::TemplateError;

/// A comprehensive error type for the entire report generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Template loading failed: {0}")]
    Template(#[from] TemplateError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("User data parsing failed: {0}")]
    Data(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pipeline configuration is invalid or incomplete: {0}")]
    Config(String),
}
