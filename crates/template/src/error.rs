use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a template.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown embedded template '{name}' (available: {available})")]
    UnknownEmbedded { name: String, available: String },

    #[error("Failed to read template file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
