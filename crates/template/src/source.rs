use std::fs;
use std::path::PathBuf;

use crate::error::TemplateError;
use crate::registry;

/// Where a template's HTML comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A template compiled into the binary, addressed by registry name.
    Embedded(String),
    /// A UTF-8 HTML file on disk.
    File(PathBuf),
}

impl TemplateSource {
    /// Load the template text.
    ///
    /// Embedded lookups fail when the name is not registered; file loads
    /// fail on I/O errors, including non-UTF-8 contents.
    pub fn load(&self) -> Result<String, TemplateError> {
        match self {
            TemplateSource::Embedded(name) => {
                let html =
                    registry::embedded(name).ok_or_else(|| TemplateError::UnknownEmbedded {
                        name: name.clone(),
                        available: registry::embedded_names().collect::<Vec<_>>().join(", "),
                    })?;
                log::debug!("Loaded embedded template '{}' ({} bytes)", name, html.len());
                Ok(html.to_string())
            }
            TemplateSource::File(path) => {
                let html = fs::read_to_string(path).map_err(|source| TemplateError::Io {
                    path: path.clone(),
                    source,
                })?;
                log::debug!(
                    "Loaded template file '{}' ({} bytes)",
                    path.display(),
                    html.len()
                );
                Ok(html)
            }
        }
    }

    /// Short description for logs and status output.
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Embedded(name) => format!("embedded:{name}"),
            TemplateSource::File(path) => path.display().to_string(),
        }
    }
}
