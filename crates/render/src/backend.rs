use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// A successfully written PDF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPdf {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl RenderedPdf {
    /// Stat an output file the backend just wrote.
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let metadata = fs::metadata(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            size_bytes: metadata.len(),
        })
    }
}

/// An HTML-to-PDF conversion strategy.
///
/// Every backend shares one contract: take final HTML text and an output
/// path, produce a PDF file at that path. Success means the file exists;
/// layout fidelity is the backend's own business and is never checked here.
pub trait RenderBackend {
    /// Short identifier used in logs and failure reports.
    fn name(&self) -> &'static str;

    /// Whether the backend's external dependency is present.
    fn is_available(&self) -> bool;

    /// How to obtain the dependency when its absence blocks generation.
    fn install_hint(&self) -> &'static str;

    /// Convert `html` and write the PDF to `output`.
    fn render(&self, html: &str, output: &Path) -> Result<RenderedPdf, RenderError>;
}
