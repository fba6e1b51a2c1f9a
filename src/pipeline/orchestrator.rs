use std::path::{Path, PathBuf};

use vitals_render::{FailedAttempt, RenderBackend, RenderOutcome, render_with_fallback};
use vitals_template::{TemplateSource, render_user_data};
use vitals_types::UserData;

use crate::error::PipelineError;

/// A generated report: where it landed, how large it is, which backend
/// produced it and the failed attempts that preceded it.
#[derive(Debug)]
pub struct ReportOutput {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub backend: &'static str,
    pub attempts: Vec<FailedAttempt>,
}

/// The main report generation pipeline.
///
/// A two-step flow with no feedback loop: substitute the user data record
/// into the template text, then hand the final HTML to the backend chain.
pub struct ReportPipeline {
    source: TemplateSource,
    backends: Vec<Box<dyn RenderBackend>>,
}

impl std::fmt::Debug for ReportPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportPipeline")
            .field("source", &self.source)
            .field("backends", &self.backend_names())
            .finish()
    }
}

impl ReportPipeline {
    pub(crate) fn new(source: TemplateSource, backends: Vec<Box<dyn RenderBackend>>) -> Self {
        Self { source, backends }
    }

    /// The configured template source.
    pub fn template(&self) -> &TemplateSource {
        &self.source
    }

    /// Names of the configured backends, in attempt order.
    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|backend| backend.name()).collect()
    }

    /// Loads the template and substitutes `data` without rendering a PDF.
    pub fn render_html(&self, data: &UserData) -> Result<String, PipelineError> {
        let template = self.source.load()?;
        Ok(render_user_data(&template, data))
    }

    /// Hands already-substituted HTML to the backend chain.
    ///
    /// Backends are tried in order; the returned report names the one that
    /// succeeded. When every backend fails the error lists each attempt's
    /// reason and install hint.
    pub fn write_pdf(&self, html: &str, output: &Path) -> Result<ReportOutput, PipelineError> {
        let RenderOutcome {
            pdf,
            backend,
            attempts,
        } = render_with_fallback(&self.backends, html, output)?;

        Ok(ReportOutput {
            path: pdf.path,
            size_bytes: pdf.size_bytes,
            backend,
            attempts,
        })
    }

    /// Generates the PDF at `output` from `data` in one call.
    pub fn generate_to_file(
        &self,
        data: &UserData,
        output: &Path,
    ) -> Result<ReportOutput, PipelineError> {
        let html = self.render_html(data)?;
        self.write_pdf(&html, output)
    }
}
