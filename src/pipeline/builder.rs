use std::path::{Path, PathBuf};

#[cfg(feature = "builtin")]
use vitals_render::PrintPdfBackend;
use vitals_render::{RenderBackend, WkhtmltopdfBackend};
use vitals_template::TemplateSource;
use vitals_types::PageSettings;

use super::config::BackendSelection;
use super::orchestrator::ReportPipeline;
use crate::error::PipelineError;

/// A builder for creating a [`ReportPipeline`].
pub struct ReportPipelineBuilder {
    source: Option<TemplateSource>,
    backend: BackendSelection,
    page: PageSettings,
    wkhtmltopdf_binary: Option<PathBuf>,
    #[cfg_attr(not(feature = "builtin"), allow(dead_code))]
    debug_html: bool,
}

impl Default for ReportPipelineBuilder {
    fn default() -> Self {
        Self {
            source: None,
            backend: BackendSelection::default(),
            page: PageSettings::default(),
            wkhtmltopdf_binary: None,
            debug_html: true,
        }
    }
}

impl ReportPipelineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Configures the pipeline with the embedded front cover template.
    pub fn front_cover_page(self) -> Self {
        self.with_template_name(vitals_template::FRONT_COVER_PAGE)
    }

    /// Configures the pipeline with an embedded template by registry name.
    /// The name is resolved when the pipeline loads the template.
    pub fn with_template_name(mut self, name: impl Into<String>) -> Self {
        self.source = Some(TemplateSource::Embedded(name.into()));
        self
    }

    /// Configures the pipeline with an HTML template file.
    pub fn with_template_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(TemplateSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Restricts or orders the rendering backends.
    pub fn with_backend(mut self, backend: BackendSelection) -> Self {
        self.backend = backend;
        self
    }

    /// Overrides the page geometry shared by every backend.
    pub fn with_page_settings(mut self, page: PageSettings) -> Self {
        self.page = page;
        self
    }

    /// Path to the wkhtmltopdf binary when it is not on `PATH`.
    pub fn with_wkhtmltopdf_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.wkhtmltopdf_binary = Some(binary.into());
        self
    }

    /// Keep or skip the sibling debug HTML the in-process backend writes.
    pub fn with_debug_html(mut self, debug_html: bool) -> Self {
        self.debug_html = debug_html;
        self
    }

    /// Assembles the pipeline.
    ///
    /// Fails when no template was configured.
    pub fn build(self) -> Result<ReportPipeline, PipelineError> {
        let source = self.source.clone().ok_or_else(|| {
            PipelineError::Config(
                "no template configured; call front_cover_page(), with_template_name() \
                 or with_template_file()"
                    .to_string(),
            )
        })?;
        let backends = self.backends();

        let pipeline = ReportPipeline::new(source, backends);
        log::info!(
            "Pipeline configured: template '{}', backends [{}]",
            pipeline.template().describe(),
            pipeline.backend_names().join(", ")
        );
        Ok(pipeline)
    }

    fn backends(&self) -> Vec<Box<dyn RenderBackend>> {
        match self.backend {
            BackendSelection::Wkhtmltopdf => vec![self.wkhtmltopdf()],
            BackendSelection::PrintPdf => vec![self.printpdf()],
            BackendSelection::Auto => vec![self.wkhtmltopdf(), self.printpdf()],
        }
    }

    fn wkhtmltopdf(&self) -> Box<dyn RenderBackend> {
        let backend = match &self.wkhtmltopdf_binary {
            Some(binary) => WkhtmltopdfBackend::with_binary(binary),
            None => WkhtmltopdfBackend::new(),
        };
        Box::new(backend.with_page_settings(self.page))
    }

    #[cfg(feature = "builtin")]
    fn printpdf(&self) -> Box<dyn RenderBackend> {
        let mut backend = PrintPdfBackend::new().with_page_settings(self.page);
        if !self.debug_html {
            backend = backend.without_debug_html();
        }
        Box::new(backend)
    }

    #[cfg(not(feature = "builtin"))]
    fn printpdf(&self) -> Box<dyn RenderBackend> {
        Box::new(disabled::DisabledPrintPdf)
    }
}

#[cfg(not(feature = "builtin"))]
mod disabled {
    use std::path::Path;

    use vitals_render::{RenderBackend, RenderError, RenderedPdf};

    /// Stands in for the in-process renderer when it is compiled out, so
    /// the fallback chain still reports it by name.
    pub(super) struct DisabledPrintPdf;

    impl RenderBackend for DisabledPrintPdf {
        fn name(&self) -> &'static str {
            "printpdf"
        }

        fn is_available(&self) -> bool {
            false
        }

        fn install_hint(&self) -> &'static str {
            "rebuild with the default `builtin` cargo feature enabled"
        }

        fn render(&self, _html: &str, _output: &Path) -> Result<RenderedPdf, RenderError> {
            Err(RenderError::Unavailable {
                backend: self.name(),
                reason: "compiled out without the `builtin` feature".to_string(),
            })
        }
    }
}
