use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use printpdf::{GeneratePdfOptions, PdfDocument, PdfSaveOptions};
use vitals_types::PageSettings;

use crate::backend::{RenderBackend, RenderedPdf};
use crate::error::RenderError;

/// Pure in-process conversion through printpdf's HTML pipeline.
///
/// Besides the PDF, this backend writes the substituted HTML to a sibling
/// `.html` file so the exact rendered input can be inspected.
pub struct PrintPdfBackend {
    page: PageSettings,
    debug_html: bool,
}

impl PrintPdfBackend {
    pub fn new() -> Self {
        Self {
            page: PageSettings::default(),
            debug_html: true,
        }
    }

    pub fn with_page_settings(mut self, page: PageSettings) -> Self {
        self.page = page;
        self
    }

    /// Skip the sibling debug HTML file.
    pub fn without_debug_html(mut self) -> Self {
        self.debug_html = false;
        self
    }

    fn pdf_options(&self) -> GeneratePdfOptions {
        let (width, height) = self.page.size.dimensions_mm();
        let mut options = GeneratePdfOptions::default();
        options.page_width = Some(width);
        options.page_height = Some(height);
        options
    }
}

impl Default for PrintPdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for PrintPdfBackend {
    fn name(&self) -> &'static str {
        "printpdf"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn install_hint(&self) -> &'static str {
        "nothing to install; rerun with RUST_LOG=debug for the conversion warnings"
    }

    fn render(&self, html: &str, output: &Path) -> Result<RenderedPdf, RenderError> {
        let images = BTreeMap::new();
        let fonts = BTreeMap::new();
        let mut warnings = Vec::new();

        log::info!("Rendering with printpdf ({} bytes of HTML)", html.len());
        let doc = PdfDocument::from_html(html, &images, &fonts, &self.pdf_options(), &mut warnings)
            .map_err(|message| RenderError::Failed {
                backend: self.name(),
                message,
            })?;
        if !warnings.is_empty() {
            log::debug!("printpdf reported {} conversion warnings", warnings.len());
        }

        let mut save_warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut save_warnings);
        fs::write(output, &bytes)?;

        if self.debug_html {
            let debug_path = output.with_extension("html");
            fs::write(&debug_path, html)?;
            log::debug!("Wrote debug HTML to '{}'", debug_path.display());
        }

        RenderedPdf::from_path(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_PAGE: &str = "<!DOCTYPE html>\
        <html><head><title>t</title></head>\
        <body><h1>Report</h1><p>Jane Smith</p></body></html>";

    #[test]
    fn test_render_writes_pdf_and_debug_html() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.pdf");

        let pdf = PrintPdfBackend::new().render(MINIMAL_PAGE, &output).unwrap();

        assert_eq!(pdf.path, output);
        assert!(pdf.size_bytes > 0);
        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let debug_path = dir.path().join("report.html");
        assert_eq!(fs::read_to_string(debug_path).unwrap(), MINIMAL_PAGE);
    }

    #[test]
    fn test_render_without_debug_html() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.pdf");

        PrintPdfBackend::new()
            .without_debug_html()
            .render(MINIMAL_PAGE, &output)
            .unwrap();

        assert!(output.exists());
        assert!(!dir.path().join("report.html").exists());
    }

    #[test]
    fn test_rendered_pdf_parses() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.pdf");
        PrintPdfBackend::new().render(MINIMAL_PAGE, &output).unwrap();

        let bytes = fs::read(&output).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert!(!doc.get_pages().is_empty());
    }

    #[test]
    fn test_backend_is_always_available() {
        assert!(PrintPdfBackend::new().is_available());
        assert_eq!(PrintPdfBackend::new().name(), "printpdf");
    }
}
