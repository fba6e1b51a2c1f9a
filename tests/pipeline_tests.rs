mod common;

use common::TestResult;
use tempfile::tempdir;
use vitals::{PipelineError, ReportPipelineBuilder, TemplateError, UserData};

#[test]
fn test_render_html_substitutes_every_token() -> TestResult {
    let data = UserData::sample();
    let pipeline = ReportPipelineBuilder::new().front_cover_page().build()?;

    let html = pipeline.render_html(&data)?;

    assert!(!html.contains("{{"));
    assert!(!html.contains("}}"));
    for (_, value) in data.replacements() {
        assert!(html.contains(value), "substituted HTML lost '{}'", value);
    }
    Ok(())
}

#[test]
fn test_render_html_from_template_file() -> TestResult {
    let dir = tempdir()?;
    let template_path = dir.path().join("custom.html");
    std::fs::write(&template_path, "<p>{{name}} from {{country}}</p>")?;

    let pipeline = ReportPipelineBuilder::new()
        .with_template_file(&template_path)
        .build()?;
    let html = pipeline.render_html(&UserData::sample())?;

    assert_eq!(html, "<p>Jane Smith from United Kingdom</p>");
    Ok(())
}

#[test]
fn test_unknown_embedded_template_fails_at_load() -> TestResult {
    let pipeline = ReportPipelineBuilder::new()
        .with_template_name("annual-summary")
        .build()?;

    let err = pipeline.render_html(&UserData::sample()).unwrap_err();
    match err {
        PipelineError::Template(TemplateError::UnknownEmbedded { name, available }) => {
            assert_eq!(name, "annual-summary");
            assert!(available.contains("front-cover-page"));
        }
        other => panic!("expected UnknownEmbedded, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_missing_template_file_is_template_error() -> TestResult {
    let dir = tempdir()?;
    let pipeline = ReportPipelineBuilder::new()
        .with_template_file(dir.path().join("gone.html"))
        .build()?;

    let err = pipeline.render_html(&UserData::sample()).unwrap_err();
    assert!(matches!(err, PipelineError::Template(TemplateError::Io { .. })));
    Ok(())
}

#[cfg(feature = "builtin")]
mod builtin {
    use super::common::{GeneratedPdf, TestResult};
    use tempfile::tempdir;
    use vitals::{BackendSelection, ReportPipelineBuilder, UserData};

    #[test]
    fn test_front_cover_generates_pdf() -> TestResult {
        let dir = tempdir()?;
        let output = dir.path().join("report.pdf");
        let data = UserData::sample();

        let pipeline = ReportPipelineBuilder::new()
            .front_cover_page()
            .with_backend(BackendSelection::PrintPdf)
            .build()?;
        let report = pipeline.generate_to_file(&data, &output)?;

        assert_eq!(report.backend, "printpdf");
        assert_eq!(report.path, output);
        assert!(report.attempts.is_empty());
        assert!(report.size_bytes > 0);

        let pdf = GeneratedPdf::from_file(&output)?;
        assert!(pdf.page_count() >= 1);
        Ok(())
    }

    #[test]
    fn test_debug_html_sibling_holds_substituted_text() -> TestResult {
        let dir = tempdir()?;
        let output = dir.path().join("report.pdf");
        let data = UserData::sample();

        ReportPipelineBuilder::new()
            .front_cover_page()
            .with_backend(BackendSelection::PrintPdf)
            .build()?
            .generate_to_file(&data, &output)?;

        let debug_html = std::fs::read_to_string(dir.path().join("report.html"))?;
        assert!(!debug_html.contains("{{"));
        for (_, value) in data.replacements() {
            assert!(debug_html.contains(value));
        }
        Ok(())
    }

    #[test]
    fn test_debug_html_can_be_disabled() -> TestResult {
        let dir = tempdir()?;
        let output = dir.path().join("report.pdf");

        ReportPipelineBuilder::new()
            .front_cover_page()
            .with_backend(BackendSelection::PrintPdf)
            .with_debug_html(false)
            .build()?
            .generate_to_file(&UserData::sample(), &output)?;

        assert!(output.exists());
        assert!(!dir.path().join("report.html").exists());
        Ok(())
    }

    #[test]
    fn test_generation_is_repeatable() -> TestResult {
        let dir = tempdir()?;
        let output = dir.path().join("report.pdf");
        let data = UserData::sample();
        let pipeline = ReportPipelineBuilder::new()
            .front_cover_page()
            .with_backend(BackendSelection::PrintPdf)
            .build()?;

        let first = pipeline.generate_to_file(&data, &output)?;
        let second = pipeline.generate_to_file(&data, &output)?;

        assert_eq!(first.backend, second.backend);
        assert!(second.size_bytes > 0);
        Ok(())
    }
}
