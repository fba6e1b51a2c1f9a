mod common;

use common::TestResult;
use tempfile::tempdir;
use vitals::{BackendSelection, PipelineError, RenderError, ReportPipelineBuilder, UserData};

/// A binary name that cannot exist on PATH, forcing the shell-out backend
/// down its unavailable path.
const MISSING_BINARY: &str = "vitals-integration-missing-wkhtmltopdf";

#[test]
fn test_pinned_wkhtmltopdf_fails_cleanly_when_missing() -> TestResult {
    let dir = tempdir()?;
    let output = dir.path().join("report.pdf");

    let err = ReportPipelineBuilder::new()
        .front_cover_page()
        .with_backend(BackendSelection::Wkhtmltopdf)
        .with_wkhtmltopdf_binary(MISSING_BINARY)
        .build()?
        .generate_to_file(&UserData::sample(), &output)
        .unwrap_err();

    let PipelineError::Render(render_err) = err else {
        panic!("expected a render error");
    };
    let attempts = render_err.failed_attempts();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].backend, "wkhtmltopdf");
    assert!(attempts[0].reason.contains("not found"));
    assert!(attempts[0].install_hint.contains("wkhtmltopdf.org"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_all_failed_error_mentions_every_backend() -> TestResult {
    let dir = tempdir()?;
    let output = dir.path().join("report.pdf");

    let err = ReportPipelineBuilder::new()
        .front_cover_page()
        .with_backend(BackendSelection::Wkhtmltopdf)
        .with_wkhtmltopdf_binary(MISSING_BINARY)
        .build()?
        .generate_to_file(&UserData::sample(), &output)
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("All rendering backends failed"));
    assert!(message.contains("wkhtmltopdf"));

    match err {
        PipelineError::Render(RenderError::AllBackendsFailed(_)) => {}
        other => panic!("expected AllBackendsFailed, got {other:?}"),
    }
    Ok(())
}

#[cfg(feature = "builtin")]
mod builtin {
    use super::*;

    #[test]
    fn test_auto_falls_back_to_printpdf_when_binary_missing() -> TestResult {
        let dir = tempdir()?;
        let output = dir.path().join("report.pdf");

        let report = ReportPipelineBuilder::new()
            .front_cover_page()
            .with_backend(BackendSelection::Auto)
            .with_wkhtmltopdf_binary(MISSING_BINARY)
            .build()?
            .generate_to_file(&UserData::sample(), &output)?;

        assert_eq!(report.backend, "printpdf");
        assert!(output.exists());
        assert_eq!(report.attempts.len(), 1);
        assert_eq!(report.attempts[0].backend, "wkhtmltopdf");
        assert!(report.attempts[0].reason.contains("not found"));
        Ok(())
    }

    #[test]
    fn test_fallback_still_writes_debug_html() -> TestResult {
        let dir = tempdir()?;
        let output = dir.path().join("report.pdf");

        ReportPipelineBuilder::new()
            .front_cover_page()
            .with_backend(BackendSelection::Auto)
            .with_wkhtmltopdf_binary(MISSING_BINARY)
            .build()?
            .generate_to_file(&UserData::sample(), &output)?;

        assert!(dir.path().join("report.html").exists());
        Ok(())
    }
}

#[cfg(not(feature = "builtin"))]
mod without_builtin {
    use super::*;

    #[test]
    fn test_auto_reports_compiled_out_renderer() -> TestResult {
        let dir = tempdir()?;
        let output = dir.path().join("report.pdf");

        let err = ReportPipelineBuilder::new()
            .front_cover_page()
            .with_backend(BackendSelection::Auto)
            .with_wkhtmltopdf_binary(MISSING_BINARY)
            .build()?
            .generate_to_file(&UserData::sample(), &output)
            .unwrap_err();

        let PipelineError::Render(render_err) = err else {
            panic!("expected a render error");
        };
        let attempts = render_err.failed_attempts();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[1].backend, "printpdf");
        assert!(attempts[1].install_hint.contains("builtin"));
        Ok(())
    }
}
