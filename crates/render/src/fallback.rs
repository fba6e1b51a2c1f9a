use std::path::Path;

use crate::backend::{RenderBackend, RenderedPdf};
use crate::error::{FailedAttempt, RenderError};

/// Result of a fallback chain run: the PDF, the backend that produced it
/// and the failures that preceded it.
#[derive(Debug)]
pub struct RenderOutcome {
    pub pdf: RenderedPdf,
    pub backend: &'static str,
    pub attempts: Vec<FailedAttempt>,
}

/// Try each backend in order until one produces a PDF.
///
/// A backend whose availability probe fails is skipped; a backend that
/// runs and fails is recorded the same way. Nothing propagates mid-chain.
/// When every backend has been passed over, the error carries each
/// attempt's reason and install hint.
pub fn render_with_fallback(
    backends: &[Box<dyn RenderBackend>],
    html: &str,
    output: &Path,
) -> Result<RenderOutcome, RenderError> {
    let mut attempts = Vec::new();

    for backend in backends {
        if !backend.is_available() {
            log::warn!("Backend '{}' is not available, trying next", backend.name());
            attempts.push(FailedAttempt {
                backend: backend.name(),
                reason: "dependency not found or not runnable".to_string(),
                install_hint: backend.install_hint(),
            });
            continue;
        }
        match backend.render(html, output) {
            Ok(pdf) => {
                log::info!(
                    "Backend '{}' wrote '{}' ({} bytes)",
                    backend.name(),
                    pdf.path.display(),
                    pdf.size_bytes
                );
                return Ok(RenderOutcome {
                    pdf,
                    backend: backend.name(),
                    attempts,
                });
            }
            Err(err) => {
                let reason = match &err {
                    RenderError::Unavailable { reason, .. } => reason.clone(),
                    RenderError::Failed { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                log::warn!("Backend '{}' did not produce a PDF: {}", backend.name(), reason);
                attempts.push(FailedAttempt {
                    backend: backend.name(),
                    reason,
                    install_hint: backend.install_hint(),
                });
            }
        }
    }

    Err(RenderError::AllBackendsFailed(attempts))
}
