use thiserror::Error;

/// One backend's failure, kept for the final report once every backend has
/// been tried.
#[derive(Debug, Clone)]
pub struct FailedAttempt {
    pub backend: &'static str,
    pub reason: String,
    pub install_hint: &'static str,
}

/// Errors raised while rendering HTML to PDF.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The backend's external dependency is not present on this system.
    #[error("Backend '{backend}' is unavailable: {reason}")]
    Unavailable {
        backend: &'static str,
        reason: String,
    },

    /// The backend ran and failed.
    #[error("Backend '{backend}' failed: {message}")]
    Failed {
        backend: &'static str,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Every configured backend was tried and none produced a PDF.
    #[error("All rendering backends failed: {}", format_attempts(.0))]
    AllBackendsFailed(Vec<FailedAttempt>),
}

impl RenderError {
    /// Per-backend failures when every backend was exhausted, empty for
    /// any other error.
    pub fn failed_attempts(&self) -> &[FailedAttempt] {
        match self {
            RenderError::AllBackendsFailed(attempts) => attempts,
            _ => &[],
        }
    }
}

fn format_attempts(attempts: &[FailedAttempt]) -> String {
    attempts
        .iter()
        .map(|attempt| format!("{}: {}", attempt.backend, attempt.reason))
        .collect::<Vec<_>>()
        .join("; ")
}
