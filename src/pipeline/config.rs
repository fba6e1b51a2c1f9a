use std::fmt;
use std::str::FromStr;

/// An enum to select which rendering backend(s) the pipeline may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendSelection {
    /// Try the wkhtmltopdf binary first, falling back to the in-process
    /// printpdf renderer. (Default)
    #[default]
    Auto,
    /// Only the wkhtmltopdf binary; no fallback.
    Wkhtmltopdf,
    /// Only the in-process printpdf renderer; no fallback.
    PrintPdf,
}

impl BackendSelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendSelection::Auto => "auto",
            BackendSelection::Wkhtmltopdf => "wkhtmltopdf",
            BackendSelection::PrintPdf => "printpdf",
        }
    }
}

impl fmt::Display for BackendSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendSelection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Ok(BackendSelection::Auto),
            "wkhtmltopdf" => Ok(BackendSelection::Wkhtmltopdf),
            "printpdf" | "builtin" => Ok(BackendSelection::PrintPdf),
            other => Err(format!(
                "unknown backend '{other}' (expected auto, wkhtmltopdf or printpdf)"
            )),
        }
    }
}
