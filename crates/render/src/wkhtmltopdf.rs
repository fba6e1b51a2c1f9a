use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use vitals_types::{Margins, PageSettings};

use crate::backend::{RenderBackend, RenderedPdf};
use crate::error::RenderError;

/// Binary name resolved through `PATH` when no explicit path is given.
pub const DEFAULT_BINARY: &str = "wkhtmltopdf";

/// Shells out to the `wkhtmltopdf` binary.
///
/// The HTML is written to a temporary file and converted with a fixed
/// option set: page size, per-side margins, UTF-8 encoding, local file
/// access and print-media CSS. Availability is probed by running
/// `wkhtmltopdf --version`.
pub struct WkhtmltopdfBackend {
    binary: PathBuf,
    page: PageSettings,
}

impl WkhtmltopdfBackend {
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_BINARY)
    }

    /// Use a specific binary instead of resolving `wkhtmltopdf` from `PATH`.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            page: PageSettings::default(),
        }
    }

    pub fn with_page_settings(mut self, page: PageSettings) -> Self {
        self.page = page;
        self
    }

    /// Conversion arguments in wkhtmltopdf's expected order, input and
    /// output paths last.
    fn args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let Margins {
            top,
            right,
            bottom,
            left,
        } = self.page.margins;

        let mut args: Vec<OsString> = vec![
            "--page-size".into(),
            self.page.size.name().into(),
            "--margin-top".into(),
            format!("{top}mm").into(),
            "--margin-right".into(),
            format!("{right}mm").into(),
            "--margin-bottom".into(),
            format!("{bottom}mm").into(),
            "--margin-left".into(),
            format!("{left}mm").into(),
            "--encoding".into(),
            "UTF-8".into(),
        ];
        if self.page.local_file_access {
            args.push("--enable-local-file-access".into());
        }
        if self.page.print_media {
            args.push("--print-media-type".into());
        }
        args.push(input.as_os_str().to_os_string());
        args.push(output.as_os_str().to_os_string());
        args
    }
}

impl Default for WkhtmltopdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for WkhtmltopdfBackend {
    fn name(&self) -> &'static str {
        "wkhtmltopdf"
    }

    fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn install_hint(&self) -> &'static str {
        "install wkhtmltopdf from https://wkhtmltopdf.org/downloads.html and make sure it is on PATH"
    }

    fn render(&self, html: &str, output: &Path) -> Result<RenderedPdf, RenderError> {
        let mut input = tempfile::Builder::new()
            .prefix("vitals-")
            .suffix(".html")
            .tempfile()?;
        input.write_all(html.as_bytes())?;
        input.flush()?;

        log::info!("Rendering with wkhtmltopdf ({} bytes of HTML)", html.len());
        let result = Command::new(&self.binary)
            .args(self.args(input.path(), output))
            .output();

        let run = match result {
            Ok(run) => run,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(RenderError::Unavailable {
                    backend: self.name(),
                    reason: format!("binary '{}' not found", self.binary.display()),
                });
            }
            Err(err) => return Err(RenderError::Io(err)),
        };

        if !run.status.success() {
            // wkhtmltopdf writes progress to stderr; the last non-empty
            // line carries the actual error.
            let stderr = String::from_utf8_lossy(&run.stderr);
            let detail = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("")
                .trim()
                .to_string();
            let message = if detail.is_empty() {
                format!("exited with {}", run.status)
            } else {
                format!("exited with {}: {}", run.status, detail)
            };
            return Err(RenderError::Failed {
                backend: self.name(),
                message,
            });
        }

        if !output.exists() {
            return Err(RenderError::Failed {
                backend: self.name(),
                message: "no output file was produced".to_string(),
            });
        }
        RenderedPdf::from_path(output)
    }
}
