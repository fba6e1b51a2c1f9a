//! Health report PDF generation.
//!
//! Substitutes a user data record into an HTML template and renders it to
//! PDF through interchangeable backends: the wkhtmltopdf binary when it is
//! installed, falling back to an in-process printpdf conversion.
//!
//! # Quick start
//!
//! ```no_run
//! use vitals::{ReportPipelineBuilder, UserData};
//!
//! # fn main() -> Result<(), vitals::PipelineError> {
//! let data = UserData::sample();
//! let pipeline = ReportPipelineBuilder::new().front_cover_page().build()?;
//! let report = pipeline.generate_to_file(&data, data.default_output_name().as_ref())?;
//! println!("wrote {} ({} bytes)", report.path.display(), report.size_bytes);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{BackendSelection, ReportOutput, ReportPipeline, ReportPipelineBuilder};

#[cfg(feature = "builtin")]
pub use vitals_render::PrintPdfBackend;
pub use vitals_render::{FailedAttempt, RenderBackend, RenderError, RenderedPdf, WkhtmltopdfBackend};
pub use vitals_template::{
    FRONT_COVER_PAGE, TemplateError, TemplateSource, render_user_data, substitute,
};
pub use vitals_types::{Margins, PageSettings, PageSize, TOKENS, UserData};
