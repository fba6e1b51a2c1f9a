//! HTML-to-PDF rendering backends.
//!
//! ## Backends
//!
//! [`WkhtmltopdfBackend`] shells out to the wkhtmltopdf binary;
//! [`PrintPdfBackend`] converts in process through printpdf (cargo feature
//! `builtin`, on by default). Both implement [`RenderBackend`]: final HTML
//! text in, a PDF file at the requested path out.
//!
//! ## Fallback
//!
//! [`render_with_fallback`] tries backends in order and, when none
//! succeeds, returns an error carrying every backend's failure reason and
//! install hint.

pub mod backend;
pub mod error;
pub mod fallback;
#[cfg(feature = "builtin")]
pub mod printpdf_backend;
pub mod wkhtmltopdf;

pub use backend::{RenderBackend, RenderedPdf};
pub use error::{FailedAttempt, RenderError};
pub use fallback::{RenderOutcome, render_with_fallback};
#[cfg(feature = "builtin")]
pub use printpdf_backend::PrintPdfBackend;
pub use wkhtmltopdf::{DEFAULT_BINARY, WkhtmltopdfBackend};
