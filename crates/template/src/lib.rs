//! HTML template loading and placeholder substitution.
//!
//! ## Loading
//!
//! Templates come from two places: the registry of templates compiled into
//! the binary (see [`embedded`] and [`FRONT_COVER_PAGE`]) and UTF-8 HTML
//! files on disk. [`TemplateSource`] unifies both behind a single
//! [`load`](TemplateSource::load).
//!
//! ## Substitution
//!
//! [`substitute`] performs literal string replacement of double-brace
//! tokens. Values are inserted verbatim with no HTML escaping, tokens
//! missing from the text are skipped silently, and unknown `{{...}}`
//! sequences are left untouched.

mod error;
mod registry;
mod source;
mod substitute;

pub use error::TemplateError;
pub use registry::{FRONT_COVER_PAGE, embedded, embedded_names};
pub use source::TemplateSource;
pub use substitute::{render_user_data, substitute};
