//! Report generation pipeline orchestration.
//!
//! This module contains the pieces a caller assembles to generate a PDF:
//!
//! - [`ReportPipelineBuilder`]: fluent builder for configuring a pipeline
//! - [`BackendSelection`]: restricts or orders the rendering backends
//! - [`ReportPipeline`]: the assembled load → substitute → render flow
//!
//! # Example
//!
//! ```no_run
//! use vitals::{ReportPipelineBuilder, UserData};
//!
//! # fn main() -> Result<(), vitals::PipelineError> {
//! let pipeline = ReportPipelineBuilder::new().front_cover_page().build()?;
//! let report = pipeline.generate_to_file(&UserData::sample(), "output.pdf".as_ref())?;
//! println!("{} ({} bytes)", report.path.display(), report.size_bytes);
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod config;
mod orchestrator;

pub use builder::ReportPipelineBuilder;
pub use config::BackendSelection;
pub use orchestrator::{ReportOutput, ReportPipeline};
