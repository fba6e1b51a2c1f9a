use std::env;

use vitals::{PipelineError, ReportPipelineBuilder, UserData};

/// Generates the sample front cover report, preferring wkhtmltopdf and
/// falling back to the in-process renderer when it is not installed.
fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    println!("Running Front Cover Example...");

    let data = UserData::sample();
    println!("✓ Sample data for {}", data.name);

    let pipeline = ReportPipelineBuilder::new().front_cover_page().build()?;
    println!(
        "✓ Pipeline built (backends: {})",
        pipeline.backend_names().join(", ")
    );

    let output = data.default_output_name();
    let report = pipeline.generate_to_file(&data, output.as_ref())?;

    println!(
        "\nSuccess! Generated {} with {} ({:.1} KB)",
        report.path.display(),
        report.backend,
        report.size_bytes as f64 / 1024.0
    );
    Ok(())
}
