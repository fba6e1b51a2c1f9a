use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vitals::{
    BackendSelection, PipelineError, ReportOutput, ReportPipelineBuilder, UserData,
    render_user_data,
};

/// Generate a personal health report PDF from an HTML template.
#[derive(Parser, Debug)]
#[command(name = "vitals", version, about, long_about = None)]
struct Args {
    /// HTML template file; defaults to the embedded front cover page
    #[arg(long)]
    template: Option<PathBuf>,

    /// JSON file with the user data record (camelCase keys); overrides the
    /// individual field flags
    #[arg(long)]
    data: Option<PathBuf>,

    /// Output PDF path; defaults to health-report-<name>.pdf
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Rendering backend (auto tries wkhtmltopdf first, then printpdf)
    #[arg(long, default_value_t = BackendSelection::Auto)]
    backend: BackendSelection,

    /// wkhtmltopdf binary to use when it is not on PATH
    #[arg(long)]
    wkhtmltopdf_binary: Option<PathBuf>,

    /// Skip the sibling debug HTML the in-process backend writes
    #[arg(long)]
    no_debug_html: bool,

    /// Report holder's name
    #[arg(long)]
    name: Option<String>,

    /// Gender field
    #[arg(long)]
    gender: Option<String>,

    /// Country field
    #[arg(long)]
    country: Option<String>,

    /// Birth year field
    #[arg(long)]
    birth_year: Option<String>,

    /// Reporting period, e.g. "Jan 1, 2024 - Dec 31, 2024"
    #[arg(long)]
    report_period: Option<String>,

    /// Footer line; defaults to today's date with a personal-use notice
    #[arg(long)]
    footer_text: Option<String>,
}

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(report) => {
            println!(
                "\n✓ PDF generated with {}: {} ({:.1} KB)",
                report.backend,
                report.path.display(),
                report.size_bytes as f64 / 1024.0
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ReportOutput, PipelineError> {
    let data = load_user_data(&args)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(data.default_output_name()));

    println!("Health Report PDF Generator");

    let mut builder = ReportPipelineBuilder::new().with_backend(args.backend);
    builder = match &args.template {
        Some(path) => builder.with_template_file(path),
        None => builder.front_cover_page(),
    };
    if let Some(binary) = &args.wkhtmltopdf_binary {
        builder = builder.with_wkhtmltopdf_binary(binary);
    }
    if args.no_debug_html {
        builder = builder.with_debug_html(false);
    }
    let pipeline = builder.build()?;

    let template = pipeline.template().load()?;
    println!(
        "✓ Template loaded from {} ({:.1} KB)",
        pipeline.template().describe(),
        template.len() as f64 / 1024.0
    );
    println!("✓ Template variables:");
    for (token, value) in data.replacements() {
        println!("   • {}: {}", token, value);
    }

    let html = render_user_data(&template, &data);
    pipeline.write_pdf(&html, &output)
}

fn load_user_data(args: &Args) -> Result<UserData, PipelineError> {
    if let Some(path) = &args.data {
        let text = fs::read_to_string(path)?;
        let data: UserData = serde_json::from_str(&text)?;
        return Ok(data);
    }

    let sample = UserData::sample();
    Ok(UserData {
        name: args.name.clone().unwrap_or(sample.name),
        gender: args.gender.clone().unwrap_or(sample.gender),
        country: args.country.clone().unwrap_or(sample.country),
        birth_year: args.birth_year.clone().unwrap_or(sample.birth_year),
        report_period: args.report_period.clone().unwrap_or(sample.report_period),
        footer_text: args.footer_text.clone().unwrap_or_else(default_footer),
    })
}

/// Footer matching the shipped reports: today's date plus a usage notice.
fn default_footer() -> String {
    format!(
        "{} • For Personal Use Only",
        chrono::Local::now().format("%Y-%m-%d")
    )
}

fn report_failure(err: &PipelineError) {
    println!("\n✗ PDF generation failed: {err}");
    if let PipelineError::Render(render_err) = err {
        let attempts = render_err.failed_attempts();
        if !attempts.is_empty() {
            println!("\nTo generate PDFs:");
            for attempt in attempts {
                println!("  • {}: {}", attempt.backend, attempt.install_hint);
            }
        }
    }
}
