//! Report command handler
//!
//! Renders a progress report for the seeded store in Markdown or HTML.

use academic_planner::config::Config;
use academic_planner::core::report::{
    default_report_path, reporter_for, ReportContext, ReportFormat,
};
use academic_planner::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `format_str` - Report format (markdown, html)
/// * `output_file` - Optional output path; defaults to config `reports_dir`
/// * `config` - Configuration containing the reports directory and seed
pub fn run(format_str: &str, output_file: Option<&Path>, config: &Config) {
    match generate_report(format_str, output_file, config) {
        Ok((path, ctx)) => {
            println!("✓ Report generated: {}", path.display());
            info!("Report exported to: {}", path.display());
            print_summary(&ctx);
        }
        Err(err) => {
            error!("Report generation failed: {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn generate_report(
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(PathBuf, ReportContext), String> {
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let output_path = output_file.map_or_else(
        || default_report_path(Path::new(&config.paths.reports_dir), format),
        Path::to_path_buf,
    );

    let store = super::load_store(config);
    let ctx = ReportContext::from_state(store.state());
    reporter_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;
    Ok((output_path, ctx))
}

/// Print a summary of the report
fn print_summary(ctx: &ReportContext) {
    println!("\n=== Summary ===");
    println!("Student: {}", ctx.student_name);
    println!("Degree progress: {}%", ctx.progress);
    println!(
        "Requirements completed: {}/{}",
        ctx.completed_requirements, ctx.total_requirements
    );
    println!("Transcript GPA: {}", ctx.transcript_gpa);
    println!("Planned credits: {}", ctx.planned_credits);
}
