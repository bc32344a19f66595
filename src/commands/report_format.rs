use std::process::ExitCode;

use crate::services::report_types::{CustomerShare, RotationReport};
use crate::services::report_yaml::write_report_to_yaml_file;
use crate::services::rotation::{ErrorKind, RotationError};

pub fn format_rotation_report(report: &RotationReport) -> String {
    let mut lines = Vec::new();
    lines.push("Rotation Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Output: {}", report.output));
    lines.push(format!("Generated on: {}", report.generated_on.format("%Y-%m-%d")));
    lines.push(format!("Seed: {}", report.seed));
    lines.push(format!("Max samples: {}", report.max_samples));
    lines.push(format!("Hours divisor: {}", report.hours_divisor));
    lines.push(format!("Pool size: {}", report.pool_size));
    lines.push(format!("Rows: {}", report.rows));
    lines.push(format!("Resources: {}", report.resources));
    lines.push(String::new());
    lines.push("Customer | Userstory | Hours | Repetitions | Drawn".to_string());
    lines.push("---------|-----------|-------|-------------|------".to_string());
    lines.extend(report.customers.iter().map(format_customer_row));

    lines.join("\n")
}

fn format_customer_row(share: &CustomerShare) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        share.customer, share.userstory_id, share.hours, share.repetitions, share.drawn
    )
}

/// Prints the report table and, when asked, saves the report as YAML.
///
/// On failure the error is printed and the exit code to return is handed back.
pub fn emit_report(report: &RotationReport, report_path: Option<&str>) -> Result<(), ExitCode> {
    println!("{}", format_rotation_report(report));
    if let Some(path) = report_path {
        if let Err(e) = write_report_to_yaml_file(path, report) {
            eprintln!("Failed to write run report: {e}");
            return Err(ExitCode::from(ErrorKind::Io.exit_code()));
        }
        println!("Run report written to {path}");
    }
    Ok(())
}

pub fn fail(context: &str, error: &RotationError) -> ExitCode {
    eprintln!("{context}: {error}");
    ExitCode::from(error.kind().exit_code())
}
