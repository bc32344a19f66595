use std::path::Path;
use std::process::ExitCode;

use crate::commands::base_commands::SamplingArgs;
use crate::commands::report_format::{emit_report, fail};
use crate::services::rotation::assign_from_workbook;

pub fn assign_command(sampling: SamplingArgs, output: String) -> ExitCode {
    let config = sampling.to_config();
    let report =
        match assign_from_workbook(Path::new(&sampling.input), Path::new(&output), &config) {
            Ok(report) => report,
            Err(e) => return fail("Failed to build assignments", &e),
        };

    if let Err(code) = emit_report(&report, sampling.report.as_deref()) {
        return code;
    }
    println!("Assignments for {} rows written to {output}", report.rows);
    ExitCode::SUCCESS
}
