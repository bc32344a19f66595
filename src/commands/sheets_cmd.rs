use std::path::Path;
use std::process::ExitCode;

use crate::commands::base_commands::SamplingArgs;
use crate::commands::report_format::{emit_report, fail};
use crate::services::rotation::sheets_from_workbook;

pub fn sheets_command(sampling: SamplingArgs, output: String, ceremony_label: String) -> ExitCode {
    let config = sampling.to_config();
    let report = match sheets_from_workbook(
        Path::new(&sampling.input),
        Path::new(&output),
        &config,
        &ceremony_label,
    ) {
        Ok(report) => report,
        Err(e) => return fail("Failed to build resource sheets", &e),
    };

    if let Err(code) = emit_report(&report, sampling.report.as_deref()) {
        return code;
    }
    println!("Sheets for {} resources written to {output}", report.resources);
    ExitCode::SUCCESS
}
