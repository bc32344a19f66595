use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::services::report_types::RotationReport;

pub fn serialize_report_to_yaml<W: Write>(
    writer: &mut W,
    report: &RotationReport,
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(report).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

pub fn write_report_to_yaml_file<P: AsRef<Path>>(
    path: P,
    report: &RotationReport,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serialize_report_to_yaml(&mut writer, report)?;
    writer.flush()
}
