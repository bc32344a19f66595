use std::collections::HashSet;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use thiserror::Error;
use tracing::debug;

use crate::domain::assignment::{AssignmentRow, ResourceSheet};
use crate::domain::customer::CustomerRecord;

pub const ASSIGNMENTS_SHEET: &str = "assignments";
pub const MAX_SHEET_NAME_LEN: usize = 31;

const ASSIGNMENT_HEADERS: [&str; 3] = ["customer", "userstory", "resource"];
const RESOURCE_SHEET_HEADERS: [&str; 4] = ["customer", "ceremony", "claimed", "what"];
const ILLEGAL_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

#[derive(Error, Debug)]
pub enum WorkbookWriteError {
    #[error("failed to build workbook: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("output has more rows than a worksheet can hold: {0}")]
    TooManyRows(usize),
}

/// Writes the `assignments` sheet: one row per sampled customer with its
/// user story and the resource it was rotated to.
pub fn write_assignment_workbook<P: AsRef<Path>>(
    path: P,
    rows: &[AssignmentRow],
) -> Result<(), WorkbookWriteError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(ASSIGNMENTS_SHEET)?;
    write_header(worksheet, &ASSIGNMENT_HEADERS, &header_format)?;

    for (index, row) in rows.iter().enumerate() {
        let row_number = data_row(index)?;
        worksheet.write_string(row_number, 0, &row.customer)?;
        worksheet.write_number(row_number, 1, row.userstory_id as f64)?;
        worksheet.write_string(row_number, 2, &row.resource)?;
    }
    worksheet.autofit();

    workbook.save(path.as_ref())?;
    debug!(path = %path.as_ref().display(), rows = rows.len(), "wrote assignment workbook");
    Ok(())
}

/// Writes one sheet per resource listing its shuffled customers, with blank
/// `claimed` and `what` columns for the team to fill in.
pub fn write_resource_workbook<P: AsRef<Path>>(
    path: P,
    sheets: &[ResourceSheet],
    customers: &[CustomerRecord],
    ceremony_label: &str,
) -> Result<(), WorkbookWriteError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let names = unique_sheet_names(sheets.iter().map(|sheet| sheet.resource.as_str()));

    for (sheet, name) in sheets.iter().zip(names) {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&name)?;
        write_header(worksheet, &RESOURCE_SHEET_HEADERS, &header_format)?;
        for (index, customer_index) in sheet.entries.iter().enumerate() {
            let customer = &customers[*customer_index];
            let row_number = data_row(index)?;
            worksheet.write_string(row_number, 0, &customer.name)?;
            worksheet.write_string(row_number, 1, customer.ceremony(ceremony_label))?;
        }
        worksheet.autofit();
    }

    workbook.save(path.as_ref())?;
    debug!(path = %path.as_ref().display(), sheets = sheets.len(), "wrote resource workbook");
    Ok(())
}

fn write_header(
    worksheet: &mut Worksheet,
    headers: &[&str],
    format: &Format,
) -> Result<(), XlsxError> {
    for (column, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, column as u16, *header, format)?;
    }
    Ok(())
}

fn data_row(index: usize) -> Result<u32, WorkbookWriteError> {
    u32::try_from(index + 1).map_err(|_| WorkbookWriteError::TooManyRows(index + 1))
}

/// Makes `name` acceptable as a worksheet name: illegal characters become `_`,
/// the result is cut to 31 characters and surrounding apostrophes are dropped.
pub fn sanitize_sheet_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if ILLEGAL_SHEET_CHARS.contains(&c) { '_' } else { c })
        .collect();
    fit_sheet_name(&replaced, "")
}

/// Cuts `base` so that `base + suffix` fits in a sheet name. Apostrophes are
/// trimmed after the cut since a name may not start or end with one.
fn fit_sheet_name(base: &str, suffix: &str) -> String {
    let keep = MAX_SHEET_NAME_LEN - suffix.chars().count();
    let truncated: String = base.trim_matches('\'').chars().take(keep).collect();
    let stem = match truncated.trim_matches('\'') {
        "" => "_",
        stem => stem,
    };
    format!("{stem}{suffix}")
}

/// Sanitized sheet names, with a ` (n)` suffix on names that collide after
/// sanitizing. Comparison ignores case like spreadsheet applications do.
fn unique_sheet_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    names
        .map(|name| {
            let base = sanitize_sheet_name(name);
            let mut candidate = base.clone();
            let mut counter = 2;
            while !taken.insert(candidate.to_lowercase()) {
                candidate = fit_sheet_name(&base, &format!(" ({counter})"));
                counter += 1;
            }
            candidate
        })
        .collect()
}
