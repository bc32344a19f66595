use std::collections::HashSet;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::customer::CustomerRecord;
use crate::domain::resource::ResourceRecord;

pub const CUSTOMERS_SHEET: &str = "customers";
pub const RESOURCES_SHEET: &str = "resources";

const CUSTOMER_COLUMN: &str = "customer";
const HOURS_COLUMN: &str = "hours";
const USERSTORY_COLUMN: &str = "userstory";
const RESOURCE_COLUMN: &str = "resource";

#[derive(Error, Debug)]
pub enum WorkbookReadError {
    #[error("input workbook not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        source: calamine::Error,
    },
    #[error("failed to read sheet '{sheet}': {source}")]
    ReadSheet {
        sheet: String,
        source: calamine::Error,
    },
    #[error("workbook has no '{0}' sheet")]
    MissingSheet(String),
    #[error("sheet '{sheet}' is missing required column '{column}'")]
    MissingColumn { sheet: String, column: String },
    #[error("sheet '{0}' has no data rows")]
    EmptySheet(String),
    #[error("sheet '{sheet}' row {row}: column '{column}' is empty")]
    EmptyCell {
        sheet: String,
        row: u32,
        column: String,
    },
    #[error("sheet '{sheet}' row {row}: column '{column}' must be an integer, got '{value}'")]
    NotAnInteger {
        sheet: String,
        row: u32,
        column: String,
        value: String,
    },
    #[error("sheet '{sheet}' row {row}: column '{column}' holds an error value '{value}'")]
    ErrorValue {
        sheet: String,
        row: u32,
        column: String,
        value: String,
    },
    #[error("sheet '{sheet}' row {row}: hours must be greater than zero, got {hours}")]
    NonPositiveHours { sheet: String, row: u32, hours: i64 },
}

impl WorkbookReadError {
    /// Missing sheets and columns, as opposed to bad cell contents.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            WorkbookReadError::MissingSheet(_) | WorkbookReadError::MissingColumn { .. }
        )
    }

    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            WorkbookReadError::NotFound(_)
                | WorkbookReadError::Open { .. }
                | WorkbookReadError::ReadSheet { .. }
        )
    }
}

/// Validated contents of an input workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationInput {
    pub customers: Vec<CustomerRecord>,
    pub resources: Vec<ResourceRecord>,
}

/// Opens the workbook at `path` (xlsx, xlsm, xls or ods) and reads the
/// `customers` and `resources` sheets.
///
/// # Errors
/// - Returns an error when the file is missing or cannot be opened.
/// - Returns an error when a sheet or required column is missing.
/// - Returns an error on the first invalid cell, naming its sheet, row and column.
pub fn read_rotation_input<P: AsRef<Path>>(path: P) -> Result<RotationInput, WorkbookReadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(WorkbookReadError::NotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|source| WorkbookReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let sheet_names = workbook.sheet_names();
    let mut load = |sheet: &str| -> Result<Range<Data>, WorkbookReadError> {
        if !sheet_names.iter().any(|name| name == sheet) {
            return Err(WorkbookReadError::MissingSheet(sheet.to_string()));
        }
        workbook
            .worksheet_range(sheet)
            .map_err(|source| WorkbookReadError::ReadSheet {
                sheet: sheet.to_string(),
                source,
            })
    };
    let customers_range = load(CUSTOMERS_SHEET)?;
    let resources_range = load(RESOURCES_SHEET)?;

    let input = RotationInput {
        customers: parse_customers(&customers_range)?,
        resources: parse_resources(&resources_range)?,
    };
    debug!(
        path = %path.display(),
        customers = input.customers.len(),
        resources = input.resources.len(),
        "read rotation input"
    );
    Ok(input)
}

pub fn parse_customers(range: &Range<Data>) -> Result<Vec<CustomerRecord>, WorkbookReadError> {
    let table = Table::new(
        CUSTOMERS_SHEET,
        range,
        &[CUSTOMER_COLUMN, HOURS_COLUMN, USERSTORY_COLUMN],
    )?;

    let mut customers = Vec::new();
    for (row_number, row) in table.data_rows() {
        let name = table.text(row, row_number, 0)?;
        let hours = table.integer(row, row_number, 1)?;
        if hours <= 0 {
            return Err(WorkbookReadError::NonPositiveHours {
                sheet: CUSTOMERS_SHEET.to_string(),
                row: row_number,
                hours,
            });
        }
        let userstory_id = table.integer(row, row_number, 2)?;
        customers.push(CustomerRecord::new(name, hours, userstory_id));
    }

    if customers.is_empty() {
        return Err(WorkbookReadError::EmptySheet(CUSTOMERS_SHEET.to_string()));
    }
    Ok(customers)
}

/// Reads resource names, dropping repeated names after their first occurrence.
pub fn parse_resources(range: &Range<Data>) -> Result<Vec<ResourceRecord>, WorkbookReadError> {
    let table = Table::new(RESOURCES_SHEET, range, &[RESOURCE_COLUMN])?;

    let mut seen = HashSet::new();
    let mut resources = Vec::new();
    for (row_number, row) in table.data_rows() {
        let name = table.text(row, row_number, 0)?;
        if seen.insert(name.clone()) {
            resources.push(ResourceRecord::new(name));
        } else {
            warn!(resource = %name, row = row_number, "ignoring duplicate resource");
        }
    }

    if resources.is_empty() {
        return Err(WorkbookReadError::EmptySheet(RESOURCES_SHEET.to_string()));
    }
    Ok(resources)
}

/// A sheet whose first row is a header, with the positions of the required
/// columns resolved.
struct Table<'a> {
    sheet: &'static str,
    range: &'a Range<Data>,
    columns: Vec<(&'static str, usize)>,
}

impl<'a> Table<'a> {
    fn new(
        sheet: &'static str,
        range: &'a Range<Data>,
        required: &[&'static str],
    ) -> Result<Self, WorkbookReadError> {
        let header = range.rows().next().unwrap_or(&[]);
        let columns = required
            .iter()
            .map(|column| {
                header
                    .iter()
                    .position(|cell| match cell {
                        Data::String(text) => text.trim().eq_ignore_ascii_case(column),
                        _ => false,
                    })
                    .map(|position| (*column, position))
                    .ok_or_else(|| WorkbookReadError::MissingColumn {
                        sheet: sheet.to_string(),
                        column: column.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            sheet,
            range,
            columns,
        })
    }

    /// Non-blank rows after the header, paired with their 1-based row number
    /// as shown in a spreadsheet application.
    fn data_rows(&self) -> impl Iterator<Item = (u32, &'a [Data])> + 'a {
        let first_row = self.range.start().map(|(row, _)| row).unwrap_or(0);
        self.range
            .rows()
            .enumerate()
            .skip(1)
            .filter(|(_, row)| !row.iter().all(is_blank))
            .map(move |(offset, row)| (first_row + offset as u32 + 1, row))
    }

    fn cell<'r>(
        &self,
        row: &'r [Data],
        row_number: u32,
        column: usize,
    ) -> Result<&'r Data, WorkbookReadError> {
        let (name, position) = self.columns[column];
        match row.get(position) {
            Some(cell) if !is_blank(cell) => Ok(cell),
            _ => Err(WorkbookReadError::EmptyCell {
                sheet: self.sheet.to_string(),
                row: row_number,
                column: name.to_string(),
            }),
        }
    }

    fn text(
        &self,
        row: &[Data],
        row_number: u32,
        column: usize,
    ) -> Result<String, WorkbookReadError> {
        match self.cell(row, row_number, column)? {
            Data::String(text) => Ok(text.trim().to_string()),
            Data::Error(error) => Err(self.error_value(row_number, column, error.to_string())),
            other => Ok(other.to_string()),
        }
    }

    fn integer(
        &self,
        row: &[Data],
        row_number: u32,
        column: usize,
    ) -> Result<i64, WorkbookReadError> {
        let cell = self.cell(row, row_number, column)?;
        let value = match cell {
            Data::Int(value) => Some(*value),
            Data::Float(value) => integral(*value),
            Data::String(text) => {
                let text = text.trim();
                text.parse::<i64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(integral))
            }
            Data::Error(error) => {
                return Err(self.error_value(row_number, column, error.to_string()));
            }
            _ => None,
        };

        value.ok_or_else(|| WorkbookReadError::NotAnInteger {
            sheet: self.sheet.to_string(),
            row: row_number,
            column: self.columns[column].0.to_string(),
            value: cell.to_string(),
        })
    }

    fn error_value(&self, row_number: u32, column: usize, value: String) -> WorkbookReadError {
        WorkbookReadError::ErrorValue {
            sheet: self.sheet.to_string(),
            row: row_number,
            column: self.columns[column].0.to_string(),
            value,
        }
    }
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
