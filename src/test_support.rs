use std::path::Path;

use calamine::{Data, Range};
use rust_xlsxwriter::Workbook;

use crate::domain::customer::CustomerRecord;
use crate::domain::resource::ResourceRecord;

pub fn customers(rows: &[(&str, i64, i64)]) -> Vec<CustomerRecord> {
    rows.iter()
        .map(|(name, hours, userstory_id)| CustomerRecord::new(*name, *hours, *userstory_id))
        .collect()
}

pub fn resources(names: &[&str]) -> Vec<ResourceRecord> {
    names.iter().map(|name| ResourceRecord::new(*name)).collect()
}

pub fn text(value: &str) -> Data {
    Data::String(value.to_string())
}

/// Builds an in-memory sheet starting at A1.
pub fn sheet(rows: Vec<Vec<Data>>) -> Range<Data> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if rows.is_empty() || width == 0 {
        return Range::empty();
    }
    let mut range = Range::new((0, 0), (rows.len() as u32 - 1, width as u32 - 1));
    for (row_index, row) in rows.into_iter().enumerate() {
        for (column_index, value) in row.into_iter().enumerate() {
            range.set_value((row_index as u32, column_index as u32), value);
        }
    }
    range
}

/// Writes an input workbook with `customers` and `resources` sheets.
pub fn write_workbook(path: &Path, customers: &[(&str, i64, i64)], resources: &[&str]) {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("customers").unwrap();
    sheet.write_string(0, 0, "customer").unwrap();
    sheet.write_string(0, 1, "hours").unwrap();
    sheet.write_string(0, 2, "userstory").unwrap();
    for (index, (name, hours, userstory_id)) in customers.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_string(row, 0, *name).unwrap();
        sheet.write_number(row, 1, *hours as f64).unwrap();
        sheet.write_number(row, 2, *userstory_id as f64).unwrap();
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("resources").unwrap();
    sheet.write_string(0, 0, "resource").unwrap();
    for (index, name) in resources.iter().enumerate() {
        sheet.write_string(index as u32 + 1, 0, *name).unwrap();
    }

    workbook.save(path).unwrap();
}

pub fn cell_strings(range: &Range<Data>) -> Vec<Vec<String>> {
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}
