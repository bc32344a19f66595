#![allow(dead_code)]

use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use rust_xlsxwriter::Workbook;

pub const ROTATION_ENV_VARS: [&str; 4] = [
    "MAX_SAMPLES",
    "HOURS_DIVISOR",
    "RANDOM_SEED",
    "CEREMONY_LABEL",
];

/// Command for the built binary with the rotation environment variables cleared.
pub fn round_robin() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("round-robin");
    for var in ROTATION_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

pub fn write_input(path: &Path, customers: &[(&str, i64, i64)], resources: &[&str]) {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("customers").unwrap();
    for (column, header) in ["customer", "hours", "userstory"].iter().enumerate() {
        sheet.write_string(0, column as u16, *header).unwrap();
    }
    for (index, (name, hours, userstory)) in customers.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_string(row, 0, *name).unwrap();
        sheet.write_number(row, 1, *hours as f64).unwrap();
        sheet.write_number(row, 2, *userstory as f64).unwrap();
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("resources").unwrap();
    sheet.write_string(0, 0, "resource").unwrap();
    for (index, name) in resources.iter().enumerate() {
        sheet.write_string(index as u32 + 1, 0, *name).unwrap();
    }

    workbook.save(path).unwrap();
}

pub fn sheet_names(path: &Path) -> Vec<String> {
    open_workbook_auto(path).unwrap().sheet_names()
}

/// Cell contents of `sheet` rendered as text, header row included.
pub fn read_sheet(path: &Path, sheet: &str) -> Vec<Vec<String>> {
    let mut workbook = open_workbook_auto(path).unwrap();
    let range = workbook.worksheet_range(sheet).unwrap();
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}
