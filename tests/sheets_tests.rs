use assert_fs::prelude::*;
use predicates::prelude::*;

mod common;

use common::{read_sheet, round_robin, sheet_names, write_input};

#[test]
fn sheets_writes_one_shuffled_sheet_per_resource() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("input.xlsx");
    let output = temp.child("sheets.xlsx");
    write_input(
        input.path(),
        &[("A", 15, 100), ("B", 30, 200), ("C", 45, 300)],
        &["Ana", "Ben", "Ana"],
    );
    let output_arg = output.path().to_str().unwrap();

    round_robin()
        .args([
            "sheets",
            "-i",
            input.path().to_str().unwrap(),
            "-o",
            output_arg,
            "-n",
            "60",
            "-s",
            "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Sheets for 2 resources written to {output_arg}"
        )));

    assert_eq!(
        sheet_names(output.path()),
        vec!["Ana".to_string(), "Ben".to_string()]
    );

    let ana = read_sheet(output.path(), "Ana");
    let ben = read_sheet(output.path(), "Ben");
    assert_eq!(ana[0], vec!["customer", "ceremony", "claimed", "what"]);
    assert_eq!(ana.len(), 61);
    assert_eq!(ben.len(), 61);
    assert_ne!(ana, ben);

    let count = |rows: &[Vec<String>], name: &str| {
        rows[1..].iter().filter(|row| row[0] == name).count()
    };
    for rows in [&ana, &ben] {
        assert_eq!(count(&rows[..], "A"), 10);
        assert_eq!(count(&rows[..], "B"), 20);
        assert_eq!(count(&rows[..], "C"), 30);
    }
    let b_row = ana[1..].iter().find(|row| row[0] == "B").unwrap();
    assert_eq!(b_row[1], "200: Data CoE ceremony");
}

#[test]
fn sheets_uses_ceremony_label_from_environment() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("input.xlsx");
    let output = temp.child("sheets.xlsx");
    write_input(input.path(), &[("A", 15, 7)], &["Ana"]);

    round_robin()
        .env("CEREMONY_LABEL", "Standup")
        .args([
            "sheets",
            "-i",
            input.path().to_str().unwrap(),
            "-o",
            output.path().to_str().unwrap(),
            "-n",
            "3",
        ])
        .assert()
        .success();

    let rows = read_sheet(output.path(), "Ana");
    assert_eq!(rows.len(), 4);
    assert!(rows[1..].iter().all(|row| row[1] == "7: Standup"));
}
