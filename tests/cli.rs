use predicates::prelude::*;

mod common;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = common::round_robin();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("assign"))
        .stdout(predicate::str::contains("sheets"));
    Ok(())
}

#[test]
fn assign_requires_input() {
    let mut cmd = common::round_robin();
    cmd.arg("assign");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}
