use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn bin() -> Command {
    Command::cargo_bin("qif2json").expect("binary 'qif2json' not found")
}

const BANK_EXPORT: &str = "!Account\nNChecking\nTBank\nDMain chequing\n^\n\
                           !Type:Bank\nD1/1/2020\nPGrocery\nT-50.00\nLFood\n^\n";

#[test]
fn shows_help() {
    let mut cmd = bin();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage").or(predicate::str::contains("USAGE")));
}

#[test]
fn shows_version() {
    let mut cmd = bin();
    cmd.arg("--version");
    cmd.assert().success();
}

#[test]
fn converts_bank_export() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.qif");
    let output = dir.path().join("out.json");
    fs::write(&input, BANK_EXPORT).unwrap();

    let mut cmd = bin();
    cmd.args([input.to_str().unwrap(), output.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("JSON file generated"));

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains("\"Name\": \"Checking\""));
    assert!(json.contains("\"Description\": \"Main chequing\""));
    assert!(json.contains("\"Transaction Count\": 1"));
    assert!(json.contains("\"Amount\": \"-50.00\""));
}

#[test]
fn cp1252_is_the_default_encoding() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.qif");
    let output = dir.path().join("out.json");
    // 0x92 is the cp1252 right single quote
    fs::write(
        &input,
        b"!Account\nNCard\n^\n!Type:Bank\nD1/1/2020\nPJoe\x92s Diner\n^\n",
    )
    .unwrap();

    let mut cmd = bin();
    cmd.args([input.to_str().unwrap(), output.to_str().unwrap()]);
    cmd.assert().success();

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains("Joe\u{2019}s Diner"));
}

#[test]
fn utf8_encoding_flag() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.qmtf");
    let output = dir.path().join("out.json");
    fs::write(
        &input,
        "!Account\nNCarte de crédit\n^\n!Type:Bank\nD1/1/2020\nPCafé\n^\n",
    )
    .unwrap();

    let mut cmd = bin();
    cmd.args([
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--encoding",
        "utf-8",
    ]);
    cmd.assert().success();

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains("Carte de crédit"));
    assert!(json.contains("Café"));
}

#[test]
fn no_account_defaults_omits_missing_fields() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.qif");
    let output = dir.path().join("out.json");
    fs::write(&input, "!Account\nNChecking\n^\n!Type:Bank\nPGrocery\n^\n").unwrap();

    let mut cmd = bin();
    cmd.args([
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--no-account-defaults",
    ]);
    cmd.assert().success();

    let json = fs::read_to_string(&output).unwrap();
    assert!(!json.contains("\"Description\""));
    // transaction defaults still apply
    assert!(json.contains("\"Date\": \"\""));
}

#[test]
fn rejects_unsupported_extension() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.txt");
    let output = dir.path().join("out.json");
    fs::write(&input, BANK_EXPORT).unwrap();

    let mut cmd = bin();
    cmd.args([input.to_str().unwrap(), output.to_str().unwrap()]);
    cmd.assert().failure();
    assert!(!output.exists());
}

#[test]
fn rejects_unterminated_final_record() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.qif");
    let output = dir.path().join("out.json");
    fs::write(
        &input,
        "!Account\nNChecking\n^\n!Type:Bank\nD1/1/2020\nPGrocery",
    )
    .unwrap();

    let mut cmd = bin();
    cmd.args([input.to_str().unwrap(), output.to_str().unwrap()]);
    cmd.assert().failure();
    // nothing was written: parsing fails before the output is created
    assert!(!output.exists());
}
