//! End-to-end tests for the resi binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn entry_parses_withdrawal() {
    let mut cmd = Command::cargo_bin("resi").unwrap();
    cmd.args(["entry", "tarik", "200000", "ATM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"amount\":200000"))
        .stdout(predicate::str::contains("\"withdrawal\""))
        .stdout(predicate::str::contains("ATM"));
}

#[test]
fn entry_without_amount_still_succeeds() {
    let mut cmd = Command::cargo_bin("resi").unwrap();
    cmd.args(["entry", "qris", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"qris\""))
        .stdout(predicate::str::contains("\"amount\"").not());
}

#[test]
fn scan_reads_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("receipt.txt");
    std::fs::write(
        &path,
        "QRIS\nMerchant: Warung Kopi\nTotal Transaksi Rp 25.000\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("resi").unwrap();
    cmd.args(["scan", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"amount\":25000"))
        .stdout(predicate::str::contains("Warung Kopi"));
}

#[test]
fn scan_rejects_missing_file() {
    let mut cmd = Command::cargo_bin("resi").unwrap();
    cmd.args(["scan", "/no/such/file.txt"]).assert().failure();
}

#[test]
fn scan_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("receipt.txt");
    std::fs::write(&path, "tarik tunai atm\nRp 300.000\n").unwrap();

    let mut cmd = Command::cargo_bin("resi").unwrap();
    cmd.args(["scan", path.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Penarikan"))
        .stdout(predicate::str::contains("Rp 300000"));
}
