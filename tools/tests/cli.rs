use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn tools() -> Command {
    Command::cargo_bin("bcdec-tools").unwrap()
}

#[test]
fn encode_packed_negative() {
    tools()
        .args(["encode", "-123", "--format", "packed"])
        .assert()
        .success()
        .stdout("123D\n");
}

#[test]
fn encode_zoned_ebcdic_fixed_width() {
    tools()
        .args([
            "encode", "42", "--format", "zoned", "--charset", "ebcdic", "--width", "4",
        ])
        .assert()
        .success()
        .stdout("F0F0F4C2\n");
}

#[test]
fn encode_json_report() {
    tools()
        .args(["encode", "123", "--format", "zoned", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hex\": \"313233\""))
        .stdout(predicate::str::contains("\"charset\": \"ascii\""));
}

#[test]
fn encode_width_too_small_fails() {
    tools()
        .args(["encode", "123456", "--format", "packed", "--width", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output buffer too small"));
}

#[test]
fn encode_huge_width_fails_cleanly() {
    tools()
        .args([
            "encode",
            "1",
            "--format",
            "zoned",
            "--width",
            "18446744073709551615",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exceeds the maximum"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn decode_hex_field() {
    tools()
        .args(["decode", "0x123D", "--format", "packed"])
        .assert()
        .success()
        .stdout("-123\n");

    tools()
        .args(["decode", "31 32 73", "--format", "zoned"])
        .assert()
        .success()
        .stdout("-123\n");
}

#[test]
fn decode_reports_invalid_sign_with_hex_dump() {
    tools()
        .args(["decode", "012F", "--format", "packed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sign part"))
        .stderr(predicate::str::contains("012F"));
}

#[test]
fn decode_lenient_accepts_unsigned_nibble() {
    tools()
        .args(["decode", "012F", "--format", "packed", "--lenient"])
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn decode_field_from_record_file() {
    let mut record = tempfile::NamedTempFile::new().unwrap();
    // "AB" + packed -4321 + zoned 57
    record
        .write_all(&[0x41, 0x42, 0x04, 0x32, 0x1D, 0x35, 0x37])
        .unwrap();
    let path = record.path().to_str().unwrap().to_owned();

    tools()
        .args([
            "decode", "--format", "packed", "--file", &path, "--offset", "2", "--len", "3",
        ])
        .assert()
        .success()
        .stdout("-4321\n");

    tools()
        .args(["decode", "--format", "zoned", "--file", &path, "--offset", "5"])
        .assert()
        .success()
        .stdout("57\n");
}

#[test]
fn decode_field_past_end_fails() {
    let mut record = tempfile::NamedTempFile::new().unwrap();
    record.write_all(&[0x12, 0x3C]).unwrap();
    let path = record.path().to_str().unwrap().to_owned();

    tools()
        .args([
            "decode", "--format", "packed", "--file", &path, "--offset", "1", "--len", "4",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("past the end"));
}

#[test]
fn decode_requires_hex_or_file() {
    tools().args(["decode", "--format", "packed"]).assert().failure();
}

#[test]
fn inspect_pretty_marks_invalid_nibble() {
    tools()
        .args(["inspect", "1B3C", "--format", "packed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nibble  1: 0xB INVALID"))
        .stdout(predicate::str::contains("error: invalid digit part"));
}

#[test]
fn inspect_json_roles() {
    tools()
        .args(["inspect", "3071", "--format", "zoned", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"role\": \"pad\""))
        .stdout(predicate::str::contains("\"role\": \"sign\""))
        .stdout(predicate::str::contains("\"value\": -1"));
}
