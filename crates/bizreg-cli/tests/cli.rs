//! CLI smoke tests against the built binary.

use assert_cmd::Command;
use predicates::prelude::*;

const LICENSE_TEXT: &str = "\
사업자등록증
등록번호: 123-45-67890
상호: 테스트컴퍼니
대표자: 홍길동
개업연월일: 2020년 3월 5일
";

#[test]
fn parse_text_file_outputs_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("license.txt");
    std::fs::write(&input, LICENSE_TEXT).unwrap();

    Command::cargo_bin("bizreg")
        .unwrap()
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"businessNumber\": \"123-45-67890\""))
        .stdout(predicate::str::contains("\"establishedAt\": \"2020-03-05\""));
}

#[test]
fn parse_text_format_summarizes_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("license.txt");
    std::fs::write(&input, LICENSE_TEXT).unwrap();

    Command::cargo_bin("bizreg")
        .unwrap()
        .args(["parse", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("대표자: 홍길동"))
        .stdout(predicate::str::contains("소재지: -"));
}

#[test]
fn parse_missing_file_fails() {
    Command::cargo_bin("bizreg")
        .unwrap()
        .args(["parse", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn parse_image_without_ocr_configured_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("license.jpg");
    std::fs::write(&input, b"not-an-image").unwrap();

    Command::cargo_bin("bizreg")
        .unwrap()
        .arg("parse")
        .arg(&input)
        .env_remove("CLOVA_OCR_URL")
        .env_remove("CLOVA_OCR_SECRET")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CLOVA OCR is not configured"));
}

#[test]
fn config_show_prints_defaults() {
    Command::cargo_bin("bizreg")
        .unwrap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bind\""));
}
