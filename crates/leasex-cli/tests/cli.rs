//! End-to-end tests for the leasex binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LEASE: &str = "הסכם שכירות\nנחתם ביום 14 אפריל 2025\nהשוכר: דנה לוי\n\
תקופה: מיום 01/05/2025 ועד 30.4.2026\nדמי שכירות: ₪4,500 לחודש\nסעיף 123\n";

const PARKING: &str = "חוזה חניה\nלבין: אמיר עזר\nמחיר 400 ש\"ח לחודש\nמ-1/10/2025 עד 1/10/2026\n";

/// A command isolated from the user's real configuration directory.
fn leasex(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("leasex").unwrap();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

fn fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("תובל 22.txt"), LEASE).unwrap();
    fs::write(dir.path().join("חניה 21.txt"), PARKING).unwrap();
    fs::write(dir.path().join("broken.pdf"), b"not a pdf").unwrap();
    fs::write(dir.path().join("notes.docx"), b"ignored").unwrap();
    dir
}

#[test]
fn extract_prints_json_preview() {
    let home = tempfile::tempdir().unwrap();
    let docs = fixture_dir();

    let output = leasex(home.path())
        .arg("extract")
        .arg(docs.path().join("תובל 22.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let preview: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(preview["property"], "תובל 22");
    assert_eq!(preview["tenant"], "דנה לוי");
    assert_eq!(
        preview["dates"],
        serde_json::json!(["2025-04-14", "2025-05-01", "2026-04-30"])
    );
    assert_eq!(preview["start_date"], "2025-04-14");
    assert_eq!(preview["end_date"], "2026-04-30");
    assert_eq!(preview["amounts"], serde_json::json!([4500]));
    assert_eq!(preview["monthly_rent"], 4500);
}

#[test]
fn extract_text_format() {
    let home = tempfile::tempdir().unwrap();
    let docs = fixture_dir();

    leasex(home.path())
        .args(["extract", "--format", "text"])
        .arg(docs.path().join("תובל 22.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Tenant:   דנה לוי"))
        .stdout(predicate::str::contains("Monthly rent: ₪4,500"));
}

#[test]
fn extract_unreadable_pdf_yields_empty_candidates() {
    let home = tempfile::tempdir().unwrap();
    let docs = fixture_dir();

    let output = leasex(home.path())
        .arg("extract")
        .arg(docs.path().join("broken.pdf"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let preview: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(preview["tenant"], serde_json::Value::Null);
    assert_eq!(preview["dates"], serde_json::json!([]));
    assert_eq!(preview["amounts"], serde_json::json!([]));
}

#[test]
fn extract_missing_file_fails() {
    let home = tempfile::tempdir().unwrap();

    leasex(home.path())
        .args(["extract", "/definitely/not/here.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn scan_writes_contracts_and_summary() {
    let home = tempfile::tempdir().unwrap();
    let docs = fixture_dir();
    let out = tempfile::tempdir().unwrap();

    leasex(home.path())
        .arg("scan")
        .arg(docs.path())
        .arg("--output-dir")
        .arg(out.path())
        .args(["--summary", "-j", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 documents"));

    let contracts: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("contracts.json")).unwrap())
            .unwrap();
    let contracts = contracts.as_array().unwrap();
    assert_eq!(contracts.len(), 3);

    // Sorted by file name: broken.pdf, חניה 21.txt, תובל 22.txt
    assert_eq!(contracts[0]["property"], "broken");
    assert_eq!(contracts[0]["monthly_rent"], serde_json::Value::Null);

    // 400 is below the batch floor
    assert_eq!(contracts[1]["tenant_name"], "אמיר עזר");
    assert_eq!(contracts[1]["monthly_rent"], serde_json::Value::Null);
    assert_eq!(contracts[1]["start_date"], "2025-10-01");
    assert_eq!(contracts[1]["end_date"], "2026-10-01");

    assert_eq!(contracts[2]["monthly_rent"], 4500);
    assert_eq!(contracts[2]["currency"], "ILS");

    let summary = fs::read_to_string(out.path().join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,tenant_name,property"));
    assert_eq!(summary.lines().count(), 4);
}

#[test]
fn scan_respects_custom_window_from_config() {
    let home = tempfile::tempdir().unwrap();
    let docs = fixture_dir();
    let out = tempfile::tempdir().unwrap();
    let config = home.path().join("config.json");

    leasex(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    leasex(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "batch.min_amount", "300"])
        .assert()
        .success();

    leasex(home.path())
        .arg("--config")
        .arg(&config)
        .arg("scan")
        .arg(docs.path())
        .arg("--output-dir")
        .arg(out.path())
        .assert()
        .success();

    let contracts: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("contracts.json")).unwrap())
            .unwrap();
    assert_eq!(contracts[1]["monthly_rent"], 400);
}

#[test]
fn scan_empty_folder_fails() {
    let home = tempfile::tempdir().unwrap();
    let empty = tempfile::tempdir().unwrap();

    leasex(home.path())
        .arg("scan")
        .arg(empty.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No lease documents found"));
}

#[test]
fn config_get_reads_defaults() {
    let home = tempfile::tempdir().unwrap();

    leasex(home.path())
        .args(["config", "get", "batch.max_amount"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100000"));
}
