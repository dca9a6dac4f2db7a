//! CLI command tests
//!
//! This module contains tests for the command implementations, driven
//! through temp transaction files.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use tally_core::TransactionKind;

use crate::commands::{self, load_transactions, resolve_now};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn sample_csv() -> &'static str {
    "id,date,kind,amount,category\n\
     t1,2025-06-01,income,3000.00,\n\
     t2,2025-06-02,expense,1200.00,rent\n\
     t3,2025-06-10,expense,180.50,food\n"
}

// ========== Loading Tests ==========

#[test]
fn test_load_csv_transactions() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "tx.csv", sample_csv());

    let txs = load_transactions(&path).unwrap();
    assert_eq!(txs.len(), 3);
    assert_eq!(txs[0].kind, TransactionKind::Income);
    assert_eq!(txs[1].category, "rent");
}

#[test]
fn test_load_csv_screens_malformed_rows() {
    let dir = TempDir::new().unwrap();
    let csv = "id,date,kind,amount,category\n\
               ok,2025-06-01,income,100.00,\n\
               nocat,2025-06-02,expense,50.00,\n";
    let path = write_file(&dir, "tx.csv", csv);

    let txs = load_transactions(&path).unwrap();
    // the uncategorized expense is dropped at ingestion
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].id, "ok");
}

#[test]
fn test_load_json_transactions() {
    let dir = TempDir::new().unwrap();
    let json = r#"[
        {"id": "t1", "date": "2025-06-01", "amount": 40.0, "kind": "expense", "category": "food"},
        {"id": "t2", "date": "2025-06-03", "amount": 900.0, "kind": "income"}
    ]"#;
    let path = write_file(&dir, "tx.json", json);

    let txs = load_transactions(&path).unwrap();
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[1].category, "");
}

#[test]
fn test_load_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "tx.xlsx", "not a spreadsheet");
    assert!(load_transactions(&path).is_err());
}

#[test]
fn test_load_profile_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "profile.json",
        r#"{"name": "Sam", "savings_goal_percent": 25.0}"#,
    );
    let profile = tally_core::load_profile(Some(&path)).unwrap();
    assert_eq!(profile.savings_goal_percent, Some(25.0));
}

// ========== Command Tests ==========

#[test]
fn test_resolve_now() {
    let fixed = resolve_now(Some("2025-06-15")).unwrap();
    assert_eq!(fixed.to_string(), "2025-06-15");
    assert!(resolve_now(Some("June 15")).is_err());
    assert!(resolve_now(None).is_ok());
}

#[test]
fn test_cmd_chart_runs_with_fixed_now() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "tx.csv", sample_csv());
    let result = commands::cmd_chart(&path, "monthly", Some("2025-06-15"), false);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_chart_rejects_unknown_range() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "tx.csv", sample_csv());
    let result = commands::cmd_chart(&path, "quarterly", Some("2025-06-15"), false);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("quarterly"));
}

#[test]
fn test_cmd_summary_and_insights_run() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "tx.csv", sample_csv());

    assert!(commands::cmd_summary(&path, false).is_ok());
    assert!(commands::cmd_summary(&path, true).is_ok());
    assert!(commands::cmd_insights(&path, None, false).is_ok());
    assert!(commands::cmd_insights(&path, None, true).is_ok());
}
