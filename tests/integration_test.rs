use std::path::Path;
use std::process::{Command, Output};
use anyhow::Result;
use serde_json::Value;

fn run_reconciler(ledger: &str, external: &str, extra_args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-reconciler");

    Ok(Command::new(binary_path)
        .arg("--ledger")
        .arg(Path::new("samples").join(ledger))
        .arg("--external")
        .arg(Path::new("samples").join(external))
        .args(extra_args)
        .env_remove("RECONCILER_LOG_LEVEL")
        .output()?)
}

#[test]
fn test_cli_prints_full_report_for_samples() -> Result<()> {
    let output = run_reconciler("ledger.csv", "external.csv", &[])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let expected = "\
--- Reconciliation Report ---

[Transactions Found in Both Systems (Exact Match on Type & Amount)]
  MATCH: Ledger ID 1 (100.00 DEPOSIT) with External ID E1 (100.00 DEPOSIT, Ref: PAYROLL JUNE)
  MATCH: Ledger ID 3 (25.00 INTERNAL_TRANSFER) with External ID E3 (25.00 INTERNAL_TRANSFER, Ref: RENT)
  MATCH: Ledger ID 4 (75.50 TRANSFER_OUT) with External ID E4 (75.50 TRANSFER_OUT, Ref: INV-123)

[Potential Matches with Mismatched Amounts (Same Type)]
  MISMATCH_AMOUNT: Ledger ID 2 (-50.00 WITHDRAWAL) vs External ID E2 (-40.00 WITHDRAWAL, Ref: ATM 0042)

[Transactions Only in Ledger]
  Ledger ID: 5, Type: DEPOSIT, Amount: 10.00, Desc: Refund

[Transactions Only in External Feed]
  External ID: E5, Type: FEE, Amount: 5.00, Ref: MONTHLY FEE

--- End of Reconciliation Report ---
";

    assert_eq!(stdout, expected);

    Ok(())
}

#[test]
fn test_cli_limits_report_to_account_scope() -> Result<()> {
    let output = run_reconciler("ledger.csv", "external.csv", &["--account", "2"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("MATCH: Ledger ID 3"));
    assert!(stdout.contains("MATCH: Ledger ID 4"));
    assert!(stdout.contains("MISMATCH_AMOUNT: Ledger ID 5 (10.00 DEPOSIT) vs External ID E1"));
    assert!(!stdout.contains("Ledger ID 1 "));
    assert!(stdout.contains("External ID: E2"));
    assert!(stdout.contains("External ID: E5"));

    Ok(())
}

#[test]
fn test_cli_skips_malformed_external_rows_and_warns() -> Result<()> {
    let output = run_reconciler("ledger.csv", "external_malformed.csv", &["--log-level", "warn"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(stdout.contains("External ID E1"));
    assert!(stdout.contains("External ID E4"));
    assert!(!stdout.contains("E3"));
    assert!(!stdout.contains("E5"));
    assert_eq!(stderr.matches("Skipping").count(), 2);

    Ok(())
}

#[test]
fn test_cli_emits_json_when_requested() -> Result<()> {
    let output = run_reconciler("ledger.csv", "external.csv", &["--format", "json"])?;

    assert!(output.status.success());

    let document: Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(document["matched"].as_array().map(Vec::len), Some(3));
    assert_eq!(document["mismatched_amount"][0]["external"]["external_id"], "E2");
    assert_eq!(document["only_ledger"][0]["id"], 5);
    assert_eq!(document["only_external"][0]["external_id"], "E5");

    Ok(())
}

#[test]
fn test_cli_fails_without_report_for_missing_feed() -> Result<()> {
    let output = run_reconciler("ledger.csv", "missing.csv", &[])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}
