use super::{LedgerTransaction, RecordError};

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

fn read_ledger_rows(content: &str) -> Result<Vec<LedgerTransaction>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    Ok(reader.deserialize::<LedgerTransaction>().collect::<Result<Vec<_>, _>>()?)
}

#[test]
fn test_ledger_row_with_empty_counterparts_deserializes_as_absent() -> Result<()> {
    let rows = read_ledger_rows("id,from_account,to_account,type,amount,description\n1,,7,DEPOSIT,100.00,\n")?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].from_account, None);
    assert_eq!(rows[0].to_account, Some(7));
    assert_eq!(rows[0].transaction_type, "DEPOSIT");
    assert_eq!(rows[0].amount, Decimal::from_str("100")?);
    assert_eq!(rows[0].description, None);

    Ok(())
}

#[test]
fn test_ledger_row_keeps_negative_amounts_and_descriptions() -> Result<()> {
    let rows = read_ledger_rows("id,from_account,to_account,type,amount,description\n2, 3 ,,withdrawal, -4.50 ,Coffee purchase\n")?;

    assert_eq!(rows[0].from_account, Some(3));
    assert_eq!(rows[0].transaction_type, "withdrawal");
    assert_eq!(rows[0].amount, Decimal::from_str("-4.5")?);
    assert_eq!(rows[0].description.as_deref(), Some("Coffee purchase"));

    Ok(())
}

#[test]
fn test_ledger_row_with_invalid_amount_fails_to_deserialize() {
    assert!(read_ledger_rows("id,from_account,to_account,type,amount,description\n3,,1,DEPOSIT,lots,\n").is_err());
}

#[test]
fn test_transaction_involves_either_side() -> Result<()> {
    let transaction = read_ledger_rows("id,from_account,to_account,type,amount,description\n4,1,2,TRANSFER,5,\n")?.remove(0);

    assert!(transaction.involves(1));
    assert!(transaction.involves(2));
    assert!(!transaction.involves(3));

    Ok(())
}

#[test]
fn test_record_errors_report_their_line() -> Result<()> {
    let too_few = RecordError::TooFewFields { line: 3, found: 2 };
    let invalid = RecordError::InvalidAmount {
        line: 5,
        value: "abc".to_string(),
        source: Decimal::from_str("abc").unwrap_err()
    };

    assert_eq!(too_few.line(), 3);
    assert_eq!(invalid.line(), 5);
    assert!(too_few.to_string().contains("found [2]"));
    assert!(invalid.to_string().contains("[abc]"));

    Ok(())
}
