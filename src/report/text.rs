use std::fmt;
use std::fmt::{Display, Formatter};

use crate::engine::{MatchOutcome, MatchedPair};
use crate::models::{ExternalRecord, LedgerTransaction};

const MATCHED_HEADER: &str = "[Transactions Found in Both Systems (Exact Match on Type & Amount)]";
const MISMATCHED_HEADER: &str = "[Potential Matches with Mismatched Amounts (Same Type)]";
const ONLY_LEDGER_HEADER: &str = "[Transactions Only in Ledger]";
const ONLY_EXTERNAL_HEADER: &str = "[Transactions Only in External Feed]";

/// Human-readable rendering of a `MatchOutcome`.
///
/// Sections always appear in the same order and an empty one reads `None`.
pub struct TextReport<'o, 'a>(pub &'o MatchOutcome<'a>);

impl Display for TextReport<'_, '_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let outcome = self.0;

        writeln!(formatter, "--- Reconciliation Report ---")?;

        write_section(formatter, MATCHED_HEADER, &outcome.matched, |formatter, pair| write_pair(formatter, "MATCH", "with", pair))?;
        write_section(formatter, MISMATCHED_HEADER, &outcome.mismatched_amount, |formatter, pair| write_pair(formatter, "MISMATCH_AMOUNT", "vs", pair))?;
        write_section(formatter, ONLY_LEDGER_HEADER, &outcome.only_ledger, |formatter, transaction| write_ledger(formatter, transaction))?;
        write_section(formatter, ONLY_EXTERNAL_HEADER, &outcome.only_external, |formatter, record| write_external(formatter, record))?;

        writeln!(formatter)?;
        writeln!(formatter, "--- End of Reconciliation Report ---")
    }
}

fn write_section<T, F>(formatter: &mut Formatter<'_>, header: &str, entries: &[T], mut write_entry: F) -> fmt::Result
where
    F: FnMut(&mut Formatter<'_>, &T) -> fmt::Result,
{
    writeln!(formatter)?;
    writeln!(formatter, "{header}")?;

    if entries.is_empty() {
        return writeln!(formatter, "  None")
    }

    for entry in entries {
        write!(formatter, "  ")?;
        write_entry(formatter, entry)?;
        writeln!(formatter)?;
    }

    Ok(())
}

fn write_pair(formatter: &mut Formatter<'_>, label: &str, joiner: &str, pair: &MatchedPair<'_>) -> fmt::Result {
    write!(
        formatter,
        "{label}: Ledger ID {} ({:.2} {}) {joiner} External ID {} ({:.2} {}, Ref: {})",
        pair.ledger.id,
        pair.ledger.amount,
        pair.normalized_type,
        pair.external.external_id,
        pair.external.amount,
        pair.external.record_type,
        pair.external.reference
    )
}

fn write_ledger(formatter: &mut Formatter<'_>, transaction: &LedgerTransaction) -> fmt::Result {
    write!(
        formatter,
        "Ledger ID: {}, Type: {}, Amount: {:.2}, Desc: {}",
        transaction.id,
        transaction.transaction_type,
        transaction.amount,
        transaction.description.as_deref().unwrap_or_default()
    )
}

fn write_external(formatter: &mut Formatter<'_>, record: &ExternalRecord) -> fmt::Result {
    write!(
        formatter,
        "External ID: {}, Type: {}, Amount: {:.2}, Ref: {}",
        record.external_id,
        record.record_type,
        record.amount,
        record.reference
    )
}
