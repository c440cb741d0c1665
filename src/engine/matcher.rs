use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use tracing::debug;

use crate::engine::normalize;
use crate::models::{ExternalRecord, LedgerTransaction};

/// A ledger transaction paired with the external record it was reconciled against.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedPair<'a> {
    pub ledger: &'a LedgerTransaction,
    pub external: &'a ExternalRecord,
    /// The ledger type as it was compared against the external vocabulary.
    pub normalized_type: String
}

/// The four disjoint buckets of one reconciliation run.
///
/// Every ledger slot ends up in exactly one of `matched`, `mismatched_amount`
/// or `only_ledger`, and every external slot in exactly one of `matched`,
/// `mismatched_amount` or `only_external`. Each bucket keeps classification order.
#[derive(Debug, Default, Serialize)]
pub struct MatchOutcome<'a> {
    pub matched: Vec<MatchedPair<'a>>,
    pub mismatched_amount: Vec<MatchedPair<'a>>,
    pub only_ledger: Vec<&'a LedgerTransaction>,
    pub only_external: Vec<&'a ExternalRecord>
}

impl MatchOutcome<'_> {
    /// True when every record on both sides found an exact counterpart.
    pub fn is_reconciled(&self) -> bool {
        self.mismatched_amount.is_empty() && self.only_ledger.is_empty() && self.only_external.is_empty()
    }

    pub fn summary(&self) -> OutcomeSummary {
        OutcomeSummary {
            matched: self.matched.len(),
            mismatched_amount: self.mismatched_amount.len(),
            only_ledger: self.only_ledger.len(),
            only_external: self.only_external.len()
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct OutcomeSummary {
    pub matched: usize,
    pub mismatched_amount: usize,
    pub only_ledger: usize,
    pub only_external: usize
}

impl Display for OutcomeSummary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "matched [{}], mismatched amount [{}], only in ledger [{}], only in external feed [{}]",
            self.matched, self.mismatched_amount, self.only_ledger, self.only_external
        )
    }
}

/// Pairs ledger transactions with external records.
///
/// Ledger transactions are visited in input order. Each one first scans the open
/// external records in feed order for the same normalized type and an exactly
/// equal amount, and only when that finds nothing scans again for the type alone.
/// The first acceptable record is taken, so an early type-only pair can claim a
/// record that a later ledger transaction would have matched exactly.
pub fn reconcile<'a>(ledger: &'a [LedgerTransaction], external: &'a [ExternalRecord]) -> MatchOutcome<'a> {
    let mut matcher = Matcher::new(ledger, external);
    let mut matched = Vec::new();
    let mut mismatched_amount = Vec::new();

    for ledger_slot in 0..ledger.len() {
        if let Some(pair) = matcher.pair(ledger_slot, |transaction, record| transaction.amount == record.amount) {
            matched.push(pair);
        } else if let Some(pair) = matcher.pair(ledger_slot, |_, _| true) {
            mismatched_amount.push(pair);
        }
    }

    matcher.finish(matched, mismatched_amount)
}

/// Consumed flags for one run, indexed by input slot.
struct ConsumedSlots {
    ledger: Vec<bool>,
    external: Vec<bool>
}

impl ConsumedSlots {
    fn new(ledger_len: usize, external_len: usize) -> Self {
        Self {
            ledger: vec![false; ledger_len],
            external: vec![false; external_len]
        }
    }

    fn consume(&mut self, ledger_slot: usize, external_slot: usize) {
        self.ledger[ledger_slot] = true;
        self.external[external_slot] = true;
    }
}

struct Matcher<'a> {
    ledger: &'a [LedgerTransaction],
    external: &'a [ExternalRecord],
    normalized_types: Vec<String>,
    slots: ConsumedSlots
}

impl<'a> Matcher<'a> {
    fn new(ledger: &'a [LedgerTransaction], external: &'a [ExternalRecord]) -> Self {
        // Computed once so both scans compare against the same string.
        let normalized_types = ledger.iter()
            .map(|transaction| normalize(&transaction.transaction_type, transaction.from_account.is_some(), transaction.to_account.is_some()))
            .collect();

        Self {
            ledger,
            external,
            normalized_types,
            slots: ConsumedSlots::new(ledger.len(), external.len())
        }
    }

    /// Consumes the first open external record of the same normalized type that `accepts` allows.
    fn pair<F>(&mut self, ledger_slot: usize, accepts: F) -> Option<MatchedPair<'a>>
    where
        F: Fn(&LedgerTransaction, &ExternalRecord) -> bool,
    {
        if self.slots.ledger[ledger_slot] {
            return None
        }

        let (ledger, external) = (self.ledger, self.external);
        let transaction = &ledger[ledger_slot];
        let normalized_type = &self.normalized_types[ledger_slot];

        let (external_slot, record) = external.iter().enumerate().find(|(external_slot, record)| {
            !self.slots.external[*external_slot]
                && record.record_type == *normalized_type
                && accepts(transaction, record)
        })?;

        self.slots.consume(ledger_slot, external_slot);

        debug!("Ledger transaction [{}]:[{}] paired with external record [{}]", transaction.id, normalized_type, record.external_id);

        Some(MatchedPair {
            ledger: transaction,
            external: record,
            normalized_type: normalized_type.clone()
        })
    }

    fn finish(self, matched: Vec<MatchedPair<'a>>, mismatched_amount: Vec<MatchedPair<'a>>) -> MatchOutcome<'a> {
        let (ledger, external) = (self.ledger, self.external);

        let only_ledger = ledger.iter()
            .zip(&self.slots.ledger)
            .filter(|(_, consumed)| !**consumed)
            .map(|(transaction, _)| transaction)
            .collect();

        let only_external = external.iter()
            .zip(&self.slots.external)
            .filter(|(_, consumed)| !**consumed)
            .map(|(record, _)| record)
            .collect();

        MatchOutcome {
            matched,
            mismatched_amount,
            only_ledger,
            only_external
        }
    }
}
