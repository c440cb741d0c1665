use crate::models::LedgerTransaction;
use crate::storage::{LedgerSource, Scope};
use crate::types::{LedgerTransactionId, LoadError};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory ledger that can be fed concurrently, e.g. by a change stream consumer.
pub struct LedgerStorage {
    transactions: Arc<DashMap<LedgerTransactionId, LedgerTransaction>>
}

impl LedgerStorage {
    pub fn new() -> Self {
        Self {
            transactions: Arc::new(DashMap::new())
        }
    }

    /// Records a posted transaction, returning the one it replaced if the id was already known.
    pub fn record(&self, transaction: LedgerTransaction) -> Option<LedgerTransaction> {
        self.transactions.insert(transaction.id, transaction)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl Default for LedgerStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<LedgerTransaction> for LedgerStorage {
    fn from_iter<I: IntoIterator<Item = LedgerTransaction>>(iter: I) -> Self {
        let storage = Self::new();

        for transaction in iter {
            storage.record(transaction);
        }

        storage
    }
}

impl LedgerSource for LedgerStorage {
    /// Snapshots the matching transactions ordered by ledger id.
    fn transactions(&self, scope: Scope) -> Result<Vec<LedgerTransaction>, LoadError> {
        let mut snapshot: Vec<LedgerTransaction> = self.transactions.iter()
            .filter(|item| scope.includes(item.value()))
            .map(|item| item.value().clone())
            .collect();

        snapshot.sort_by_key(|transaction| transaction.id);

        Ok(snapshot)
    }
}
