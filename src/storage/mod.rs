mod csv_ledger;
mod ledger_storage;

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::LedgerTransaction;
use crate::types::{AccountId, LoadError};

pub use csv_ledger::CsvLedger;
pub use ledger_storage::LedgerStorage;

/// Which ledger transactions take part in a reconciliation run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Scope {
    All,
    Account(AccountId)
}

impl Scope {
    pub fn includes(&self, transaction: &LedgerTransaction) -> bool {
        match self {
            Scope::All => true,
            Scope::Account(account_id) => transaction.involves(*account_id)
        }
    }
}

impl Display for Scope {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => write!(formatter, "all accounts"),
            Scope::Account(account_id) => write!(formatter, "account {account_id}")
        }
    }
}

/// A read-only snapshot provider for the ledger side of a run.
///
/// Implementations must return transactions in a stable order, matching depends on it.
pub trait LedgerSource: Send + Sync + 'static {
    fn transactions(&self, scope: Scope) -> Result<Vec<LedgerTransaction>, LoadError>;
}
