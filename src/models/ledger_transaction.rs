use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{deserialize_amount, AccountId, LedgerTransactionId};

/// A transaction as posted by the system of record.
///
/// An absent `from_account` or `to_account` means the counterpart sits outside
/// the ledger. The sign of `amount` follows the ledger's own convention, so
/// withdrawals are usually negative.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LedgerTransaction {
    pub id: LedgerTransactionId,
    pub from_account: Option<AccountId>,
    pub to_account: Option<AccountId>,
    /// Ledger vocabulary (`DEPOSIT`, `WITHDRAWAL`, `TRANSFER`, ...), any case.
    #[serde(rename = "type")]
    pub transaction_type: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: Decimal,
    pub description: Option<String>
}

impl LedgerTransaction {
    /// Whether the account sits on either side of this transaction.
    pub fn involves(&self, account_id: AccountId) -> bool {
        self.from_account == Some(account_id) || self.to_account == Some(account_id)
    }
}
