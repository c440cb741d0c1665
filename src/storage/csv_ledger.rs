use std::path::{Path, PathBuf};

use tracing::warn;

use crate::loader::open_feed;
use crate::models::LedgerTransaction;
use crate::storage::{LedgerSource, Scope};
use crate::types::LoadError;

/// A ledger export on disk with an `id,from_account,to_account,type,amount,description` header.
///
/// Transactions are returned in file order. The file is re-read on every call.
pub struct CsvLedger {
    path: PathBuf
}

impl CsvLedger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf()
        }
    }
}

impl LedgerSource for CsvLedger {
    fn transactions(&self, scope: Scope) -> Result<Vec<LedgerTransaction>, LoadError> {
        let mut reader = open_feed(&self.path)?;

        reader.headers().map_err(|source| LoadError::Header {
            path: self.path.clone(),
            source
        })?;

        let mut transactions = Vec::new();

        for result in reader.deserialize::<LedgerTransaction>() {
            match result {
                Ok(transaction) if scope.includes(&transaction) => transactions.push(transaction),
                Ok(_) => {}
                Err(error) => {
                    warn!("Skipping ledger row in [{}]: {error}", self.path.display());
                }
            }
        }

        Ok(transactions)
    }
}
