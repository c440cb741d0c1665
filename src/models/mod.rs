mod errors;
mod external_record;
mod ledger_transaction;
#[cfg(test)]
mod tests;

pub use errors::RecordError;
pub use external_record::ExternalRecord;
pub use ledger_transaction::LedgerTransaction;
