mod amount;
mod errors;

pub use amount::{deserialize_amount, parse_amount};
pub use errors::LoadError;

pub type AccountId = i64;
pub type LedgerTransactionId = i64;
