use rust_decimal::Decimal;
use serde::Serialize;

/// One line of an external feed such as a bank statement export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalRecord {
    pub external_id: String,
    pub amount: Decimal,
    /// Already in external vocabulary and upper-cased by the loader.
    #[serde(rename = "type")]
    pub record_type: String,
    pub reference: String
}
