use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use std::str::FromStr;

/// Parses a feed amount into an exact decimal.
///
/// Plain notation is tried first, scientific notation (`2.5e2`) second, so any
/// amount a float parser would accept is read here without rounding.
pub fn parse_amount(value: &str) -> Result<Decimal, rust_decimal::Error> {
    let value = value.trim();

    Decimal::from_str(value).or_else(|error| {
        if value.contains(['e', 'E']) {
            Decimal::from_scientific(value)
        } else {
            Err(error)
        }
    })
}

pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_amount(&value).map_err(de::Error::custom)
}
