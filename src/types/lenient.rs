use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::types::NumericError;

/// Parses a trimmed numeric cell strictly.
///
/// Accepts plain decimals (`"10.00"`, `"-1.5"`, `"+3"`) and scientific notation
/// (`"1.5e3"`). A value that is a finite number but does not fit a `Decimal`
/// (e.g. `"1e30"`) is reported as [`NumericError::OutOfRange`]; anything else
/// that fails is [`NumericError::InvalidFormat`].
pub fn parse_decimal(value: &str) -> Result<Decimal, NumericError> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| match value.parse::<f64>() {
            Ok(number) if number.is_finite() => NumericError::OutOfRange(value.to_string()),
            _ => NumericError::InvalidFormat(value.to_string())
        })
}

/// Parses a CSV cell into a number, coercing anything unusable to zero.
///
/// Surrounding whitespace is ignored. Empty, non-numeric or out-of-range input
/// yields `0` instead of an error.
pub fn coerce_decimal(value: &str) -> Decimal {
    let value = value.trim();

    if value.is_empty() {
        return Decimal::ZERO;
    }

    match parse_decimal(value) {
        Ok(number) => number,
        Err(error @ NumericError::OutOfRange(_)) => {
            warn!("{error}, coercing to 0");
            Decimal::ZERO
        },
        Err(error) => {
            debug!("{error}, coercing to 0");
            Decimal::ZERO
        }
    }
}

/// Serde adapter applying [`coerce_decimal`] to a string field.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.as_deref().map(coerce_decimal).unwrap_or(Decimal::ZERO))
}

/// Serde adapter for text cells that may be absent from a short row.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
