use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{lenient_decimal, lenient_text};

/// A single sale parsed from one row of the uploaded CSV.
///
/// `date` and `product` are kept exactly as written in the file. Numeric cells
/// that are missing or do not parse are stored as zero rather than rejecting
/// the row, and cells missing from a short row read as empty text. Columns
/// other than the four below are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    /// Raw date cell; only interpreted when ordering the revenue timeline.
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,
    /// Product label. Grouping is exact, so `"A"`, `"a"` and `"A "` differ.
    #[serde(default, deserialize_with = "lenient_text")]
    pub product: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub revenue: Decimal
}

impl Transaction {
    pub fn new(date: impl Into<String>, product: impl Into<String>, quantity: Decimal, revenue: Decimal) -> Self {
        Self {
            date: date.into(),
            product: product.into(),
            quantity,
            revenue
        }
    }
}
