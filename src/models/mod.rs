mod dataset;
mod transaction;
mod views;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use dataset::Dataset;
pub use transaction::Transaction;
pub use views::{BreakdownSlice, ProductAggregate, Summary, TimeSeriesPoint};

/// Numeric transaction column that can be summed per product.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Quantity,
    Revenue
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Quantity => "quantity",
            Field::Revenue => "revenue"
        }
    }

    /// Reads this column from a transaction.
    pub fn value_of(&self, transaction: &Transaction) -> Decimal {
        match self {
            Field::Quantity => transaction.quantity,
            Field::Revenue => transaction.revenue
        }
    }
}
