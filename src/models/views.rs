use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::Field;

/// Headline statistics over the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_revenue: Decimal,
    pub total_quantity: Decimal,
    #[serde(rename = "numberOfTransactions")]
    pub transaction_count: usize,
    pub avg_revenue: Decimal,
    pub avg_quantity: Decimal,
    /// Product with the highest summed revenue.
    pub best_product: String,
    pub best_product_revenue: Decimal
}

/// One product's summed value for a single numeric column.
///
/// Serializes as `{"product": ..., "<field>": ...}`, e.g.
/// `{"product": "A", "revenue": 10.0}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAggregate {
    pub product: String,
    pub field: Field,
    pub value: Decimal
}

impl Serialize for ProductAggregate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("product", &self.product)?;
        map.serialize_entry(self.field.as_str(), &self.value)?;
        map.end()
    }
}

/// Revenue of a single transaction positioned on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub revenue: Decimal
}

/// A product's share of total revenue, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    pub name: String,
    pub value: Decimal
}
