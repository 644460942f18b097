use clap::ValueEnum;
use serde_json::Value;

use crate::aggregate::{aggregate_by_field, revenue_breakdown, revenue_over_time, summary, DashboardViews};
use crate::models::{Dataset, Field};

/// Which projection of the dataset to render.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum View {
    All,
    Summary,
    Revenue,
    Quantity,
    Timeline,
    Breakdown
}

impl View {
    /// Computes this view and converts it into a JSON document.
    pub fn project(&self, dataset: &Dataset) -> serde_json::Result<Value> {
        match self {
            View::All => serde_json::to_value(DashboardViews::derive(dataset)),
            View::Summary => serde_json::to_value(summary(dataset)),
            View::Revenue => serde_json::to_value(aggregate_by_field(dataset, Field::Revenue)),
            View::Quantity => serde_json::to_value(aggregate_by_field(dataset, Field::Quantity)),
            View::Timeline => serde_json::to_value(revenue_over_time(dataset)),
            View::Breakdown => serde_json::to_value(revenue_breakdown(dataset))
        }
    }
}
