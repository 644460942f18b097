use serde::Serialize;

use crate::aggregate::{aggregate_by_field, revenue_breakdown, revenue_over_time, summary};
use crate::models::{BreakdownSlice, Dataset, Field, ProductAggregate, Summary, TimeSeriesPoint};

/// Every derived view of one dataset, computed together for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    pub summary: Option<Summary>,
    pub revenue_by_product: Vec<ProductAggregate>,
    pub quantity_by_product: Vec<ProductAggregate>,
    pub revenue_over_time: Vec<TimeSeriesPoint>,
    pub revenue_breakdown: Vec<BreakdownSlice>
}

impl DashboardViews {
    pub fn derive(dataset: &Dataset) -> Self {
        Self {
            summary: summary(dataset),
            revenue_by_product: aggregate_by_field(dataset, Field::Revenue),
            quantity_by_product: aggregate_by_field(dataset, Field::Quantity),
            revenue_over_time: revenue_over_time(dataset),
            revenue_breakdown: revenue_breakdown(dataset)
        }
    }
}
