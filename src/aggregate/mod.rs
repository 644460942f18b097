//! Pure projections from a [`Dataset`](crate::models::Dataset) into the views
//! a dashboard renders.
//!
//! Nothing here caches: every call recomputes from the dataset it is given, so
//! the same dataset always yields the same output.

mod aggregator;
mod collation;
mod dashboard;

pub use aggregator::{aggregate_by_field, revenue_breakdown, revenue_over_time, summary, PLACEHOLDER_DATES, PLACEHOLDER_PRODUCTS};
pub use collation::{compare_labels, LabelCollator};
pub use dashboard::DashboardViews;
