use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::aggregate::LabelCollator;
use crate::models::{BreakdownSlice, Dataset, Field, ProductAggregate, Summary, TimeSeriesPoint};
use crate::types::parse_calendar_date;

/// Labels of the stand-in series returned by [`aggregate_by_field`] for an empty dataset.
pub const PLACEHOLDER_PRODUCTS: [&str; 3] = ["No data 1", "No data 2", "No data 3"];
/// Dates of the stand-in series returned by [`revenue_over_time`] for an empty dataset.
pub const PLACEHOLDER_DATES: [&str; 3] = ["Day 1", "Day 2", "Day 3"];

const PERCENT_DECIMAL_PLACES: u32 = 1;

/// Computes the headline statistics, or `None` when nothing is loaded.
///
/// The best product is the one with the largest summed revenue. Ties go to the
/// label that sorts first in [`aggregate_by_field`] order.
pub fn summary(dataset: &Dataset) -> Option<Summary> {
    if dataset.is_empty() {
        return None;
    }

    let total_revenue = sum(dataset.iter().map(|transaction| transaction.revenue));
    let total_quantity = sum(dataset.iter().map(|transaction| transaction.quantity));
    let count = Decimal::from(dataset.len());

    let best = aggregate_by_field(dataset, Field::Revenue)
        .into_iter()
        .reduce(|best, candidate| if candidate.value > best.value { candidate } else { best })?;

    Some(Summary {
        total_revenue,
        total_quantity,
        transaction_count: dataset.len(),
        avg_revenue: total_revenue / count,
        avg_quantity: total_quantity / count,
        best_product: best.product,
        best_product_revenue: best.value
    })
}

/// Sums `field` per distinct product label.
///
/// Labels are grouped by exact match and the result is ordered with a
/// [`LabelCollator`]. An empty dataset yields the fixed three-entry
/// placeholder series so charts keep a stable shape before any upload.
pub fn aggregate_by_field(dataset: &Dataset, field: Field) -> Vec<ProductAggregate> {
    if dataset.is_empty() {
        return PLACEHOLDER_PRODUCTS.iter()
            .map(|product| ProductAggregate {
                product: product.to_string(),
                field,
                value: Decimal::ZERO
            })
            .collect();
    }

    let mut totals = HashMap::<&str, Decimal>::new();

    for transaction in dataset {
        let total = totals.entry(transaction.product.as_str()).or_insert(Decimal::ZERO);
        *total = total.saturating_add(field.value_of(transaction));
    }

    let mut aggregates: Vec<ProductAggregate> = totals.into_iter()
        .map(|(product, value)| ProductAggregate {
            product: product.to_string(),
            field,
            value
        })
        .collect();

    let mut collator = LabelCollator::new();
    aggregates.sort_by(|left, right| collator.compare(&left.product, &right.product));
    aggregates
}

/// Lists every transaction's revenue in ascending date order.
///
/// Points are not merged by date. Dates that cannot be parsed sort after all
/// parseable ones; equal keys keep their file order. An empty dataset yields
/// the fixed three-entry placeholder series.
pub fn revenue_over_time(dataset: &Dataset) -> Vec<TimeSeriesPoint> {
    if dataset.is_empty() {
        return PLACEHOLDER_DATES.iter()
            .map(|date| TimeSeriesPoint {
                date: date.to_string(),
                revenue: Decimal::ZERO
            })
            .collect();
    }

    let mut keyed: Vec<(Option<NaiveDateTime>, TimeSeriesPoint)> = dataset.iter()
        .map(|transaction| {
            let point = TimeSeriesPoint {
                date: transaction.date.clone(),
                revenue: transaction.revenue
            };
            (parse_calendar_date(&transaction.date), point)
        })
        .collect();

    keyed.sort_by(|(left, _), (right, _)| compare_dates(left.as_ref(), right.as_ref()));
    keyed.into_iter().map(|(_, point)| point).collect()
}

/// Expresses each product's revenue as a percentage of the total.
///
/// Percentages are rounded half away from zero to one decimal place. When the
/// total is zero every slice reports `0`. Unlike the other projections an empty
/// dataset produces no slices at all.
pub fn revenue_breakdown(dataset: &Dataset) -> Vec<BreakdownSlice> {
    if dataset.is_empty() {
        return Vec::new();
    }

    let aggregates = aggregate_by_field(dataset, Field::Revenue);
    let total = sum(aggregates.iter().map(|aggregate| aggregate.value));

    aggregates.into_iter()
        .map(|aggregate| BreakdownSlice {
            value: percentage(aggregate.value, total),
            name: aggregate.product
        })
        .collect()
}

fn sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |total, value| total.saturating_add(value))
}

fn percentage(value: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }

    //NOTE: Divides first only when scaling by 100 would overflow
    let share = value.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(total))
        .or_else(|| value.checked_div(total).and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED)));

    match share {
        Some(share) => share.round_dp_with_strategy(PERCENT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero),
        None => {
            warn!("Percentage of {value} over total {total} is out of range, reporting 0");
            Decimal::ZERO
        }
    }
}

fn compare_dates(left: Option<&NaiveDateTime>, right: Option<&NaiveDateTime>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.cmp(right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal
    }
}
