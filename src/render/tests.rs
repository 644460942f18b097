use super::{JsonRenderer, Renderer, View};

use anyhow::Result;
use serde_json::{json, Value};

use crate::models::{Dataset, Transaction};
use crate::types::coerce_decimal;

fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        Transaction::new("2024-01-02", "A", coerce_decimal("3"), coerce_decimal("10.00")),
        Transaction::new("2024-01-01", "B", coerce_decimal("x"), coerce_decimal("5.5")),
    ])
}

fn render_to_value(dataset: &Dataset, view: View) -> Result<Value> {
    let mut renderer = JsonRenderer::new(Vec::new(), false);
    renderer.render(dataset, view)?;

    let output = String::from_utf8(renderer.into_inner())?;
    assert!(output.ends_with('\n'));

    Ok(serde_json::from_str(&output)?)
}

#[test]
fn test_json_renderer_writes_summary_with_dashboard_field_names() -> Result<()> {
    let value = render_to_value(&sample_dataset(), View::Summary)?;

    assert_eq!(value, json!({
        "totalRevenue": 15.5,
        "totalQuantity": 3.0,
        "numberOfTransactions": 2,
        "avgRevenue": 7.75,
        "avgQuantity": 1.5,
        "bestProduct": "A",
        "bestProductRevenue": 10.0
    }));

    Ok(())
}

#[test]
fn test_json_renderer_writes_chart_series() -> Result<()> {
    let dataset = sample_dataset();

    assert_eq!(render_to_value(&dataset, View::Quantity)?, json!([
        { "product": "A", "quantity": 3.0 },
        { "product": "B", "quantity": 0.0 }
    ]));
    assert_eq!(render_to_value(&dataset, View::Timeline)?, json!([
        { "date": "2024-01-01", "revenue": 5.5 },
        { "date": "2024-01-02", "revenue": 10.0 }
    ]));
    assert_eq!(render_to_value(&dataset, View::Breakdown)?, json!([
        { "name": "A", "value": 64.5 },
        { "name": "B", "value": 35.5 }
    ]));

    Ok(())
}

#[test]
fn test_json_renderer_writes_empty_state() -> Result<()> {
    let value = render_to_value(&Dataset::empty(), View::All)?;

    assert_eq!(value["summary"], Value::Null);
    assert_eq!(value["revenueBreakdown"], json!([]));
    assert_eq!(value["revenueByProduct"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["revenueOverTime"].as_array().map(Vec::len), Some(3));

    Ok(())
}
