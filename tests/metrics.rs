use serde_json::json;
use xueqiu_rs::MetricValue;
use xueqiu_rs::core::metrics::{extract_metric, split_metrics};

#[test]
fn numeric_pairs_are_promoted() {
    assert_eq!(
        extract_metric(&json!([12.5, 0.034])),
        Some(MetricValue {
            value: Some(12.5),
            yoy: Some(0.034)
        })
    );
}

#[test]
fn string_and_null_elements_count_as_number_like() {
    assert_eq!(
        extract_metric(&json!(["12.5", null])),
        Some(MetricValue {
            value: Some(12.5),
            yoy: None
        })
    );
}

#[test]
fn non_pair_shapes_are_rejected() {
    assert_eq!(extract_metric(&json!([1, 2, 3])), None);
    assert_eq!(extract_metric(&json!([1])), None);
    assert_eq!(extract_metric(&json!([1, "n/a"])), None);
    assert_eq!(extract_metric(&json!([1, [2]])), None);
    assert_eq!(extract_metric(&json!("12.5")), None);
    assert_eq!(extract_metric(&json!({"value": 1, "yoy": 2})), None);
}

#[test]
fn split_drains_pairs_and_leaves_the_rest() {
    let mut map = json!({
        "report_date": 1714442400000u64,
        "report_name": "2024Q1",
        "avg_roe": [12.3, 0.05],
        "total_revenue": [1.0e9, 0.1],
        "label": "annual",
        "holders": [100, 200, 300]
    })
    .as_object()
    .unwrap()
    .clone();

    let metrics = split_metrics(&mut map, &["report_date", "report_name"]);

    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics["avg_roe"].value, Some(12.3));
    assert_eq!(metrics["total_revenue"].yoy, Some(0.1));

    // reserved and non-pair fields pass through untouched
    assert!(map.contains_key("report_date"));
    assert!(map.contains_key("report_name"));
    assert!(map.contains_key("label"));
    assert!(map.contains_key("holders"));
    assert!(!map.contains_key("avg_roe"));
}

#[test]
fn reserved_pairs_are_not_promoted() {
    let mut map = json!({"report_date": [1.0, 2.0]}).as_object().unwrap().clone();
    let metrics = split_metrics(&mut map, &["report_date"]);
    assert!(metrics.is_empty());
    assert!(map.contains_key("report_date"));
}
