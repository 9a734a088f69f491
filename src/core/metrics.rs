//! Metric-pair extraction.
//!
//! Statement endpoints report most figures as a `[value, year_over_year]`
//! 2-element array, but the set of metric names varies per company, per
//! region and per quarter, so it cannot be baked into a schema. The
//! extractor runs over the raw period object before structural decoding and
//! promotes every field matching the pair shape into a [`MetricValue`],
//! leaving everything else for the typed fields and the passthrough bag.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// A financial metric reported as a `[value, year_over_year]` pair.
///
/// Either side may be absent; upstream uses `null` for metrics that do not
/// apply to a period.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricValue {
    /// The reported value for the period.
    pub value: Option<f64>,
    /// Year-over-year change, usually a ratio.
    pub yoy: Option<f64>,
}

/// Recognize a `[value, yoy]` pair.
///
/// Both elements must be number-like: a JSON number, `null`, or a string
/// that parses cleanly as a float. Anything else (wrong length, nested
/// structures, non-numeric strings) is not a metric pair.
pub fn extract_metric(value: &Value) -> Option<MetricValue> {
    let Some(pair) = value.as_array() else {
        return None;
    };
    if pair.len() != 2 {
        return None;
    }
    let value = number_like(&pair[0])?;
    let yoy = number_like(&pair[1])?;
    Some(MetricValue { value, yoy })
}

/// Drain every metric-pair field out of `map` into a named metric mapping.
///
/// Reserved fields and fields that do not match the pair shape stay in the
/// map untouched, preserving forward compatibility with schema drift.
pub fn split_metrics(map: &mut Map<String, Value>, reserved: &[&str]) -> BTreeMap<String, MetricValue> {
    let mut metrics = BTreeMap::new();
    map.retain(|key, value| {
        if reserved.contains(&key.as_str()) {
            return true;
        }
        match extract_metric(value) {
            Some(metric) => {
                metrics.insert(key.clone(), metric);
                false
            }
            None => true,
        }
    });
    metrics
}

fn number_like(value: &Value) -> Option<Option<f64>> {
    match value {
        Value::Null => Some(None),
        Value::Number(n) => Some(n.as_f64()),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok().map(Some)
        }
        _ => None,
    }
}
