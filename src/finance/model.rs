use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::core::metrics::{MetricValue, split_metrics};
use crate::core::parsing::parse_datetime;

/// Fields of a statement period that are never metric pairs.
const RESERVED_PERIOD_FIELDS: &[&str] = &["report_date", "report_name"];

/// One reporting period with a dynamic set of metrics.
///
/// The metric vocabulary is discovered per payload: every field whose value
/// is a `[value, yoy]` pair is promoted into `metrics`, everything else
/// stays in `extra`.
#[derive(Debug, Clone, Default)]
pub struct StatementPeriod {
    pub report_date: Option<DateTime<Utc>>,
    pub report_name: Option<String>,
    pub metrics: BTreeMap<String, MetricValue>,
    /// Fields that are neither reserved nor metric pairs.
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for StatementPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Metric extraction must run before any structural interpretation;
        // the metric names are not part of the schema.
        let mut raw = Map::deserialize(deserializer)?;
        let metrics = split_metrics(&mut raw, RESERVED_PERIOD_FIELDS);
        let report_date = raw.remove("report_date").as_ref().and_then(parse_datetime);
        let report_name = match raw.remove("report_name") {
            Some(Value::String(name)) => Some(name),
            _ => None,
        };
        Ok(StatementPeriod {
            report_date,
            report_name,
            metrics,
            extra: raw,
        })
    }
}

/// Common shape of the indicator/balance/income/cash-flow endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatementData {
    pub quote_name: Option<String>,
    pub currency_name: Option<String>,
    pub org_type: Option<i64>,
    pub last_report_name: Option<String>,
    pub currency: Option<String>,
    #[serde(default, rename = "list", alias = "items")]
    pub periods: Vec<StatementPeriod>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One business line within a segment report.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessItem {
    pub project_announced_name: Option<String>,
    pub prime_operating_income: Option<f64>,
    pub income_ratio: Option<f64>,
    pub gross_profit_rate: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessClass {
    pub class_standard: Option<i64>,
    #[serde(default)]
    pub business_list: Vec<BusinessItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessPeriod {
    #[serde(default, deserialize_with = "crate::core::parsing::de_datetime")]
    pub report_date: Option<DateTime<Utc>>,
    pub report_name: Option<String>,
    #[serde(default)]
    pub class_list: Vec<BusinessClass>,
}

/// Segmented-revenue statement.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessData {
    pub quote_name: Option<String>,
    pub currency: Option<String>,
    #[serde(default, rename = "list")]
    pub periods: Vec<BusinessPeriod>,
}
