use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::error::XueqiuError;
use crate::core::parsing::de_datetime;

/// Lightweight quote returned by the batch `quotec` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub current: Option<f64>,
    pub percent: Option<f64>,
    pub chg: Option<f64>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Trading-session status of the market a quote belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketStatus {
    pub status_id: Option<i64>,
    pub region: Option<String>,
    pub status: Option<String>,
    pub time_zone: Option<String>,
    pub time_zone_desc: Option<String>,
    pub delay_tag: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteTag {
    pub description: Option<String>,
    pub value: Option<i64>,
}

/// Full quote detail (`extend=detail`).
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteDetail {
    pub symbol: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub exchange: Option<String>,
    pub currency: Option<String>,

    pub current: Option<f64>,
    pub percent: Option<f64>,
    pub chg: Option<f64>,

    pub open: Option<f64>,
    pub last_close: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub avg_price: Option<f64>,

    pub volume: Option<f64>,
    pub amount: Option<f64>,
    pub turnover_rate: Option<f64>,

    pub market_capital: Option<f64>,
    pub float_market_capital: Option<f64>,

    pub pe_ttm: Option<f64>,
    pub pe_lyr: Option<f64>,
    pub pb: Option<f64>,
    pub ps: Option<f64>,
    pub pcf: Option<f64>,

    pub dividend: Option<f64>,
    pub dividend_yield: Option<f64>,

    #[serde(default, deserialize_with = "de_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub issue_date: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteDetailData {
    pub market: Option<MarketStatus>,
    pub quote: Option<QuoteDetail>,
    pub others: Option<Map<String, Value>>,
    pub tags: Option<Vec<QuoteTag>>,
}

/// Raw k-line series: a column-name header plus positional rows.
#[derive(Debug, Clone, Deserialize)]
pub struct KlineData {
    pub symbol: Option<String>,
    pub column: Option<Vec<String>>,
    pub item: Option<Vec<Vec<Value>>>,
}

impl KlineData {
    /// Zip the positional `item` rows onto `column` names and decode each
    /// row into a typed bar. Rows shorter than the header pad with nulls.
    pub fn bars(&self) -> Result<Vec<KlineBar>, XueqiuError> {
        let (Some(columns), Some(items)) = (&self.column, &self.item) else {
            return Ok(Vec::new());
        };
        let mut bars = Vec::with_capacity(items.len());
        for row in items {
            let mut object = Map::new();
            for (idx, name) in columns.iter().enumerate() {
                object.insert(name.clone(), row.get(idx).cloned().unwrap_or(Value::Null));
            }
            let bar = serde_json::from_value(Value::Object(object))
                .map_err(|e| XueqiuError::Data(format!("kline bar: {e}")))?;
            bars.push(bar);
        }
        Ok(bars)
    }
}

/// One k-line bar, synthesized from a positional row.
#[derive(Debug, Clone, Deserialize)]
pub struct KlineBar {
    #[serde(default, deserialize_with = "de_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    pub volume: Option<f64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub chg: Option<f64>,
    pub percent: Option<f64>,
    pub turnoverrate: Option<f64>,
    pub amount: Option<f64>,
    pub pe: Option<f64>,
    pub pb: Option<f64>,
    pub ps: Option<f64>,
    pub pcf: Option<f64>,
    pub market_capital: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One price level of the order book.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderBookLevel {
    pub price: Option<f64>,
    pub count: Option<f64>,
}

/// Real-time order book snapshot.
///
/// The wire format uses flat keys (`bp1`/`bc1`/... and `sp1`/`sc1`/...);
/// [`bids`](Pankou::bids) and [`asks`](Pankou::asks) assemble them into
/// level lists on demand.
#[derive(Debug, Clone, Deserialize)]
pub struct Pankou {
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    pub current: Option<f64>,

    pub buypct: Option<f64>,
    pub sellpct: Option<f64>,
    pub diff: Option<f64>,
    pub ratio: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pankou {
    pub fn bids(&self) -> Vec<OrderBookLevel> {
        extract_levels(&self.extra, "bp", "bc")
    }

    pub fn asks(&self) -> Vec<OrderBookLevel> {
        extract_levels(&self.extra, "sp", "sc")
    }
}

fn extract_levels(
    raw: &Map<String, Value>,
    price_prefix: &str,
    count_prefix: &str,
) -> Vec<OrderBookLevel> {
    let mut levels = Vec::new();
    for i in 1..=10 {
        let price = raw
            .get(&format!("{price_prefix}{i}"))
            .and_then(Value::as_f64);
        let count = raw
            .get(&format!("{count_prefix}{i}"))
            .and_then(Value::as_f64);
        // All-empty levels are placeholders, not real book entries.
        if price.unwrap_or(0.0) == 0.0 && count.unwrap_or(0.0) == 0.0 {
            continue;
        }
        levels.push(OrderBookLevel { price, count });
    }
    levels
}
