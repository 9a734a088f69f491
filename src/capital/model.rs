use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::parsing::de_datetime;

/// One day of margin-trading balances.
#[derive(Debug, Clone, Deserialize)]
pub struct MarginItem {
    pub margin_trading_amt_balance: Option<f64>,
    pub short_selling_amt_balance: Option<f64>,
    pub margin_trading_balance: Option<f64>,
    #[serde(default, rename = "td_date", deserialize_with = "de_datetime")]
    pub trade_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarginData {
    #[serde(default)]
    pub items: Vec<MarginItem>,
}

/// One block trade.
#[derive(Debug, Clone, Deserialize)]
pub struct BlocktransItem {
    #[serde(rename = "vol")]
    pub volume: Option<f64>,
    pub sell_branch_org_name: Option<String>,
    #[serde(rename = "premium_rat")]
    pub premium_rate: Option<f64>,
    #[serde(rename = "trans_amt")]
    pub transaction_amount: Option<f64>,
    #[serde(default, rename = "td_date", deserialize_with = "de_datetime")]
    pub trade_date: Option<DateTime<Utc>>,
    pub buy_branch_org_name: Option<String>,
    #[serde(rename = "trans_price")]
    pub transaction_price: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlocktransData {
    #[serde(default)]
    pub items: Vec<BlocktransItem>,
}

/// Intraday buy/sell split by order size.
#[derive(Debug, Clone, Deserialize)]
pub struct CapitalAssortData {
    pub sell_large: Option<f64>,
    pub sell_medium: Option<f64>,
    pub sell_small: Option<f64>,
    pub sell_total: Option<f64>,
    pub buy_large: Option<f64>,
    pub buy_medium: Option<f64>,
    pub buy_small: Option<f64>,
    pub buy_total: Option<f64>,

    #[serde(default, deserialize_with = "de_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CapitalFlowItem {
    #[serde(default, deserialize_with = "de_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Intraday capital flow series.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapitalFlowData {
    pub symbol: Option<String>,
    #[serde(default)]
    pub items: Vec<CapitalFlowItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CapitalHistoryItem {
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Daily net capital flow with rolling sums.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapitalHistoryData {
    #[serde(rename = "sum3")]
    pub sum_3d: Option<f64>,
    #[serde(rename = "sum5")]
    pub sum_5d: Option<f64>,
    #[serde(rename = "sum10")]
    pub sum_10d: Option<f64>,
    #[serde(rename = "sum20")]
    pub sum_20d: Option<f64>,

    #[serde(default)]
    pub items: Vec<CapitalHistoryItem>,
}
