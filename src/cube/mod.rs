//! Cube (model portfolio) endpoints on the main `xueqiu.com` host.
//!
//! These use absolute URLs: the cube surface never moved to the stock data
//! vertical. The credential still applies because the host is in the
//! primary domain family.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::core::parsing::de_datetime;
use crate::core::request::ApiRequest;
use crate::{XueqiuClient, XueqiuError, XueqiuResponse};

pub(crate) const NAV_DAILY_URL: &str = "https://xueqiu.com/cubes/nav_daily/all.json";
pub(crate) const REBALANCING_HISTORY_URL: &str = "https://xueqiu.com/cubes/rebalancing/history.json";
pub(crate) const REBALANCING_CURRENT_URL: &str = "https://xueqiu.com/cubes/rebalancing/current.json";
pub(crate) const QUOTE_URL: &str = "https://xueqiu.com/cubes/quote.json";

/// One day of a cube's NAV series.
#[derive(Debug, Clone, Deserialize)]
pub struct CubeNavPoint {
    #[serde(default, deserialize_with = "de_datetime")]
    pub time: Option<DateTime<Utc>>,
    pub date: Option<String>,
    pub value: Option<f64>,
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CubeNavSeries {
    pub symbol: Option<String>,
    pub name: Option<String>,
    #[serde(default, rename = "list")]
    pub items: Vec<CubeNavPoint>,
}

/// One executed trade within a rebalancing.
#[derive(Debug, Clone, Deserialize)]
pub struct CubeRebalancingHistoryItem {
    pub id: Option<i64>,
    pub rebalancing_id: Option<i64>,
    pub stock_id: Option<i64>,
    pub stock_name: Option<String>,
    pub stock_symbol: Option<String>,

    pub volume: Option<f64>,
    pub price: Option<f64>,
    pub net_value: Option<f64>,
    pub weight: Option<f64>,
    pub target_weight: Option<f64>,
    pub prev_weight: Option<f64>,
    pub proactive: Option<bool>,

    #[serde(default, deserialize_with = "de_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CubeHolding {
    pub stock_id: Option<i64>,
    pub weight: Option<f64>,
    pub segment_name: Option<String>,
    pub segment_id: Option<i64>,
    pub stock_name: Option<String>,
    pub stock_symbol: Option<String>,
    pub segment_color: Option<String>,
    pub proactive: Option<bool>,
    pub volume: Option<f64>,
}

/// One rebalancing event. The wire has carried a misspelled
/// `prev_bebalancing_id` key since the feature shipped.
#[derive(Debug, Clone, Deserialize)]
pub struct CubeRebalancing {
    pub id: Option<i64>,
    pub status: Option<String>,
    pub cube_id: Option<i64>,
    #[serde(alias = "prev_bebalancing_id")]
    pub prev_rebalancing_id: Option<i64>,
    pub category: Option<String>,
    pub exe_strategy: Option<String>,

    #[serde(default, deserialize_with = "de_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub updated_at: Option<DateTime<Utc>>,

    pub cash: Option<f64>,
    pub cash_value: Option<f64>,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
    pub error_status: Option<String>,

    pub holdings: Option<Vec<CubeHolding>>,
    #[serde(default)]
    pub rebalancing_histories: Vec<CubeRebalancingHistoryItem>,

    pub comment: Option<String>,
    pub diff: Option<f64>,
    pub new_buy_count: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CubeRebalancingHistoryData {
    pub count: Option<i64>,
    pub page: Option<i64>,
    #[serde(alias = "totalCount")]
    pub total_count: Option<i64>,
    #[serde(default, rename = "list")]
    pub items: Vec<CubeRebalancing>,
    #[serde(alias = "maxPage")]
    pub max_page: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CubeRebalancingCurrentData {
    pub last_rb: Option<CubeRebalancing>,
}

/// Cube quote summary, keyed by cube symbol in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct CubeQuote {
    pub symbol: Option<String>,
    pub market: Option<String>,
    pub name: Option<String>,

    pub net_value: Option<f64>,
    pub daily_gain: Option<f64>,
    pub monthly_gain: Option<f64>,
    pub total_gain: Option<f64>,
    pub annualized_gain: Option<f64>,

    pub hasexist: Option<bool>,
    pub badges_exist: Option<bool>,
    pub game_id: Option<i64>,

    #[serde(default, deserialize_with = "de_datetime")]
    pub closed_at: Option<DateTime<Utc>>,
}

pub(crate) fn nav_daily_request(cube_symbol: &str) -> ApiRequest {
    ApiRequest::get(NAV_DAILY_URL)
        .param("cube_symbol", cube_symbol)
        .require_auth()
}

pub(crate) fn rebalancing_history_request(cube_symbol: &str, count: u32, page: u32) -> ApiRequest {
    ApiRequest::get(REBALANCING_HISTORY_URL)
        .param("cube_symbol", cube_symbol)
        .param("count", count)
        .param("page", page)
        .require_auth()
}

pub(crate) fn rebalancing_current_request(cube_symbol: &str) -> ApiRequest {
    ApiRequest::get(REBALANCING_CURRENT_URL)
        .param("cube_symbol", cube_symbol)
        .require_auth()
}

pub(crate) fn quote_request(code: &str) -> ApiRequest {
    ApiRequest::get(QUOTE_URL).param("code", code).require_auth()
}

/// Daily NAV series of a cube.
pub async fn nav_daily(
    client: &XueqiuClient,
    cube_symbol: &str,
) -> Result<XueqiuResponse<Vec<CubeNavSeries>>, XueqiuError> {
    client.request_api(&nav_daily_request(cube_symbol)).await
}

/// Past rebalancing events, paginated.
pub async fn rebalancing_history(
    client: &XueqiuClient,
    cube_symbol: &str,
    count: u32,
    page: u32,
) -> Result<XueqiuResponse<CubeRebalancingHistoryData>, XueqiuError> {
    client
        .request_api(&rebalancing_history_request(cube_symbol, count, page))
        .await
}

/// The cube's current holdings via its latest rebalancing.
pub async fn rebalancing_current(
    client: &XueqiuClient,
    cube_symbol: &str,
) -> Result<XueqiuResponse<CubeRebalancingCurrentData>, XueqiuError> {
    client
        .request_api(&rebalancing_current_request(cube_symbol))
        .await
}

/// Quote summaries for one or more cubes (comma-separated codes).
pub async fn quote(
    client: &XueqiuClient,
    code: &str,
) -> Result<XueqiuResponse<HashMap<String, CubeQuote>>, XueqiuError> {
    client.request_api(&quote_request(code)).await
}
