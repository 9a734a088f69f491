//! Watchlist (portfolio) endpoints (`/v5/stock/portfolio`).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::parsing::de_datetime;
use crate::core::request::{ApiRequest, bool_str};
use crate::{XueqiuClient, XueqiuError, XueqiuResponse};

pub(crate) const LIST_PATH: &str = "/v5/stock/portfolio/list.json";
pub(crate) const STOCK_LIST_PATH: &str = "/v5/stock/portfolio/stock/list.json";

/// One watchlist group.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioListItem {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub order_id: Option<i64>,
    pub category: Option<i64>,
    pub include: Option<bool>,
    pub symbol_count: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<i64>,

    #[serde(default, deserialize_with = "de_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioListData {
    #[serde(default)]
    pub cubes: Vec<PortfolioListItem>,
    #[serde(default)]
    pub funds: Vec<PortfolioListItem>,
    #[serde(default)]
    pub stocks: Vec<PortfolioListItem>,
    #[serde(default, alias = "mutualFunds")]
    pub mutual_funds: Vec<PortfolioListItem>,
}

/// One stock within a watchlist group.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioStockItem {
    pub symbol: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<i64>,
    pub remark: Option<String>,
    pub exchange: Option<String>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioStocksData {
    pub pid: Option<i64>,
    pub category: Option<i64>,
    #[serde(default)]
    pub stocks: Vec<PortfolioStockItem>,
}

pub(crate) fn list_request(system: bool) -> ApiRequest {
    ApiRequest::get(LIST_PATH)
        .param("system", bool_str(system))
        .require_auth()
}

pub(crate) fn stocks_request(pid: i64, size: u32, category: u32) -> ApiRequest {
    ApiRequest::get(STOCK_LIST_PATH)
        .param("size", size)
        .param("category", category)
        .param("pid", pid)
        .require_auth()
}

/// The caller's watchlist groups. `system` includes the built-in groups.
pub async fn list(
    client: &XueqiuClient,
    system: bool,
) -> Result<XueqiuResponse<PortfolioListData>, XueqiuError> {
    client.request_api(&list_request(system)).await
}

/// Stocks inside one watchlist group.
pub async fn stocks(
    client: &XueqiuClient,
    pid: i64,
    size: u32,
    category: u32,
) -> Result<XueqiuResponse<PortfolioStocksData>, XueqiuError> {
    client.request_api(&stocks_request(pid, size, category)).await
}
