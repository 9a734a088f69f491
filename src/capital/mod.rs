//! Capital flow endpoints (`/v5/stock/capital`).

mod model;

pub use model::{
    BlocktransData, BlocktransItem, CapitalAssortData, CapitalFlowData, CapitalFlowItem,
    CapitalHistoryData, CapitalHistoryItem, MarginData, MarginItem,
};

use crate::core::request::ApiRequest;
use crate::{XueqiuClient, XueqiuError, XueqiuResponse};

pub(crate) const MARGIN_PATH: &str = "/v5/stock/capital/margin.json";
pub(crate) const BLOCKTRANS_PATH: &str = "/v5/stock/capital/blocktrans.json";
pub(crate) const ASSORT_PATH: &str = "/v5/stock/capital/assort.json";
pub(crate) const FLOW_PATH: &str = "/v5/stock/capital/flow.json";
pub(crate) const HISTORY_PATH: &str = "/v5/stock/capital/history.json";

pub(crate) fn margin_request(symbol: &str, page: u32, size: u32) -> ApiRequest {
    ApiRequest::get(MARGIN_PATH)
        .param("symbol", symbol)
        .param("page", page)
        .param("size", size)
        .require_auth()
}

pub(crate) fn blocktrans_request(symbol: &str, page: u32, size: u32) -> ApiRequest {
    ApiRequest::get(BLOCKTRANS_PATH)
        .param("symbol", symbol)
        .param("page", page)
        .param("size", size)
        .require_auth()
}

pub(crate) fn assort_request(symbol: &str) -> ApiRequest {
    ApiRequest::get(ASSORT_PATH)
        .param("symbol", symbol)
        .require_auth()
}

pub(crate) fn flow_request(symbol: &str) -> ApiRequest {
    ApiRequest::get(FLOW_PATH)
        .param("symbol", symbol)
        .require_auth()
}

pub(crate) fn history_request(symbol: &str, count: u32) -> ApiRequest {
    ApiRequest::get(HISTORY_PATH)
        .param("symbol", symbol)
        .param("count", count)
        .require_auth()
}

/// Margin-trading and short-selling balances.
pub async fn margin(
    client: &XueqiuClient,
    symbol: &str,
    page: u32,
    size: u32,
) -> Result<XueqiuResponse<MarginData>, XueqiuError> {
    client.request_api(&margin_request(symbol, page, size)).await
}

/// Block trades.
pub async fn blocktrans(
    client: &XueqiuClient,
    symbol: &str,
    page: u32,
    size: u32,
) -> Result<XueqiuResponse<BlocktransData>, XueqiuError> {
    client.request_api(&blocktrans_request(symbol, page, size)).await
}

/// Intraday buy/sell split by order size.
pub async fn assort(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<CapitalAssortData>, XueqiuError> {
    client.request_api(&assort_request(symbol)).await
}

/// Intraday capital flow.
pub async fn flow(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<CapitalFlowData>, XueqiuError> {
    client.request_api(&flow_request(symbol)).await
}

/// Daily net capital flow history.
pub async fn history(
    client: &XueqiuClient,
    symbol: &str,
    count: u32,
) -> Result<XueqiuResponse<CapitalHistoryData>, XueqiuError> {
    client.request_api(&history_request(symbol, count)).await
}
