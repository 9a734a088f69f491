//! Financial statement endpoints (`/v5/stock/finance`).
//!
//! Most figures arrive as `[value, yoy]` metric pairs with a vocabulary
//! that varies per payload; see [`crate::core::metrics`].

mod model;

pub use model::{
    BusinessClass, BusinessData, BusinessItem, BusinessPeriod, StatementData, StatementPeriod,
};

use crate::core::request::{ApiRequest, bool_str};
use crate::{XueqiuClient, XueqiuError, XueqiuResponse};

pub(crate) const CASH_FLOW_PATH: &str = "/v5/stock/finance/cn/cash_flow.json";
pub(crate) const INDICATOR_PATH: &str = "/v5/stock/finance/cn/indicator.json";
pub(crate) const BALANCE_PATH: &str = "/v5/stock/finance/cn/balance.json";
pub(crate) const INCOME_PATH: &str = "/v5/stock/finance/cn/income.json";
pub(crate) const BUSINESS_PATH: &str = "/v5/stock/finance/cn/business.json";

/// Options for the `*_v2` regional statement endpoints.
#[derive(Debug, Clone)]
pub struct StatementV2Options {
    /// Region segment of the path (`cn`, `hk`, `us`).
    pub region: String,
    /// Report type filter; the wire parameter is `type`.
    pub kind: String,
    /// Whether to request the detailed breakdown.
    pub is_detail: bool,
    /// Number of periods.
    pub count: u32,
}

impl Default for StatementV2Options {
    fn default() -> Self {
        StatementV2Options {
            region: "cn".into(),
            kind: "all".into(),
            is_detail: true,
            count: 10,
        }
    }
}

fn statement_request(path: &'static str, symbol: &str, is_annals: bool, count: u32) -> ApiRequest {
    let mut request = ApiRequest::get(path)
        .param("symbol", symbol)
        .param("count", count);
    if is_annals {
        request = request.param("type", "Q4");
    }
    request.require_auth()
}

fn statement_v2_request(endpoint: &str, symbol: &str, options: &StatementV2Options) -> ApiRequest {
    let region = options.region.trim().to_ascii_lowercase();
    ApiRequest::get(format!("/v5/stock/finance/{region}/{endpoint}.json"))
        .param("symbol", symbol)
        .param("type", &options.kind)
        .param("is_detail", bool_str(options.is_detail))
        .param("count", options.count)
        .require_auth()
}

pub(crate) fn cash_flow_request(symbol: &str, is_annals: bool, count: u32) -> ApiRequest {
    statement_request(CASH_FLOW_PATH, symbol, is_annals, count)
}

pub(crate) fn cash_flow_v2_request(symbol: &str, options: &StatementV2Options) -> ApiRequest {
    statement_v2_request("cash_flow", symbol, options)
}

pub(crate) fn indicator_request(symbol: &str, is_annals: bool, count: u32) -> ApiRequest {
    statement_request(INDICATOR_PATH, symbol, is_annals, count)
}

pub(crate) fn indicator_v2_request(symbol: &str, options: &StatementV2Options) -> ApiRequest {
    statement_v2_request("indicator", symbol, options)
}

pub(crate) fn balance_request(symbol: &str, is_annals: bool, count: u32) -> ApiRequest {
    statement_request(BALANCE_PATH, symbol, is_annals, count)
}

pub(crate) fn balance_v2_request(symbol: &str, options: &StatementV2Options) -> ApiRequest {
    statement_v2_request("balance", symbol, options)
}

pub(crate) fn income_request(symbol: &str, is_annals: bool, count: u32) -> ApiRequest {
    statement_request(INCOME_PATH, symbol, is_annals, count)
}

pub(crate) fn income_v2_request(symbol: &str, options: &StatementV2Options) -> ApiRequest {
    statement_v2_request("income", symbol, options)
}

pub(crate) fn business_request(symbol: &str, is_annals: bool, count: u32) -> ApiRequest {
    statement_request(BUSINESS_PATH, symbol, is_annals, count)
}

/// Cash-flow statement. `is_annals` restricts to annual (Q4) reports.
pub async fn cash_flow(
    client: &XueqiuClient,
    symbol: &str,
    is_annals: bool,
    count: u32,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&cash_flow_request(symbol, is_annals, count)).await
}

/// Regional cash-flow statement (v2 path layout).
pub async fn cash_flow_v2(
    client: &XueqiuClient,
    symbol: &str,
    options: &StatementV2Options,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&cash_flow_v2_request(symbol, options)).await
}

/// Key financial indicators per reporting period.
pub async fn indicator(
    client: &XueqiuClient,
    symbol: &str,
    is_annals: bool,
    count: u32,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&indicator_request(symbol, is_annals, count)).await
}

/// Regional indicator statement (v2 path layout).
pub async fn indicator_v2(
    client: &XueqiuClient,
    symbol: &str,
    options: &StatementV2Options,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&indicator_v2_request(symbol, options)).await
}

/// Balance sheet.
pub async fn balance(
    client: &XueqiuClient,
    symbol: &str,
    is_annals: bool,
    count: u32,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&balance_request(symbol, is_annals, count)).await
}

/// Regional balance sheet (v2 path layout).
pub async fn balance_v2(
    client: &XueqiuClient,
    symbol: &str,
    options: &StatementV2Options,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&balance_v2_request(symbol, options)).await
}

/// Income statement.
pub async fn income(
    client: &XueqiuClient,
    symbol: &str,
    is_annals: bool,
    count: u32,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&income_request(symbol, is_annals, count)).await
}

/// Regional income statement (v2 path layout).
pub async fn income_v2(
    client: &XueqiuClient,
    symbol: &str,
    options: &StatementV2Options,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&income_v2_request(symbol, options)).await
}

/// Revenue breakdown by business segment.
pub async fn business(
    client: &XueqiuClient,
    symbol: &str,
    is_annals: bool,
    count: u32,
) -> Result<XueqiuResponse<BusinessData>, XueqiuError> {
    client.request_api(&business_request(symbol, is_annals, count)).await
}
