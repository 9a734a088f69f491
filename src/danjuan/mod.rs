//! Danjuan fund-data endpoints.
//!
//! An auxiliary provider on `danjuanfunds.com`: no Xueqiu authentication,
//! envelope-error checking disabled, raw payload preserved.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::request::ApiRequest;
use crate::{XueqiuClient, XueqiuError};

pub(crate) const FUND_DETAIL_URL: &str = "https://danjuanfunds.com/djapi/fund/detail";
pub(crate) const FUND_INFO_URL: &str = "https://danjuanfunds.com/djapi/fund";
pub(crate) const FUND_GROWTH_URL: &str = "https://danjuanfunds.com/djapi/fund/growth";
pub(crate) const FUND_NAV_HISTORY_URL: &str = "https://danjuanfunds.com/djapi/fund/nav/history";
pub(crate) const FUND_ACHIEVEMENT_URL: &str =
    "https://danjuanfunds.com/djapi/fundx/base/fund/achievement";
pub(crate) const FUND_ASSET_URL: &str = "https://danjuanfunds.com/djapi/holding/fund/asset";
pub(crate) const FUND_MANAGER_URL: &str = "https://danjuanfunds.com/djapi/fundx/base/fund/manager/query";
pub(crate) const FUND_TRADE_DATE_URL: &str =
    "https://danjuanfunds.com/djapi/fund/order/fund_trade_date";
pub(crate) const FUND_DERIVED_URL: &str = "https://danjuanfunds.com/djapi/fundx/base/fund/derived";

/// Loose model for Danjuan responses; the raw payload is kept as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DanjuanResponse {
    pub data: Option<Value>,
    pub code: Option<i64>,
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub(crate) fn fund_detail_request(fund_code: &str) -> ApiRequest {
    ApiRequest::get(format!("{FUND_DETAIL_URL}/{fund_code}")).skip_envelope_check()
}

pub(crate) fn fund_info_request(fund_code: &str) -> ApiRequest {
    ApiRequest::get(format!("{FUND_INFO_URL}/{fund_code}")).skip_envelope_check()
}

pub(crate) fn fund_growth_request(fund_code: &str, day: &str) -> ApiRequest {
    ApiRequest::get(format!("{FUND_GROWTH_URL}/{fund_code}"))
        .param("day", day)
        .skip_envelope_check()
}

pub(crate) fn fund_nav_history_request(fund_code: &str, page: u32, size: u32) -> ApiRequest {
    ApiRequest::get(format!("{FUND_NAV_HISTORY_URL}/{fund_code}"))
        .param("page", page)
        .param("size", size)
        .skip_envelope_check()
}

pub(crate) fn fund_achievement_request(fund_code: &str) -> ApiRequest {
    ApiRequest::get(format!("{FUND_ACHIEVEMENT_URL}/{fund_code}")).skip_envelope_check()
}

pub(crate) fn fund_asset_request(fund_code: &str) -> ApiRequest {
    ApiRequest::get(FUND_ASSET_URL)
        .param("fund_code", fund_code)
        .skip_envelope_check()
}

pub(crate) fn fund_manager_request(fund_code: &str, post_status: u32) -> ApiRequest {
    ApiRequest::get(FUND_MANAGER_URL)
        .param("fund_code", fund_code)
        .param("post_status", post_status)
        .skip_envelope_check()
}

pub(crate) fn fund_trade_date_request(fund_code: &str) -> ApiRequest {
    ApiRequest::get(FUND_TRADE_DATE_URL)
        .param("fd_code", fund_code)
        .skip_envelope_check()
}

pub(crate) fn fund_derived_request(fund_code: &str) -> ApiRequest {
    ApiRequest::get(format!("{FUND_DERIVED_URL}/{fund_code}")).skip_envelope_check()
}

/// Full fund detail page payload.
pub async fn fund_detail(
    client: &XueqiuClient,
    fund_code: &str,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_detail_request(fund_code)).await
}

/// Basic fund info.
pub async fn fund_info(
    client: &XueqiuClient,
    fund_code: &str,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_info_request(fund_code)).await
}

/// NAV growth series; `day` selects the window (`ty` = this year).
pub async fn fund_growth(
    client: &XueqiuClient,
    fund_code: &str,
    day: &str,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_growth_request(fund_code, day)).await
}

/// Paginated NAV history.
pub async fn fund_nav_history(
    client: &XueqiuClient,
    fund_code: &str,
    page: u32,
    size: u32,
) -> Result<DanjuanResponse, XueqiuError> {
    client
        .request_api(&fund_nav_history_request(fund_code, page, size))
        .await
}

/// Performance achievements over standard windows.
pub async fn fund_achievement(
    client: &XueqiuClient,
    fund_code: &str,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_achievement_request(fund_code)).await
}

/// Asset allocation breakdown.
pub async fn fund_asset(
    client: &XueqiuClient,
    fund_code: &str,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_asset_request(fund_code)).await
}

/// Fund manager roster; `post_status = 1` selects current managers.
pub async fn fund_manager(
    client: &XueqiuClient,
    fund_code: &str,
    post_status: u32,
) -> Result<DanjuanResponse, XueqiuError> {
    client
        .request_api(&fund_manager_request(fund_code, post_status))
        .await
}

/// Trade calendar info for the fund.
pub async fn fund_trade_date(
    client: &XueqiuClient,
    fund_code: &str,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_trade_date_request(fund_code)).await
}

/// Derived figures (drawdown, volatility, ...).
pub async fn fund_derived(
    client: &XueqiuClient,
    fund_code: &str,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_derived_request(fund_code)).await
}
