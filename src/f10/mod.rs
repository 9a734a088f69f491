//! F10 company-profile endpoints (`/v5/stock/f10/cn`).
//!
//! The F10 wire names drift the most of any Xueqiu surface; the models keep
//! the historical spellings as serde aliases.

mod model;

pub use model::{
    BonusAddition, BonusData, BonusDividendItem, BusinessAnalysisData, BusinessAnalysisItem,
    IndustryCompanyInfo, IndustryCompareData, IndustryCompareItem, IndustryCompareStats,
    IndustryData, IndustryTag, MainIndicatorData, MainIndicatorItem, OrgHoldingChangeData,
    OrgHoldingChangeItem, ShareholderCountData, ShareholderCountItem, SharesChangeData,
    SharesChangeItem, SharesRestrictionItem, SkholderChangeData, SkholderChangeItem, SkholderData,
    SkholderItem, TimePoint, TopHolderItem, TopHoldersData,
};

use crate::core::request::ApiRequest;
use crate::{XueqiuClient, XueqiuError, XueqiuResponse};

pub(crate) const SKHOLDERCHG_PATH: &str = "/v5/stock/f10/cn/skholderchg.json";
pub(crate) const SKHOLDER_PATH: &str = "/v5/stock/f10/cn/skholder.json";
pub(crate) const INDUSTRY_PATH: &str = "/v5/stock/f10/cn/industry.json";
pub(crate) const HOLDERS_PATH: &str = "/v5/stock/f10/cn/holders.json";
pub(crate) const BONUS_PATH: &str = "/v5/stock/f10/cn/bonus.json";
pub(crate) const ORG_HOLDING_CHANGE_PATH: &str = "/v5/stock/f10/cn/org_holding/change.json";
pub(crate) const INDUSTRY_COMPARE_PATH: &str = "/v5/stock/f10/cn/industry/compare.json";
pub(crate) const BUSINESS_ANALYSIS_PATH: &str = "/v5/stock/f10/cn/business_analysis.json";
pub(crate) const SHARESCHG_PATH: &str = "/v5/stock/f10/cn/shareschg.json";
pub(crate) const TOP_HOLDERS_PATH: &str = "/v5/stock/f10/cn/top_holders.json";
pub(crate) const INDICATOR_PATH: &str = "/v5/stock/f10/cn/indicator.json";

fn symbol_request(path: &'static str, symbol: &str) -> ApiRequest {
    ApiRequest::get(path).param("symbol", symbol).require_auth()
}

pub(crate) fn skholderchg_request(symbol: &str) -> ApiRequest {
    symbol_request(SKHOLDERCHG_PATH, symbol)
}

pub(crate) fn skholder_request(symbol: &str) -> ApiRequest {
    symbol_request(SKHOLDER_PATH, symbol)
}

pub(crate) fn industry_request(symbol: &str) -> ApiRequest {
    symbol_request(INDUSTRY_PATH, symbol)
}

pub(crate) fn holders_request(symbol: &str) -> ApiRequest {
    symbol_request(HOLDERS_PATH, symbol)
}

pub(crate) fn bonus_request(symbol: &str, page: u32, size: u32) -> ApiRequest {
    ApiRequest::get(BONUS_PATH)
        .param("symbol", symbol)
        .param("page", page)
        .param("size", size)
        .require_auth()
}

pub(crate) fn org_holding_change_request(symbol: &str) -> ApiRequest {
    symbol_request(ORG_HOLDING_CHANGE_PATH, symbol)
}

pub(crate) fn industry_compare_request(symbol: &str, kind: &str) -> ApiRequest {
    ApiRequest::get(INDUSTRY_COMPARE_PATH)
        .param("type", kind)
        .param("symbol", symbol)
        .require_auth()
}

pub(crate) fn business_analysis_request(symbol: &str) -> ApiRequest {
    symbol_request(BUSINESS_ANALYSIS_PATH, symbol)
}

pub(crate) fn shareschg_request(symbol: &str, count: u32) -> ApiRequest {
    ApiRequest::get(SHARESCHG_PATH)
        .param("symbol", symbol)
        .param("count", count)
        .require_auth()
}

pub(crate) fn top_holders_request(symbol: &str, circula: u32) -> ApiRequest {
    ApiRequest::get(TOP_HOLDERS_PATH)
        .param("symbol", symbol)
        .param("circula", circula)
        .require_auth()
}

pub(crate) fn indicator_request(symbol: &str) -> ApiRequest {
    symbol_request(INDICATOR_PATH, symbol)
}

/// Insider trades by executives.
pub async fn skholderchg(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<SkholderChangeData>, XueqiuError> {
    client.request_api(&skholderchg_request(symbol)).await
}

/// Executives and senior managers.
pub async fn skholder(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<SkholderData>, XueqiuError> {
    client.request_api(&skholder_request(symbol)).await
}

/// Industry and concept classification plus basic company info.
pub async fn industry(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<IndustryData>, XueqiuError> {
    client.request_api(&industry_request(symbol)).await
}

/// Shareholder head-count history.
pub async fn holders(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<ShareholderCountData>, XueqiuError> {
    client.request_api(&holders_request(symbol)).await
}

/// Dividends, allotments and secondary offerings.
pub async fn bonus(
    client: &XueqiuClient,
    symbol: &str,
    page: u32,
    size: u32,
) -> Result<XueqiuResponse<BonusData>, XueqiuError> {
    client.request_api(&bonus_request(symbol, page, size)).await
}

/// Institutional holding changes.
pub async fn org_holding_change(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<OrgHoldingChangeData>, XueqiuError> {
    client.request_api(&org_holding_change_request(symbol)).await
}

/// Peer comparison within the stock's industry. `kind` is usually `single`.
pub async fn industry_compare(
    client: &XueqiuClient,
    symbol: &str,
    kind: &str,
) -> Result<XueqiuResponse<IndustryCompareData>, XueqiuError> {
    client.request_api(&industry_compare_request(symbol, kind)).await
}

/// Management's operating analysis text per period.
pub async fn business_analysis(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<BusinessAnalysisData>, XueqiuError> {
    client.request_api(&business_analysis_request(symbol)).await
}

/// Share-structure changes and upcoming restricted-share releases.
pub async fn shareschg(
    client: &XueqiuClient,
    symbol: &str,
    count: u32,
) -> Result<XueqiuResponse<SharesChangeData>, XueqiuError> {
    client.request_api(&shareschg_request(symbol, count)).await
}

/// Top-ten shareholders. `circula = 1` selects the float ranking.
pub async fn top_holders(
    client: &XueqiuClient,
    symbol: &str,
    circula: u32,
) -> Result<XueqiuResponse<TopHoldersData>, XueqiuError> {
    client.request_api(&top_holders_request(symbol, circula)).await
}

/// Main indicators of the F10 overview.
pub async fn indicator(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<MainIndicatorData>, XueqiuError> {
    client.request_api(&indicator_request(symbol)).await
}
