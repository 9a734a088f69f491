//! Blocking twins of [`crate::f10`].

use super::XueqiuClient;
use crate::f10::{
    BonusData, BusinessAnalysisData, IndustryCompareData, IndustryData, MainIndicatorData,
    OrgHoldingChangeData, ShareholderCountData, SharesChangeData, SkholderChangeData, SkholderData,
    TopHoldersData, bonus_request, business_analysis_request, holders_request, indicator_request,
    industry_compare_request, industry_request, org_holding_change_request, shareschg_request,
    skholder_request, skholderchg_request, top_holders_request,
};
use crate::{XueqiuError, XueqiuResponse};

pub fn skholderchg(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<SkholderChangeData>, XueqiuError> {
    client.request_api(&skholderchg_request(symbol))
}

pub fn skholder(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<SkholderData>, XueqiuError> {
    client.request_api(&skholder_request(symbol))
}

pub fn industry(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<IndustryData>, XueqiuError> {
    client.request_api(&industry_request(symbol))
}

pub fn holders(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<ShareholderCountData>, XueqiuError> {
    client.request_api(&holders_request(symbol))
}

pub fn bonus(
    client: &XueqiuClient,
    symbol: &str,
    page: u32,
    size: u32,
) -> Result<XueqiuResponse<BonusData>, XueqiuError> {
    client.request_api(&bonus_request(symbol, page, size))
}

pub fn org_holding_change(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<OrgHoldingChangeData>, XueqiuError> {
    client.request_api(&org_holding_change_request(symbol))
}

pub fn industry_compare(
    client: &XueqiuClient,
    symbol: &str,
    kind: &str,
) -> Result<XueqiuResponse<IndustryCompareData>, XueqiuError> {
    client.request_api(&industry_compare_request(symbol, kind))
}

pub fn business_analysis(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<BusinessAnalysisData>, XueqiuError> {
    client.request_api(&business_analysis_request(symbol))
}

pub fn shareschg(
    client: &XueqiuClient,
    symbol: &str,
    count: u32,
) -> Result<XueqiuResponse<SharesChangeData>, XueqiuError> {
    client.request_api(&shareschg_request(symbol, count))
}

pub fn top_holders(
    client: &XueqiuClient,
    symbol: &str,
    circula: u32,
) -> Result<XueqiuResponse<TopHoldersData>, XueqiuError> {
    client.request_api(&top_holders_request(symbol, circula))
}

pub fn indicator(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<MainIndicatorData>, XueqiuError> {
    client.request_api(&indicator_request(symbol))
}
