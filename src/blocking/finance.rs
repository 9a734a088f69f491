//! Blocking twins of [`crate::finance`].

use super::XueqiuClient;
use crate::finance::{
    BusinessData, StatementData, StatementV2Options, balance_request, balance_v2_request,
    business_request, cash_flow_request, cash_flow_v2_request, income_request, income_v2_request,
    indicator_request, indicator_v2_request,
};
use crate::{XueqiuError, XueqiuResponse};

pub fn cash_flow(
    client: &XueqiuClient,
    symbol: &str,
    is_annals: bool,
    count: u32,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&cash_flow_request(symbol, is_annals, count))
}

pub fn cash_flow_v2(
    client: &XueqiuClient,
    symbol: &str,
    options: &StatementV2Options,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&cash_flow_v2_request(symbol, options))
}

pub fn indicator(
    client: &XueqiuClient,
    symbol: &str,
    is_annals: bool,
    count: u32,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&indicator_request(symbol, is_annals, count))
}

pub fn indicator_v2(
    client: &XueqiuClient,
    symbol: &str,
    options: &StatementV2Options,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&indicator_v2_request(symbol, options))
}

pub fn balance(
    client: &XueqiuClient,
    symbol: &str,
    is_annals: bool,
    count: u32,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&balance_request(symbol, is_annals, count))
}

pub fn balance_v2(
    client: &XueqiuClient,
    symbol: &str,
    options: &StatementV2Options,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&balance_v2_request(symbol, options))
}

pub fn income(
    client: &XueqiuClient,
    symbol: &str,
    is_annals: bool,
    count: u32,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&income_request(symbol, is_annals, count))
}

pub fn income_v2(
    client: &XueqiuClient,
    symbol: &str,
    options: &StatementV2Options,
) -> Result<XueqiuResponse<StatementData>, XueqiuError> {
    client.request_api(&income_v2_request(symbol, options))
}

pub fn business(
    client: &XueqiuClient,
    symbol: &str,
    is_annals: bool,
    count: u32,
) -> Result<XueqiuResponse<BusinessData>, XueqiuError> {
    client.request_api(&business_request(symbol, is_annals, count))
}
