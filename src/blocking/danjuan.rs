//! Blocking twins of [`crate::danjuan`].

use super::XueqiuClient;
use crate::XueqiuError;
use crate::danjuan::{
    DanjuanResponse, fund_achievement_request, fund_asset_request, fund_derived_request,
    fund_detail_request, fund_growth_request, fund_info_request, fund_manager_request,
    fund_nav_history_request, fund_trade_date_request,
};

pub fn fund_detail(client: &XueqiuClient, fund_code: &str) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_detail_request(fund_code))
}

pub fn fund_info(client: &XueqiuClient, fund_code: &str) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_info_request(fund_code))
}

pub fn fund_growth(
    client: &XueqiuClient,
    fund_code: &str,
    day: &str,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_growth_request(fund_code, day))
}

pub fn fund_nav_history(
    client: &XueqiuClient,
    fund_code: &str,
    page: u32,
    size: u32,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_nav_history_request(fund_code, page, size))
}

pub fn fund_achievement(
    client: &XueqiuClient,
    fund_code: &str,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_achievement_request(fund_code))
}

pub fn fund_asset(client: &XueqiuClient, fund_code: &str) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_asset_request(fund_code))
}

pub fn fund_manager(
    client: &XueqiuClient,
    fund_code: &str,
    post_status: u32,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_manager_request(fund_code, post_status))
}

pub fn fund_trade_date(
    client: &XueqiuClient,
    fund_code: &str,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_trade_date_request(fund_code))
}

pub fn fund_derived(
    client: &XueqiuClient,
    fund_code: &str,
) -> Result<DanjuanResponse, XueqiuError> {
    client.request_api(&fund_derived_request(fund_code))
}
