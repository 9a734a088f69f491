//! Blocking twins of [`crate::cube`].

use std::collections::HashMap;

use super::XueqiuClient;
use crate::cube::{
    CubeNavSeries, CubeQuote, CubeRebalancingCurrentData, CubeRebalancingHistoryData,
    nav_daily_request, quote_request, rebalancing_current_request, rebalancing_history_request,
};
use crate::{XueqiuError, XueqiuResponse};

pub fn nav_daily(
    client: &XueqiuClient,
    cube_symbol: &str,
) -> Result<XueqiuResponse<Vec<CubeNavSeries>>, XueqiuError> {
    client.request_api(&nav_daily_request(cube_symbol))
}

pub fn rebalancing_history(
    client: &XueqiuClient,
    cube_symbol: &str,
    count: u32,
    page: u32,
) -> Result<XueqiuResponse<CubeRebalancingHistoryData>, XueqiuError> {
    client.request_api(&rebalancing_history_request(cube_symbol, count, page))
}

pub fn rebalancing_current(
    client: &XueqiuClient,
    cube_symbol: &str,
) -> Result<XueqiuResponse<CubeRebalancingCurrentData>, XueqiuError> {
    client.request_api(&rebalancing_current_request(cube_symbol))
}

pub fn quote(
    client: &XueqiuClient,
    code: &str,
) -> Result<XueqiuResponse<HashMap<String, CubeQuote>>, XueqiuError> {
    client.request_api(&quote_request(code))
}
