//! Blocking twins of [`crate::capital`].

use super::XueqiuClient;
use crate::capital::{
    BlocktransData, CapitalAssortData, CapitalFlowData, CapitalHistoryData, MarginData,
    assort_request, blocktrans_request, flow_request, history_request, margin_request,
};
use crate::{XueqiuError, XueqiuResponse};

pub fn margin(
    client: &XueqiuClient,
    symbol: &str,
    page: u32,
    size: u32,
) -> Result<XueqiuResponse<MarginData>, XueqiuError> {
    client.request_api(&margin_request(symbol, page, size))
}

pub fn blocktrans(
    client: &XueqiuClient,
    symbol: &str,
    page: u32,
    size: u32,
) -> Result<XueqiuResponse<BlocktransData>, XueqiuError> {
    client.request_api(&blocktrans_request(symbol, page, size))
}

pub fn assort(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<CapitalAssortData>, XueqiuError> {
    client.request_api(&assort_request(symbol))
}

pub fn flow(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<CapitalFlowData>, XueqiuError> {
    client.request_api(&flow_request(symbol))
}

pub fn history(
    client: &XueqiuClient,
    symbol: &str,
    count: u32,
) -> Result<XueqiuResponse<CapitalHistoryData>, XueqiuError> {
    client.request_api(&history_request(symbol, count))
}
