//! Blocking twins of [`crate::portfolio`].

use super::XueqiuClient;
use crate::portfolio::{PortfolioListData, PortfolioStocksData, list_request, stocks_request};
use crate::{XueqiuError, XueqiuResponse};

pub fn list(
    client: &XueqiuClient,
    system: bool,
) -> Result<XueqiuResponse<PortfolioListData>, XueqiuError> {
    client.request_api(&list_request(system))
}

pub fn stocks(
    client: &XueqiuClient,
    pid: i64,
    size: u32,
    category: u32,
) -> Result<XueqiuResponse<PortfolioStocksData>, XueqiuError> {
    client.request_api(&stocks_request(pid, size, category))
}
