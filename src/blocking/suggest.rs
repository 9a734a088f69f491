//! Blocking twin of [`crate::suggest`].

use super::XueqiuClient;
use crate::XueqiuError;
use crate::suggest::{SuggestStockResponse, stock_request};

pub fn stock(client: &XueqiuClient, keyword: &str) -> Result<SuggestStockResponse, XueqiuError> {
    client.request_api(&stock_request(keyword))
}
