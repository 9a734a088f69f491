//! Blocking twins of [`crate::realtime`].

use super::XueqiuClient;
use crate::realtime::{
    KlineData, KlineOptions, Pankou, Quote, QuoteDetailData, kline_request, pankou_request,
    quote_detail_request, quotec_request,
};
use crate::{XueqiuError, XueqiuResponse};

pub fn quotec(
    client: &XueqiuClient,
    symbols: &[&str],
) -> Result<XueqiuResponse<Vec<Quote>>, XueqiuError> {
    client.request_api(&quotec_request(symbols))
}

pub fn quote_detail(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<QuoteDetailData>, XueqiuError> {
    client.request_api(&quote_detail_request(symbol))
}

pub fn pankou(client: &XueqiuClient, symbol: &str) -> Result<XueqiuResponse<Pankou>, XueqiuError> {
    client.request_api(&pankou_request(symbol))
}

pub fn kline(
    client: &XueqiuClient,
    symbol: &str,
    options: &KlineOptions,
) -> Result<XueqiuResponse<KlineData>, XueqiuError> {
    client.request_api(&kline_request(symbol, options))
}
