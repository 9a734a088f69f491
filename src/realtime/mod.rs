//! Real-time quotes, order book and k-line endpoints.

mod model;

pub use model::{
    KlineBar, KlineData, MarketStatus, OrderBookLevel, Pankou, Quote, QuoteDetail,
    QuoteDetailData, QuoteTag,
};

use chrono::Utc;

use crate::core::request::ApiRequest;
use crate::{XueqiuClient, XueqiuError, XueqiuResponse};

pub(crate) const QUOTEC_PATH: &str = "/v5/stock/realtime/quotec.json";
pub(crate) const PANKOU_PATH: &str = "/v5/stock/realtime/pankou.json";
pub(crate) const QUOTE_DETAIL_PATH: &str = "/v5/stock/quote.json";
pub(crate) const KLINE_PATH: &str = "/v5/stock/chart/kline.json";

/// Indicator set requested for k-lines unless overridden.
pub const DEFAULT_KLINE_INDICATOR: &str = "kline,pe,pb,ps,pcf,market_capital,agt,ggt,balance";

/// Options for [`kline`].
#[derive(Debug, Clone)]
pub struct KlineOptions {
    /// Bar period: `day`, `week`, `month`, `60m`, ...
    pub period: String,
    /// Number of bars, counted backwards from `begin_ms`.
    pub count: u32,
    /// End of the window in epoch milliseconds; `None` means now.
    pub begin_ms: Option<i64>,
    /// Comma-separated indicator list.
    pub indicator: String,
}

impl Default for KlineOptions {
    fn default() -> Self {
        KlineOptions {
            period: "day".into(),
            count: 284,
            begin_ms: None,
            indicator: DEFAULT_KLINE_INDICATOR.into(),
        }
    }
}

pub(crate) fn quotec_request(symbols: &[&str]) -> ApiRequest {
    ApiRequest::get(QUOTEC_PATH).param("symbol", symbols.join(","))
}

pub(crate) fn quote_detail_request(symbol: &str) -> ApiRequest {
    ApiRequest::get(QUOTE_DETAIL_PATH)
        .param("extend", "detail")
        .param("symbol", symbol)
        .require_auth()
}

pub(crate) fn pankou_request(symbol: &str) -> ApiRequest {
    ApiRequest::get(PANKOU_PATH)
        .param("symbol", symbol)
        .require_auth()
}

pub(crate) fn kline_request(symbol: &str, options: &KlineOptions) -> ApiRequest {
    let begin = options
        .begin_ms
        .unwrap_or_else(|| Utc::now().timestamp_millis());
    ApiRequest::get(KLINE_PATH)
        .param("symbol", symbol)
        .param("begin", begin)
        .param("period", &options.period)
        .param("type", "before")
        .param("count", -i64::from(options.count))
        .param("indicator", &options.indicator)
        .require_auth()
}

/// Lightweight quotes for a batch of symbols, preserving input order.
/// One of the few endpoints that works without a cookie.
pub async fn quotec(
    client: &XueqiuClient,
    symbols: &[&str],
) -> Result<XueqiuResponse<Vec<Quote>>, XueqiuError> {
    client.request_api(&quotec_request(symbols)).await
}

/// Full quote detail for one symbol, including market status and tags.
pub async fn quote_detail(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<QuoteDetailData>, XueqiuError> {
    client.request_api(&quote_detail_request(symbol)).await
}

/// Order book snapshot.
pub async fn pankou(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<Pankou>, XueqiuError> {
    client.request_api(&pankou_request(symbol)).await
}

/// K-line bars ending at `begin_ms` (or now), newest window first.
pub async fn kline(
    client: &XueqiuClient,
    symbol: &str,
    options: &KlineOptions,
) -> Result<XueqiuResponse<KlineData>, XueqiuError> {
    client.request_api(&kline_request(symbol, options)).await
}
