//! Broker research endpoints (`/stock/report`).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::parsing::de_datetime;
use crate::core::request::ApiRequest;
use crate::{XueqiuClient, XueqiuError, XueqiuResponse};

pub(crate) const LATEST_PATH: &str = "/stock/report/latest.json";
pub(crate) const EARNING_FORECAST_PATH: &str = "/stock/report/earningforecast.json";

/// One year of consensus earnings forecasts.
#[derive(Debug, Clone, Deserialize)]
pub struct EarningForecastItem {
    pub forecast_year: Option<String>,
    pub eps: Option<f64>,
    pub pe: Option<f64>,
    pub pb: Option<f64>,
    pub roe: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EarningForecastData {
    #[serde(default, rename = "list")]
    pub items: Vec<EarningForecastItem>,
}

/// One institutional research note / rating.
#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionRatingItem {
    pub title: Option<String>,
    pub rpt_comp: Option<String>,
    pub rating_desc: Option<String>,
    pub target_price_min: Option<f64>,
    pub target_price_max: Option<f64>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub pub_date: Option<DateTime<Utc>>,
    pub status_id: Option<i64>,
    pub retweet_count: Option<i64>,
    pub reply_count: Option<i64>,
    pub like_count: Option<i64>,
    pub liked: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstitutionRatingData {
    #[serde(default, rename = "list")]
    pub items: Vec<InstitutionRatingItem>,
}

pub(crate) fn latest_request(symbol: &str) -> ApiRequest {
    ApiRequest::get(LATEST_PATH)
        .param("symbol", symbol)
        .require_auth()
}

pub(crate) fn earning_forecast_request(symbol: &str) -> ApiRequest {
    ApiRequest::get(EARNING_FORECAST_PATH)
        .param("symbol", symbol)
        .require_auth()
}

/// Latest institutional ratings and research notes.
pub async fn latest(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<InstitutionRatingData>, XueqiuError> {
    client.request_api(&latest_request(symbol)).await
}

/// Consensus earnings forecasts.
pub async fn earning_forecast(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<EarningForecastData>, XueqiuError> {
    client.request_api(&earning_forecast_request(symbol)).await
}
