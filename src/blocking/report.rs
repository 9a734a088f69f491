//! Blocking twins of [`crate::report`].

use super::XueqiuClient;
use crate::report::{
    EarningForecastData, InstitutionRatingData, earning_forecast_request, latest_request,
};
use crate::{XueqiuError, XueqiuResponse};

pub fn latest(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<InstitutionRatingData>, XueqiuError> {
    client.request_api(&latest_request(symbol))
}

pub fn earning_forecast(
    client: &XueqiuClient,
    symbol: &str,
) -> Result<XueqiuResponse<EarningForecastData>, XueqiuError> {
    client.request_api(&earning_forecast_request(symbol))
}
