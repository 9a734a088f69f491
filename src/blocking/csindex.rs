//! Blocking twins of [`crate::csindex`].

use chrono::NaiveDate;

use super::XueqiuClient;
use crate::XueqiuError;
use crate::csindex::{
    CsIndexResponse, index_basic_info_request, index_details_data_request, index_perf_request,
    index_weight_top10_request,
};

pub fn index_basic_info(
    client: &XueqiuClient,
    index_code: &str,
) -> Result<CsIndexResponse, XueqiuError> {
    client.request_api(&index_basic_info_request(index_code))
}

pub fn index_details_data(
    client: &XueqiuClient,
    index_code: &str,
    file_lang: u32,
) -> Result<CsIndexResponse, XueqiuError> {
    client.request_api(&index_details_data_request(index_code, file_lang))
}

pub fn index_weight_top10(
    client: &XueqiuClient,
    index_code: &str,
) -> Result<CsIndexResponse, XueqiuError> {
    client.request_api(&index_weight_top10_request(index_code))
}

pub fn index_perf(
    client: &XueqiuClient,
    index_code: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<CsIndexResponse, XueqiuError> {
    client.request_api(&index_perf_request(index_code, start_date, end_date))
}
