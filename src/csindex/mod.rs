//! China Securities Index (CSIndex) endpoints.
//!
//! An auxiliary provider: no Xueqiu authentication, no shared envelope
//! convention (so envelope-error checking is disabled), permissive decoding
//! with the raw payload preserved.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::request::ApiRequest;
use crate::{XueqiuClient, XueqiuError};

pub(crate) const INDEX_BASIC_INFO_URL: &str =
    "https://www.csindex.com.cn/csindex-home/indexInfo/index-basic-info";
pub(crate) const INDEX_DETAILS_DATA_URL: &str =
    "https://www.csindex.com.cn/csindex-home/indexInfo/index-details-data";
pub(crate) const INDEX_WEIGHT_TOP10_URL: &str =
    "https://www.csindex.com.cn/csindex-home/index/weight/top10";
pub(crate) const INDEX_PERF_URL: &str = "https://www.csindex.com.cn/csindex-home/perf/index-perf";

/// Loose model for CSIndex responses; the raw payload is kept as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CsIndexResponse {
    pub data: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub(crate) fn index_basic_info_request(index_code: &str) -> ApiRequest {
    ApiRequest::get(format!("{INDEX_BASIC_INFO_URL}/{index_code}")).skip_envelope_check()
}

pub(crate) fn index_details_data_request(index_code: &str, file_lang: u32) -> ApiRequest {
    ApiRequest::get(INDEX_DETAILS_DATA_URL)
        .param("fileLang", file_lang)
        .param("indexCode", index_code)
        .skip_envelope_check()
}

pub(crate) fn index_weight_top10_request(index_code: &str) -> ApiRequest {
    ApiRequest::get(format!("{INDEX_WEIGHT_TOP10_URL}/{index_code}")).skip_envelope_check()
}

pub(crate) fn index_perf_request(
    index_code: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> ApiRequest {
    ApiRequest::get(INDEX_PERF_URL)
        .param("indexCode", index_code)
        .param("startDate", start_date.format("%Y%m%d"))
        .param("endDate", end_date.format("%Y%m%d"))
        .skip_envelope_check()
}

/// Basic descriptive data of an index.
pub async fn index_basic_info(
    client: &XueqiuClient,
    index_code: &str,
) -> Result<CsIndexResponse, XueqiuError> {
    client.request_api(&index_basic_info_request(index_code)).await
}

/// Detail figures of an index.
pub async fn index_details_data(
    client: &XueqiuClient,
    index_code: &str,
    file_lang: u32,
) -> Result<CsIndexResponse, XueqiuError> {
    client
        .request_api(&index_details_data_request(index_code, file_lang))
        .await
}

/// Top-ten constituents by weight.
pub async fn index_weight_top10(
    client: &XueqiuClient,
    index_code: &str,
) -> Result<CsIndexResponse, XueqiuError> {
    client
        .request_api(&index_weight_top10_request(index_code))
        .await
}

/// Daily index performance within a date window.
pub async fn index_perf(
    client: &XueqiuClient,
    index_code: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<CsIndexResponse, XueqiuError> {
    client
        .request_api(&index_perf_request(index_code, start_date, end_date))
        .await
}
