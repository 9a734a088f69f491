//! Eastmoney datacenter endpoints.
//!
//! An auxiliary provider: no Xueqiu authentication, envelope-error checking
//! disabled, raw payload preserved.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::request::ApiRequest;
use crate::{XueqiuClient, XueqiuError};

pub(crate) const DATACENTER_URL: &str = "https://datacenter-web.eastmoney.com/api/data/v1/get";

/// Quote columns requested alongside the convertible-bond report.
pub(crate) const CONVERTIBLE_BOND_QUOTE_COLUMNS: &str = concat!(
    "f2~01~CONVERT_STOCK_CODE~CONVERT_STOCK_PRICE,",
    "f235~10~SECUCODE~TRANSFER_PRICE,",
    "f236~10~SECUCODE~TRANSFER_VALUE,",
    "f2~10~SECUCODE~CURRENT_BOND_PRICE,",
    "f3~10~SECUCODE~TRANSFER_PREMIUM_RATIO,",
    "f232~10~SECUCODE~CONVERT_STOCK_PRICE_HQ"
);

/// Loose model for Eastmoney datacenter responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EastmoneyResponse {
    pub result: Option<Value>,
    pub success: Option<bool>,
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub(crate) fn convertible_bond_request(page_size: u32, page_number: u32) -> ApiRequest {
    ApiRequest::get(DATACENTER_URL)
        .param("pageSize", page_size)
        .param("pageNumber", page_number)
        .param("sortColumns", "PUBLIC_START_DATE")
        .param("sortTypes", -1)
        .param("reportName", "RPT_BOND_CB_LIST")
        .param("columns", "ALL")
        .param("quoteColumns", CONVERTIBLE_BOND_QUOTE_COLUMNS)
        .param("source", "WEB")
        .param("client", "WEB")
        .skip_envelope_check()
}

/// Convertible-bond listing from the datacenter report tables.
pub async fn convertible_bond(
    client: &XueqiuClient,
    page_size: u32,
    page_number: u32,
) -> Result<EastmoneyResponse, XueqiuError> {
    client
        .request_api(&convertible_bond_request(page_size, page_number))
        .await
}
