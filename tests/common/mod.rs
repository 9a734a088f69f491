#![allow(dead_code)]

use httpmock::MockServer;
use url::Url;

pub const TEST_COOKIE: &str = "xq_a_token=test-token";

pub fn server_url(server: &MockServer) -> Url {
    Url::parse(&server.base_url()).unwrap()
}

/// An authenticated async client pointed at the mock server.
pub fn client(server: &MockServer) -> xueqiu_rs::XueqiuClient {
    xueqiu_rs::XueqiuClient::builder()
        .cookie(TEST_COOKIE)
        .base_url(server_url(server))
        .build()
        .unwrap()
}

/// An async client with no credential configured.
pub fn anon_client(server: &MockServer) -> xueqiu_rs::XueqiuClient {
    xueqiu_rs::XueqiuClient::builder()
        .base_url(server_url(server))
        .build()
        .unwrap()
}

/// An authenticated blocking client pointed at the mock server.
pub fn blocking_client(server: &MockServer) -> xueqiu_rs::blocking::XueqiuClient {
    xueqiu_rs::XueqiuClient::builder()
        .cookie(TEST_COOKIE)
        .base_url(server_url(server))
        .build_blocking()
        .unwrap()
}

pub const QUOTEC_BODY: &str = r#"{
  "data": [
    {"symbol": "SH600519", "current": 1520.5, "percent": 0.62, "chg": 9.4, "timestamp": 1714442400000},
    {"symbol": "SZ000001", "current": 10.42, "percent": -0.29, "chg": -0.03, "timestamp": 1714442400000}
  ],
  "error_code": 0,
  "error_description": null
}"#;
