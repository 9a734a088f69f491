mod common;

use httpmock::Method::GET;
use httpmock::MockServer;
use serde_json::json;
use xueqiu_rs::{ApiRequest, XueqiuError};

#[tokio::test(flavor = "multi_thread")]
async fn error_code_style_envelope_raises_api_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v5/stock/quote.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"error_code": 400016, "error_description": "token expired", "data": null}"#);
    });

    let client = common::client(&server);
    let err = xueqiu_rs::realtime::quote_detail(&client, "SH600519")
        .await
        .unwrap_err();

    // API failures are logical, not transient: exactly one request.
    mock.assert_hits(1);
    match err {
        XueqiuError::Api {
            error_code,
            description,
            url,
            payload,
            ..
        } => {
            assert_eq!(error_code, 400016);
            assert_eq!(description.as_deref(), Some("token expired"));
            assert!(url.contains("/v5/stock/quote.json"));
            assert_eq!(payload["error_code"], json!(400016));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn success_false_envelope_raises_the_same_error_type() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v5/stock/quote.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"code": 400016, "message": "blocked", "success": false}"#);
    });

    let client = common::client(&server);
    let err = xueqiu_rs::realtime::quote_detail(&client, "SH600519")
        .await
        .unwrap_err();

    mock.assert_hits(1);
    match err {
        XueqiuError::Api {
            error_code,
            description,
            ..
        } => {
            assert_eq!(error_code, 400016);
            assert_eq!(description.as_deref(), Some("blocked"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn explicit_success_true_is_not_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v5/stock/quote.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"code": 1, "message": "ignored", "success": true, "data": {}}"#);
    });

    let client = common::client(&server);
    xueqiu_rs::realtime::quote_detail(&client, "SH600519")
        .await
        .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_error_code_does_not_mask_good_data() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/weird.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"error_code": "???", "data": {"x": 1}}"#);
    });

    let client = common::client(&server);
    let payload = client
        .request_json(&ApiRequest::get("/weird.json"))
        .await
        .unwrap();
    assert_eq!(payload["data"]["x"], json!(1));
}

#[tokio::test(flavor = "multi_thread")]
async fn envelope_check_can_be_disabled_per_request() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/raw.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"error_code": 400016, "data": null}"#);
    });

    let client = common::client(&server);
    let payload = client
        .request_json(&ApiRequest::get("/raw.json").skip_envelope_check())
        .await
        .unwrap();
    assert_eq!(payload["error_code"], json!(400016));
}
