mod common;

use httpmock::Method::GET;
use httpmock::MockServer;
use xueqiu_rs::{ApiRequest, XueqiuError};

#[tokio::test(flavor = "multi_thread")]
async fn cookie_is_attached_on_the_primary_host() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/realtime/quotec.json")
            .header("cookie", common::TEST_COOKIE);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::QUOTEC_BODY);
    });

    let client = common::client(&server);
    xueqiu_rs::realtime::quotec(&client, &["SH600519", "SZ000001"])
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test(flavor = "multi_thread")]
async fn cookie_jar_renders_into_one_header() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/realtime/quotec.json")
            .header("cookie", "xq_a_token=abc; u=42");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::QUOTEC_BODY);
    });

    let client = xueqiu_rs::XueqiuClient::builder()
        .cookies([("xq_a_token", "abc"), ("u", "42")])
        .base_url(common::server_url(&server))
        .build()
        .unwrap();
    xueqiu_rs::realtime::quotec(&client, &["SH600519"])
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test(flavor = "multi_thread")]
async fn cookie_never_travels_to_other_hosts() {
    let primary = MockServer::start();
    let aux = MockServer::start();

    // Defined first so a leaked cookie would match here.
    let with_cookie = aux.mock(|when, then| {
        when.method(GET).path("/aux.json").header_exists("cookie");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"leaked": true}"#);
    });
    let without_cookie = aux.mock(|when, then| {
        when.method(GET).path("/aux.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"leaked": false}"#);
    });

    let client = common::client(&primary);
    // Reach the aux server under a different hostname: the policy compares
    // hosts, and both mock servers answer on 127.0.0.1.
    let aux_base = aux.base_url().replace("127.0.0.1", "localhost");
    let request = ApiRequest::get(format!("{aux_base}/aux.json")).skip_envelope_check();
    let payload = client.request_json(&request).await.unwrap();

    assert_eq!(payload["leaked"], serde_json::json!(false));
    assert_eq!(with_cookie.hits(), 0);
    without_cookie.assert();
}

#[tokio::test(flavor = "multi_thread")]
async fn auth_required_without_credential_fails_before_any_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v5/stock/quote.json");
        then.status(200).body("{}");
    });

    let client = common::anon_client(&server);
    let err = xueqiu_rs::realtime::quote_detail(&client, "SH600519")
        .await
        .unwrap_err();

    assert!(matches!(err, XueqiuError::Auth(_)));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn anonymous_endpoints_still_work_without_credential() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v5/stock/realtime/quotec.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::QUOTEC_BODY);
    });

    let client = common::anon_client(&server);
    let resp = xueqiu_rs::realtime::quotec(&client, &["SH600519", "SZ000001"])
        .await
        .unwrap();
    mock.assert();
    assert_eq!(resp.data.unwrap().len(), 2);
}
