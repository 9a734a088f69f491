use serde_json::json;
use xueqiu_rs::{Envelope, XueqiuResponse};

#[test]
fn error_code_style_maps_onto_canonical_shape() {
    let env = Envelope::from_value(json!({
        "error_code": 0,
        "error_description": null,
        "data": {"symbol": "SH600519"}
    }));
    assert_eq!(env.error_code, 0);
    assert_eq!(env.error_description, None);
    assert_eq!(env.payload, json!({"symbol": "SH600519"}));
    assert!(env.is_success());
}

#[test]
fn error_code_style_failure() {
    let env = Envelope::from_value(json!({
        "error_code": 400016,
        "error_description": "token expired",
        "data": null
    }));
    assert_eq!(env.error_code, 400016);
    assert_eq!(env.error_description.as_deref(), Some("token expired"));
    assert!(!env.is_success());
}

#[test]
fn success_style_maps_onto_canonical_shape() {
    let env = Envelope::from_value(json!({
        "code": 0,
        "message": "ok",
        "success": true,
        "data": [1, 2, 3]
    }));
    assert_eq!(env.error_code, 0);
    assert_eq!(env.error_description.as_deref(), Some("ok"));
    assert_eq!(env.success, Some(true));
    assert_eq!(env.payload, json!([1, 2, 3]));
    assert!(env.is_success());
}

#[test]
fn explicit_success_false_overrides_zero_code() {
    let env = Envelope::from_value(json!({
        "code": 0,
        "message": "blocked",
        "success": false
    }));
    assert_eq!(env.error_code, 0);
    assert!(!env.is_success());
}

#[test]
fn bare_array_wraps_transparently() {
    let env = Envelope::from_value(json!([{"x": 1}, {"x": 2}]));
    assert_eq!(env.payload, json!([{"x": 1}, {"x": 2}]));
    assert_eq!(env.error_code, 0);
    assert_eq!(env.success, None);
    assert!(env.is_success());
}

#[test]
fn bare_scalar_wraps_transparently() {
    let env = Envelope::from_value(json!(42));
    assert_eq!(env.payload, json!(42));
    assert!(env.is_success());
}

#[test]
fn markerless_object_is_the_payload() {
    let env = Envelope::from_value(json!({"quote": {"current": 10.0}, "market": {}}));
    assert_eq!(env.payload, json!({"quote": {"current": 10.0}, "market": {}}));
    assert_eq!(env.error_code, 0);
    assert!(env.is_success());
}

#[test]
fn malformed_error_code_falls_back_to_zero() {
    let env = Envelope::from_value(json!({
        "error_code": "not-a-number",
        "data": {"x": 1}
    }));
    assert_eq!(env.error_code, 0);
    assert!(env.is_success());
}

#[test]
fn digit_string_error_code_is_coerced() {
    let env = Envelope::from_value(json!({"error_code": "400016", "data": null}));
    assert_eq!(env.error_code, 400016);
    assert!(!env.is_success());
}

#[test]
fn envelope_extras_are_preserved() {
    let env = Envelope::from_value(json!({
        "error_code": 0,
        "data": null,
        "server_time": 1714442400000u64
    }));
    assert_eq!(env.extra.get("server_time"), Some(&json!(1714442400000u64)));
}

#[test]
fn typed_response_accepts_every_convention() {
    #[derive(serde::Deserialize)]
    struct Payload {
        x: i64,
    }

    let resp: XueqiuResponse<Payload> =
        serde_json::from_value(json!({"error_code": 0, "data": {"x": 5}})).unwrap();
    assert_eq!(resp.data.as_ref().unwrap().x, 5);
    assert!(resp.is_success());

    let resp: XueqiuResponse<Payload> =
        serde_json::from_value(json!({"code": 0, "success": true, "data": {"x": 7}})).unwrap();
    assert_eq!(resp.data.unwrap().x, 7);

    let resp: XueqiuResponse<Vec<i64>> = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(resp.data.unwrap(), vec![1, 2, 3]);

    let resp: XueqiuResponse<Payload> = serde_json::from_value(json!({"x": 9})).unwrap();
    assert_eq!(resp.data.unwrap().x, 9);
}

#[test]
fn typed_response_missing_data_is_none() {
    let resp: XueqiuResponse<Vec<i64>> =
        serde_json::from_value(json!({"error_code": 0, "error_description": null})).unwrap();
    assert!(resp.data.is_none());
    assert!(resp.is_success());
}
