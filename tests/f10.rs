mod common;

use httpmock::Method::GET;
use httpmock::MockServer;
use serde_json::json;
use xueqiu_rs::XueqiuResponse;
use xueqiu_rs::f10::{SharesChangeData, TopHoldersData};

#[test]
fn top_holders_accept_historical_wire_names() {
    // Old spelling...
    let old: XueqiuResponse<TopHoldersData> = serde_json::from_value(json!({
        "data": {
            "items": [
                {"holder_name": "中国贵州茅台酒厂", "held_num": 679_900_000.0, "held_ratio": 54.07, "chg": 0.0}
            ]
        },
        "error_code": 0
    }))
    .unwrap();
    let item = &old.data.unwrap().items[0];
    assert_eq!(item.shareholder_name.as_deref(), Some("中国贵州茅台酒厂"));
    assert_eq!(item.held_shares, Some(679_900_000.0));

    // ...and the current one decode into the same fields.
    let new: XueqiuResponse<TopHoldersData> = serde_json::from_value(json!({
        "data": {
            "items": [
                {"shareholder_name": "香港中央结算", "held_shares": 80_000_000.0, "change": -1.5}
            ]
        },
        "error_code": 0
    }))
    .unwrap();
    let item = &new.data.unwrap().items[0];
    assert_eq!(item.shareholder_name.as_deref(), Some("香港中央结算"));
    assert_eq!(item.change, Some(-1.5));
}

#[test]
fn shares_change_restrictions_accept_the_short_names() {
    let resp: XueqiuResponse<SharesChangeData> = serde_json::from_value(json!({
        "data": {
            "items": [
                {"chg_date": 1714442400000i64, "chg_reason": "增发", "total_shares": 1.26e9}
            ],
            "restricts": [
                {"ft_time": 1735660800000i64, "ft_ratio": 1.2, "ft_nums": 1.5e7, "ft_type": "定向增发"}
            ]
        },
        "error_code": 0
    }))
    .unwrap();

    let data = resp.data.unwrap();
    assert_eq!(data.items[0].change_reason.as_deref(), Some("增发"));
    assert!(data.items[0].change_date.is_some());
    assert_eq!(data.restrictions[0].release_ratio, Some(1.2));
    assert_eq!(data.restrictions[0].release_type.as_deref(), Some("定向增发"));
}

#[tokio::test(flavor = "multi_thread")]
async fn industry_compare_passes_type_and_symbol() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/f10/cn/industry/compare.json")
            .query_param("type", "single")
            .query_param("symbol", "SH600519")
            .header("cookie", common::TEST_COOKIE);
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{
                  "data": {
                    "ind_name": "白酒",
                    "ind_code": "S6101",
                    "count": 20,
                    "items": [{"symbol": "SH600519", "pe_ttm": 31.2}]
                  },
                  "error_code": 0
                }"#,
            );
    });

    let client = common::client(&server);
    let resp = xueqiu_rs::f10::industry_compare(&client, "SH600519", "single")
        .await
        .unwrap();
    mock.assert();

    let data = resp.data.unwrap();
    assert_eq!(data.industry_name.as_deref(), Some("白酒"));
    assert_eq!(data.industry_code.as_deref(), Some("S6101"));
    assert_eq!(data.items[0].pe_ttm, Some(31.2));
}
