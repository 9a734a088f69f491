mod common;

use chrono::{TimeZone, Utc};
use httpmock::Method::GET;
use httpmock::MockServer;
use serde_json::json;
use xueqiu_rs::finance::{StatementData, StatementV2Options};

#[tokio::test(flavor = "multi_thread")]
async fn indicator_promotes_metric_pairs_per_period() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/finance/cn/indicator.json")
            .query_param("symbol", "SH600519")
            .query_param("count", "2")
            .query_param("type", "Q4");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{
                  "data": {
                    "quote_name": "贵州茅台",
                    "currency_name": "人民币",
                    "last_report_name": "2023年报",
                    "list": [
                      {
                        "report_date": 1703980800000,
                        "report_name": "2023年报",
                        "avg_roe": [34.19, 0.021],
                        "total_revenue": [147693814234.0, 0.1853],
                        "gross_selling_rate": ["91.96", null],
                        "np_per_share": [59.49, 0.19],
                        "ctime": "2024-03-30"
                      }
                    ]
                  },
                  "error_code": 0,
                  "error_description": null
                }"#,
            );
    });

    let client = common::client(&server);
    let resp = xueqiu_rs::finance::indicator(&client, "SH600519", true, 2)
        .await
        .unwrap();
    mock.assert();

    let data = resp.data.unwrap();
    assert_eq!(data.quote_name.as_deref(), Some("贵州茅台"));
    assert_eq!(data.periods.len(), 1);

    let period = &data.periods[0];
    assert_eq!(period.report_name.as_deref(), Some("2023年报"));
    assert_eq!(
        period.report_date.unwrap(),
        Utc.timestamp_millis_opt(1_703_980_800_000).unwrap()
    );
    assert_eq!(period.metrics["avg_roe"].value, Some(34.19));
    assert_eq!(period.metrics["total_revenue"].yoy, Some(0.1853));
    // string-typed pair elements parse, nulls stay absent
    assert_eq!(period.metrics["gross_selling_rate"].value, Some(91.96));
    assert_eq!(period.metrics["gross_selling_rate"].yoy, None);
    // non-pair fields land in the passthrough bag
    assert_eq!(period.extra["ctime"], json!("2024-03-30"));
    assert!(!period.extra.contains_key("avg_roe"));
}

#[tokio::test(flavor = "multi_thread")]
async fn v2_statements_stringify_booleans() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/finance/hk/cash_flow.json")
            .query_param("symbol", "00700")
            .query_param("type", "all")
            .query_param("is_detail", "true")
            .query_param("count", "10");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data": {"quote_name": "腾讯控股", "list": []}, "error_code": 0}"#);
    });

    let client = common::client(&server);
    let options = StatementV2Options {
        region: "hk".into(),
        ..StatementV2Options::default()
    };
    let resp = xueqiu_rs::finance::cash_flow_v2(&client, "00700", &options)
        .await
        .unwrap();
    mock.assert();
    assert_eq!(resp.data.unwrap().quote_name.as_deref(), Some("腾讯控股"));
}

#[test]
fn statement_periods_accept_the_items_alias() {
    let data: StatementData = serde_json::from_value(json!({
        "items": [
            {"report_name": "2024Q1", "basic_eps": [2.5, 0.07]}
        ]
    }))
    .unwrap();

    assert_eq!(data.periods.len(), 1);
    assert_eq!(data.periods[0].metrics["basic_eps"].value, Some(2.5));
}

#[tokio::test(flavor = "multi_thread")]
async fn business_decodes_segment_classes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v5/stock/finance/cn/business.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{
                  "data": {
                    "quote_name": "贵州茅台",
                    "list": [
                      {
                        "report_date": 1703980800000,
                        "report_name": "2023年报",
                        "class_list": [
                          {
                            "class_standard": 1,
                            "business_list": [
                              {"project_announced_name": "茅台酒", "prime_operating_income": 1.2e11, "income_ratio": 0.86}
                            ]
                          }
                        ]
                      }
                    ]
                  },
                  "error_code": 0
                }"#,
            );
    });

    let client = common::client(&server);
    let resp = xueqiu_rs::finance::business(&client, "SH600519", false, 10)
        .await
        .unwrap();

    let periods = resp.data.unwrap().periods;
    assert_eq!(periods.len(), 1);
    let class = &periods[0].class_list[0];
    assert_eq!(class.class_standard, Some(1));
    assert_eq!(
        class.business_list[0].project_announced_name.as_deref(),
        Some("茅台酒")
    );
}
