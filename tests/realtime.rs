mod common;

use chrono::{TimeZone, Utc};
use httpmock::Method::GET;
use httpmock::MockServer;
use serde_json::json;
use xueqiu_rs::XueqiuResponse;
use xueqiu_rs::realtime::{KlineData, KlineOptions, Pankou};

#[tokio::test(flavor = "multi_thread")]
async fn quotec_returns_typed_quotes_in_input_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/realtime/quotec.json")
            .query_param("symbol", "SH600519,SZ000001");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::QUOTEC_BODY);
    });

    let client = common::client(&server);
    let resp = xueqiu_rs::realtime::quotec(&client, &["SH600519", "SZ000001"])
        .await
        .unwrap();
    mock.assert();

    let quotes = resp.data.unwrap();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].symbol, "SH600519");
    assert_eq!(quotes[1].symbol, "SZ000001");
    assert_eq!(quotes[0].current, Some(1520.5));
    assert_eq!(
        quotes[0].timestamp.unwrap(),
        Utc.timestamp_millis_opt(1_714_442_400_000).unwrap()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn quote_detail_sends_extend_detail_with_auth() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/quote.json")
            .query_param("extend", "detail")
            .query_param("symbol", "SH600519")
            .header("cookie", common::TEST_COOKIE);
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{
                  "data": {
                    "market": {"region": "CN", "status": "交易中"},
                    "quote": {"symbol": "SH600519", "current": 1520.5, "pe_ttm": 31.2, "timestamp": 1714442400000},
                    "tags": [{"description": "融", "value": 1}]
                  },
                  "error_code": 0,
                  "error_description": ""
                }"#,
            );
    });

    let client = common::client(&server);
    let resp = xueqiu_rs::realtime::quote_detail(&client, "SH600519")
        .await
        .unwrap();
    mock.assert();

    let data = resp.data.unwrap();
    let quote = data.quote.unwrap();
    assert_eq!(quote.current, Some(1520.5));
    assert_eq!(quote.pe_ttm, Some(31.2));
    assert_eq!(data.market.unwrap().region.as_deref(), Some("CN"));
}

#[tokio::test(flavor = "multi_thread")]
async fn kline_negates_count_and_synthesizes_bars() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/chart/kline.json")
            .query_param("symbol", "SH600519")
            .query_param("period", "day")
            .query_param("type", "before")
            .query_param("count", "-2")
            .query_param("begin", "1714442400000");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{
                  "data": {
                    "symbol": "SH600519",
                    "column": ["timestamp", "volume", "open", "high", "low", "close"],
                    "item": [
                      [1714356000000, 21000.0, 1510.0, 1525.0, 1504.0, 1520.5],
                      [1714442400000, 18000.0, 1520.5, 1531.0, 1515.0, 1528.0]
                    ]
                  },
                  "error_code": 0,
                  "error_description": null
                }"#,
            );
    });

    let client = common::client(&server);
    let options = KlineOptions {
        count: 2,
        begin_ms: Some(1_714_442_400_000),
        ..KlineOptions::default()
    };
    let resp = xueqiu_rs::realtime::kline(&client, "SH600519", &options)
        .await
        .unwrap();
    mock.assert();

    let bars = resp.data.unwrap().bars().unwrap();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].open, Some(1510.0));
    assert_eq!(bars[1].close, Some(1528.0));
    assert_eq!(
        bars[1].timestamp.unwrap(),
        Utc.timestamp_millis_opt(1_714_442_400_000).unwrap()
    );
}

#[test]
fn kline_bars_pad_short_rows_with_nulls() {
    let data: KlineData = serde_json::from_value(json!({
        "column": ["timestamp", "open", "close"],
        "item": [[1714442400000i64, 10.0]]
    }))
    .unwrap();

    let bars = data.bars().unwrap();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].open, Some(10.0));
    assert_eq!(bars[0].close, None);
}

#[test]
fn pankou_assembles_order_book_levels_from_flat_keys() {
    let resp: XueqiuResponse<Pankou> = serde_json::from_value(json!({
        "data": {
            "symbol": "SH600519",
            "timestamp": 1714442400000i64,
            "current": 1520.5,
            "bp1": 1520.0, "bc1": 3.0,
            "bp2": 1519.5, "bc2": 7.0,
            "bp3": 0, "bc3": 0,
            "sp1": 1520.5, "sc1": 2.0
        },
        "error_code": 0
    }))
    .unwrap();

    let pankou = resp.data.unwrap();
    let bids = pankou.bids();
    let asks = pankou.asks();
    assert_eq!(bids.len(), 2);
    assert_eq!(bids[0].price, Some(1520.0));
    assert_eq!(bids[1].count, Some(7.0));
    assert_eq!(asks.len(), 1);
    assert_eq!(asks[0].price, Some(1520.5));
}
