use serde_json::json;
use xueqiu_rs::suggest::SuggestStockResponse;

#[test]
fn data_as_bare_list_decodes() {
    let resp: SuggestStockResponse = serde_json::from_value(json!({
        "code": 0,
        "message": "ok",
        "success": true,
        "data": [
            {"code": "SH600519", "label": "贵州茅台", "query": "maotai", "state": 1, "type": 11}
        ],
        "meta": {"count": 1, "page": 1, "maxPage": 1}
    }))
    .unwrap();

    assert_eq!(resp.success, Some(true));
    assert_eq!(resp.data.len(), 1);
    assert_eq!(resp.data[0].code.as_deref(), Some("SH600519"));
    assert_eq!(resp.data[0].kind, Some(11));
    assert_eq!(resp.meta.unwrap().max_page, Some(1));
}

#[test]
fn data_wrapped_in_items_decodes() {
    let resp: SuggestStockResponse = serde_json::from_value(json!({
        "code": 0,
        "success": true,
        "data": {"items": [{"symbol": "SZ000001", "label": "平安银行"}]}
    }))
    .unwrap();

    assert_eq!(resp.data.len(), 1);
    // `symbol` is a historical alias of `code`
    assert_eq!(resp.data[0].code.as_deref(), Some("SZ000001"));
}

#[test]
fn missing_data_is_an_empty_list() {
    let resp: SuggestStockResponse =
        serde_json::from_value(json!({"code": 0, "success": true})).unwrap();
    assert!(resp.data.is_empty());
}
