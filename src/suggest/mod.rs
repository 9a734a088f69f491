//! Symbol search / suggestion endpoint on the main `xueqiu.com` host.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::core::request::ApiRequest;
use crate::{XueqiuClient, XueqiuError};

pub(crate) const SUGGEST_STOCK_URL: &str = "https://xueqiu.com/query/v1/suggest_stock.json";

/// One suggestion hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestStockItem {
    #[serde(alias = "symbol")]
    pub code: Option<String>,
    pub label: Option<String>,
    pub query: Option<String>,
    pub state: Option<i64>,
    pub stock_type: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestStockMeta {
    pub count: Option<i64>,
    pub feedback: Option<i64>,
    pub has_next_page: Option<bool>,
    #[serde(alias = "maxPage")]
    pub max_page: Option<i64>,
    pub page: Option<i64>,
    pub query_id: Option<i64>,
    pub size: Option<i64>,
}

/// Response of the suggestion endpoint. This shape is its own convention
/// (`code`/`message`/`success` at the top level) and is decoded directly.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestStockResponse {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "de_suggest_items")]
    pub data: Vec<SuggestStockItem>,
    pub meta: Option<SuggestStockMeta>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Some variants return `{"data": {"items": [...]}}` instead of a bare list.
fn de_suggest_items<'de, D>(deserializer: D) -> Result<Vec<SuggestStockItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => value,
    };
    let value = match value {
        Value::Object(mut map) => match map.remove("items") {
            Some(items @ Value::Array(_)) => items,
            Some(other) => {
                map.insert("items".to_string(), other);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    };
    serde_json::from_value(value).map_err(serde::de::Error::custom)
}

pub(crate) fn stock_request(keyword: &str) -> ApiRequest {
    ApiRequest::get(SUGGEST_STOCK_URL)
        .param("q", keyword)
        .require_auth()
}

/// Symbol suggestions for a keyword.
pub async fn stock(
    client: &XueqiuClient,
    keyword: &str,
) -> Result<SuggestStockResponse, XueqiuError> {
    client.request_api(&stock_request(keyword)).await
}
