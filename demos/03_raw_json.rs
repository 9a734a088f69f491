//! Raw JSON escape hatch: call an endpoint the typed catalog doesn't cover.

use xueqiu_rs::{ApiRequest, XueqiuClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = XueqiuClient::from_env()?;

    let request = ApiRequest::get("/v5/stock/realtime/quotec.json")
        .param("symbol", "SH600519");
    let payload = client.request_json(&request).await?;

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
