//! Quickstart: batch quotes plus a full quote detail.
//!
//! Reads the cookie from `XUEQIU_TOKEN` (or `XUEQIU_COOKIE`):
//! `XUEQIU_TOKEN="xq_a_token=...;u=..." cargo run --example 01_quickstart`

use xueqiu_rs::XueqiuClient;
use xueqiu_rs::realtime;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = XueqiuClient::from_env()?;

    let resp = realtime::quotec(&client, &["SH600519", "SZ000001"]).await?;
    for quote in resp.data.unwrap_or_default() {
        println!(
            "{}  current={:?}  percent={:?}  at={:?}",
            quote.symbol, quote.current, quote.percent, quote.timestamp
        );
    }

    if client.has_auth() {
        let detail = realtime::quote_detail(&client, "SH600519").await?;
        if let Some(quote) = detail.data.and_then(|d| d.quote) {
            println!(
                "detail: {:?} pe_ttm={:?} market_capital={:?}",
                quote.name, quote.pe_ttm, quote.market_capital
            );
        }
    } else {
        println!("no cookie configured; skipping the authenticated detail call");
    }

    Ok(())
}
