//! The same calls through the blocking client.

use xueqiu_rs::{XueqiuClient, blocking};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = XueqiuClient::builder().build_blocking()?;

    let resp = blocking::realtime::quotec(&client, &["SH600519"])?;
    for quote in resp.data.unwrap_or_default() {
        println!("{}  current={:?}", quote.symbol, quote.current);
    }

    Ok(())
}
