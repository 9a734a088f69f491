//! Auxiliary providers: Danjuan fund data and CSIndex index data.
//!
//! Neither needs a Xueqiu cookie, and the client never sends one to these
//! hosts even when it is configured.

use chrono::NaiveDate;
use xueqiu_rs::{XueqiuClient, csindex, danjuan};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = XueqiuClient::builder().build()?;

    let fund = danjuan::fund_detail(&client, "110011").await?;
    println!("danjuan fund payload keys: {:?}", fund.data.as_ref().map(|d| d.is_object()));

    let perf = csindex::index_perf(
        &client,
        "000300",
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    )
    .await?;
    println!("csindex perf: {:?}", perf.data.is_some());

    Ok(())
}
