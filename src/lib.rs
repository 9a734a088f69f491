//! xueqiu-rs: typed client for the Xueqiu (Snowball) market-data API.
//!
//! The crate wraps the `stock.xueqiu.com` / `xueqiu.com` JSON endpoints
//! (quotes, financial statements, F10 company data, cubes, portfolios) plus
//! three auxiliary providers reachable through the same client: CSIndex,
//! Danjuan and Eastmoney. Requests are plain GETs with cookie authentication;
//! responses arrive in a handful of incompatible envelope conventions that
//! the client normalizes into one [`XueqiuResponse`] shape before decoding.
//!
//! Most endpoints require a logged-in Xueqiu cookie. The credential is only
//! ever attached to hosts inside the `xueqiu.com` domain family; auxiliary
//! providers are called anonymously.
//!
//! ```no_run
//! use xueqiu_rs::XueqiuClient;
//!
//! # async fn run() -> Result<(), xueqiu_rs::XueqiuError> {
//! let client = XueqiuClient::builder()
//!     .cookie("xq_a_token=...;u=...")
//!     .build()?;
//! let resp = xueqiu_rs::realtime::quotec(&client, &["SH600519", "SZ000001"]).await?;
//! for quote in resp.data.unwrap_or_default() {
//!     println!("{} {:?}", quote.symbol, quote.current);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A blocking mirror of the whole surface lives under [`blocking`].

pub mod blocking;
pub mod capital;
pub mod core;
pub mod csindex;
pub mod cube;
pub mod danjuan;
pub mod eastmoney;
pub mod f10;
pub mod finance;
pub mod portfolio;
pub mod realtime;
pub mod report;
pub mod suggest;

pub use crate::core::client::{XueqiuClient, XueqiuClientBuilder};
pub use crate::core::envelope::{Envelope, XueqiuResponse};
pub use crate::core::error::XueqiuError;
pub use crate::core::metrics::MetricValue;
pub use crate::core::parsing::parse_datetime;
pub use crate::core::request::ApiRequest;
