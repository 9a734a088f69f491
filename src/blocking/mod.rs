//! Blocking mirror of the client and the whole endpoint surface.
//!
//! The retry loop, host policy and envelope handling are the exact logic the
//! async driver uses (the pure pieces live in `core::client::retry`); only
//! the transport and sleep primitives differ. Endpoint request construction
//! is shared with the async modules, so the catalog is defined once.
//!
//! ```no_run
//! use xueqiu_rs::blocking;
//!
//! # fn run() -> Result<(), xueqiu_rs::XueqiuError> {
//! let client = xueqiu_rs::XueqiuClient::builder()
//!     .cookie("xq_a_token=...;u=...")
//!     .build_blocking()?;
//! let resp = blocking::realtime::quotec(&client, &["SH600519"])?;
//! # Ok(())
//! # }
//! ```

mod client;

pub mod capital;
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

pub use client::XueqiuClient;
