//! Core components of the `xueqiu-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`XueqiuClient`] and its builder.
//! - The primary [`XueqiuError`] type.
//! - Envelope normalization ([`Envelope`], [`XueqiuResponse`]).
//! - Timestamp and metric-pair parsing shared by the endpoint models.

/// The main client (`XueqiuClient`), builder, and configuration.
pub mod client;
/// Envelope normalization and the generic typed response wrapper.
pub mod envelope;
/// The primary error type (`XueqiuError`) for the crate.
pub mod error;
/// Metric-pair (`[value, yoy]`) extraction for statement endpoints.
pub mod metrics;
/// Timestamp normalization for the mixed date formats Xueqiu emits.
pub mod parsing;
/// Per-call request descriptions consumed by both transport drivers.
pub mod request;

// convenient re-exports so most code can just `use crate::core::XueqiuClient`
pub use client::{XueqiuClient, XueqiuClientBuilder};
pub use envelope::{Envelope, XueqiuResponse};
pub use error::XueqiuError;
pub use metrics::MetricValue;
pub use request::ApiRequest;
