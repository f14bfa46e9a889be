//! Network layer: wire types and the async weather provider
//!
//! The pipeline consumes two independently-fetched time series (forecast and
//! air quality). This crate decodes them and hands the core layer plain
//! ordered sequences; it owns no retry or caching policy.

pub mod client;
pub mod dto;

pub use client::*;
pub use dto::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type NetResult<T> = Result<T, NetError>;

/// Source of the two weather payloads consumed by a refresh cycle
///
/// The two series are fetched independently and in no guaranteed order; the
/// merge only starts once all payloads are decoded.
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions plus hourly and daily forecast series
    async fn one_call(&self) -> NetResult<OneCallResponse>;

    /// Air quality at the present moment
    async fn air_current(&self) -> NetResult<AirResponse>;

    /// Forecast air quality series
    async fn air_forecast(&self) -> NetResult<AirResponse>;
}
