//! Async HTTP client for the weather API

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::dto::{AirResponse, OneCallResponse};
use crate::{NetResult, WeatherProvider};

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Client for the one-call and air-pollution endpoints
///
/// Holds the station coordinates; one client serves one location. Transient
/// failures surface as errors untouched -- retry policy belongs to the caller.
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    lat: f64,
    lon: f64,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            lat,
            lon,
        }
    }

    /// Override the endpoint (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, &str)],
    ) -> NetResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");

        let mut request = self.http.get(&url).query(&[
            ("lat", self.lat.to_string()),
            ("lon", self.lon.to_string()),
            ("appid", self.api_key.clone()),
        ]);
        for (key, value) in extra {
            request = request.query(&[(key, value)]);
        }

        let body = request.send().await?.error_for_status()?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn one_call(&self) -> NetResult<OneCallResponse> {
        self.get_json("/data/2.5/onecall", &[("exclude", "minutely")])
            .await
    }

    async fn air_current(&self) -> NetResult<AirResponse> {
        self.get_json("/data/2.5/air_pollution", &[]).await
    }

    async fn air_forecast(&self) -> NetResult<AirResponse> {
        self.get_json("/data/2.5/air_pollution/forecast", &[]).await
    }
}
