//! Daemon configuration from environment variables

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// Weather API key (required)
    pub api_key: String,

    /// Station latitude
    pub latitude: f64,

    /// Station longitude
    pub longitude: f64,

    /// Path to the journal SQLite database
    pub db_path: String,

    /// Seconds between refresh cycles (default: 1800 = 30 minutes)
    pub refresh_interval: u64,
}

impl DaemonConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key =
            env::var("OWM_API_KEY").context("OWM_API_KEY environment variable not set")?;

        let latitude = env::var("STATION_LAT")
            .unwrap_or_else(|_| "37.5665".to_string())
            .parse()
            .context("Invalid STATION_LAT")?;

        let longitude = env::var("STATION_LON")
            .unwrap_or_else(|_| "126.9780".to_string())
            .parse()
            .context("Invalid STATION_LON")?;

        let db_path = env::var("JOURNAL_DB").unwrap_or_else(|_| "journal.db".to_string());

        let refresh_interval = env::var("REFRESH_INTERVAL")
            .unwrap_or_else(|_| "1800".to_string())
            .parse()
            .context("Invalid REFRESH_INTERVAL")?;

        Ok(Self {
            api_key,
            latitude,
            longitude,
            db_path,
            refresh_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        env::set_var("OWM_API_KEY", "test-key");

        let config = DaemonConfig::from_env().unwrap();

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.db_path, "journal.db");
        assert_eq!(config.refresh_interval, 1800);

        env::remove_var("OWM_API_KEY");
    }
}
