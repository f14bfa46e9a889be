//! Skylog daemon - periodic weather refresh into the journal database
//!
//! This binary coordinates:
//! - Fetching the forecast and air-quality series from the weather API
//! - Running the normalization pipeline
//! - Persisting the resulting rows to SQLite

mod config;

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skylog_net::OpenWeatherClient;
use skylog_repo::JournalRepository;
use skylog_store::JournalStore;

use crate::config::DaemonConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skylog daemon");

    let config = DaemonConfig::from_env()?;
    info!(
        lat = config.latitude,
        lon = config.longitude,
        db = %config.db_path,
        interval = config.refresh_interval,
        "Loaded configuration"
    );

    let store = JournalStore::open(&config.db_path)
        .with_context(|| format!("Failed to open journal database at {}", config.db_path))?;
    info!("Journal database opened");

    let client = OpenWeatherClient::new(&config.api_key, config.latitude, config.longitude);
    let mut repo = JournalRepository::new(client, store);

    let mut ticker = tokio::time::interval(Duration::from_secs(config.refresh_interval));

    info!("Daemon running - press Ctrl+C to stop");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match repo.refresh().await {
                    Ok(summary) => {
                        info!(hourly = summary.hourly, daily = summary.daily, "Refreshed journal");
                    }
                    Err(e) => {
                        // Keep running; the next tick retries
                        error!("Refresh failed: {e}");
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    repo.into_store()
        .close()
        .context("Failed to close journal database")?;
    info!("Skylog daemon stopped");
    Ok(())
}
