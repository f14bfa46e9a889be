//! Refresh orchestration and the photo-journal API
//!
//! A refresh cycle fetches the forecast and air payloads, runs the pure
//! normalization pipeline, and only then touches the store. Dropping the
//! future mid-cycle therefore persists nothing.

use thiserror::Error;
use tracing::{info, instrument};

use skylog_core::{current_record, normalize, SlotRule};
use skylog_net::{NetError, WeatherProvider};
use skylog_store::{JournalStore, PhotoRow, RecordKind, StoreError, StoreResult};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Provider error: {0}")]
    Provider(#[from] NetError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Counts of rows written by one refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    pub hourly: usize,
    pub daily: usize,
}

/// Repository tying a weather provider to the journal store
pub struct JournalRepository<P: WeatherProvider> {
    provider: P,
    store: JournalStore,
}

impl<P: WeatherProvider> JournalRepository<P> {
    pub fn new(provider: P, store: JournalStore) -> Self {
        Self { provider, store }
    }

    /// Fetch both series and rebuild the current, hourly, and daily rows.
    ///
    /// The merge only starts once every payload is decoded; the three writes
    /// happen after the full merge completes. Transient fetch failures
    /// surface as [`RepoError::Provider`] with nothing persisted.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> RepoResult<RefreshSummary> {
        let one_call = self.provider.one_call().await?;
        let air_now = self.provider.air_current().await?;
        let air_forecast = self.provider.air_forecast().await?;

        let daily_points = one_call.daily_points();
        let air_samples = air_forecast.samples();

        let current = current_record(
            &one_call.current.as_point(),
            &daily_points,
            &air_now.samples(),
        );
        let hourlies = normalize(&one_call.hourly_points(), &air_samples, SlotRule::Hourly);
        let dailies = normalize(&daily_points, &air_samples, SlotRule::Daily);

        self.store.put_current(&current)?;
        self.store.replace_records(RecordKind::Hourly, &hourlies)?;
        self.store.replace_records(RecordKind::Daily, &dailies)?;

        let summary = RefreshSummary {
            hourly: hourlies.len(),
            daily: dailies.len(),
        };
        info!(
            hourly = summary.hourly,
            daily = summary.daily,
            "refresh complete"
        );
        Ok(summary)
    }

    /// Current-conditions row, if a refresh has completed
    pub fn current(&self) -> StoreResult<Option<skylog_core::NormalizedRecord>> {
        self.store.current()
    }

    pub fn hourlies(&self) -> StoreResult<Vec<skylog_core::NormalizedRecord>> {
        self.store.records(RecordKind::Hourly)
    }

    pub fn dailies(&self) -> StoreResult<Vec<skylog_core::NormalizedRecord>> {
        self.store.records(RecordKind::Daily)
    }

    /// Journal a photo under a category; returns its id
    pub fn add_photo(&self, category: &str, path: &str) -> StoreResult<i64> {
        self.store.add_photo(category, path)
    }

    pub fn photos(&self, category: &str) -> StoreResult<Vec<PhotoRow>> {
        self.store.photos(category)
    }

    pub fn all_photos(&self) -> StoreResult<Vec<PhotoRow>> {
        self.store.all_photos()
    }

    pub fn remove_photo(&self, photo_id: i64) -> StoreResult<bool> {
        self.store.remove_photo(photo_id)
    }

    /// Photos matching today's weather category
    pub fn photos_for_current_weather(&self) -> StoreResult<Vec<PhotoRow>> {
        match self.store.current()? {
            Some(record) => self.store.photos(record.weather.as_str()),
            None => Ok(Vec::new()),
        }
    }

    /// Photos matching today's air category
    pub fn photos_for_current_air(&self) -> StoreResult<Vec<PhotoRow>> {
        match self.store.current()? {
            Some(record) => self.store.photos(record.air.as_str()),
            None => Ok(Vec::new()),
        }
    }

    /// Hand the store back for explicit close
    pub fn into_store(self) -> JournalStore {
        self.store
    }
}
