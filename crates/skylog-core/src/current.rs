//! Current-conditions record assembly
//!
//! The one-call payload reports the current point without min/max bounds;
//! those live in the daily entry covering the same calendar day. Day matching
//! uses the UTC calendar date.

use chrono::{DateTime, Utc};

use crate::classify::{air_category, weather_category};
use crate::types::{AirSample, ForecastPoint, NormalizedRecord, Timestamp};

/// Slot index used for the singleton current record
pub const CURRENT_SLOT: i32 = 0;

fn utc_date(dt: Timestamp) -> Option<chrono::NaiveDate> {
    DateTime::<Utc>::from_timestamp(dt, 0).map(|d| d.date_naive())
}

/// Build the current-conditions record.
///
/// `daily` is scanned for the entry on the same UTC day as `current`; its
/// min/max carry over. `air` is the current air payload: its first sample is
/// attached, or the sentinel if the list is empty.
pub fn current_record(
    current: &ForecastPoint,
    daily: &[ForecastPoint],
    air: &[AirSample],
) -> NormalizedRecord {
    let today = utc_date(current.dt);
    let todays_daily = daily
        .iter()
        .find(|d| today.is_some() && utc_date(d.dt) == today);

    let sample = air.first().cloned().unwrap_or_else(AirSample::sentinel);

    NormalizedRecord {
        slot: CURRENT_SLOT,
        dt: current.dt,
        weather: weather_category(current.weather_id),
        air: air_category(sample.aqi),
        temp: current.temp,
        feels_like: current.feels_like,
        temp_min: todays_daily.and_then(|d| d.temp_min),
        temp_max: todays_daily.and_then(|d| d.temp_max),
        aqi: sample.aqi,
        pm2_5: sample.pm2_5,
        pm10: sample.pm10,
    }
}
