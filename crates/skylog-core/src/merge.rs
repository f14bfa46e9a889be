//! Timestamp-aligned merge of the forecast and air-quality series
//!
//! The two series arrive from independent fetches on different cadences. The
//! merge walks both monotonically forward and attaches to each retained
//! forecast point the first air sample at or after its timestamp, falling
//! back to the sentinel reading once the air series is exhausted.

use crate::classify::{air_category, weather_category};
use crate::types::{AirSample, ForecastPoint, NormalizedRecord};

/// Highest hourly index retained by [`SlotRule::Hourly`]
pub const MAX_HOUR_SLOT: usize = 24;

/// Which elements of the forecast series a merge pass emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRule {
    /// Every second hourly entry, up to and including index 24 (13 records)
    Hourly,
    /// Every daily entry
    Daily,
}

impl SlotRule {
    fn selects(self, index: usize) -> bool {
        match self {
            SlotRule::Hourly => index % 2 == 0 && index <= MAX_HOUR_SLOT,
            SlotRule::Daily => true,
        }
    }

    /// Index past which the scan can stop early
    fn cutoff(self) -> Option<usize> {
        match self {
            SlotRule::Hourly => Some(MAX_HOUR_SLOT),
            SlotRule::Daily => None,
        }
    }
}

/// A forecast point paired with its aligned air sample
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPoint {
    /// Index of the forecast point in the input series
    pub slot: usize,
    pub forecast: ForecastPoint,
    pub air: AirSample,
}

/// Pair each selected forecast point with its aligned air sample.
///
/// Both slices must be ascending by `dt`; this is the caller's contract and
/// is not validated here. The air cursor advances while `air[j].dt <
/// forecast[i].dt` and never rewinds, so a full pass costs O(n + m)
/// comparisons. Once the cursor passes the end of the air series, remaining
/// points are paired with [`AirSample::sentinel`]. Total over well-formed
/// input: always exactly one output per selected point, never an error.
pub fn align(forecast: &[ForecastPoint], air: &[AirSample], rule: SlotRule) -> Vec<AlignedPoint> {
    let mut aligned = Vec::new();
    let mut j = 0usize;

    for (i, point) in forecast.iter().enumerate() {
        if let Some(cutoff) = rule.cutoff() {
            if i > cutoff {
                break;
            }
        }
        if !rule.selects(i) {
            continue;
        }

        while j < air.len() && air[j].dt < point.dt {
            j += 1;
        }

        let sample = air.get(j).cloned().unwrap_or_else(AirSample::sentinel);
        aligned.push(AlignedPoint {
            slot: i,
            forecast: point.clone(),
            air: sample,
        });
    }

    aligned
}

/// Run the merge and classify each pair into a persisted record.
pub fn normalize(
    forecast: &[ForecastPoint],
    air: &[AirSample],
    rule: SlotRule,
) -> Vec<NormalizedRecord> {
    align(forecast, air, rule)
        .into_iter()
        .map(NormalizedRecord::from)
        .collect()
}

impl From<AlignedPoint> for NormalizedRecord {
    fn from(point: AlignedPoint) -> Self {
        NormalizedRecord {
            slot: point.slot as i32,
            dt: point.forecast.dt,
            weather: weather_category(point.forecast.weather_id),
            air: air_category(point.air.aqi),
            temp: point.forecast.temp,
            feels_like: point.forecast.feels_like,
            temp_min: point.forecast.temp_min,
            temp_max: point.forecast.temp_max,
            aqi: point.air.aqi,
            pm2_5: point.air.pm2_5,
            pm10: point.air.pm10,
        }
    }
}
