//! Core data types for the weather photo-journal pipeline

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix epoch seconds)
pub type Timestamp = i64;

/// One timestamped weather prediction (hourly or daily granularity)
///
/// Produced by the remote forecast source, ordered ascending by `dt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Unix timestamp of the prediction
    pub dt: Timestamp,

    /// Temperature in Kelvin, as supplied by the provider
    pub temp: f64,

    /// Apparent temperature in Kelvin
    pub feels_like: f64,

    /// Daily minimum temperature (daily points only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_min: Option<f64>,

    /// Daily maximum temperature (daily points only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_max: Option<f64>,

    /// Provider condition code (`weather[0].id`)
    pub weather_id: i32,
}

/// One timestamped air-quality measurement
///
/// Sampled on its own cadence, independent of the forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirSample {
    /// Unix timestamp of the sample
    pub dt: Timestamp,

    /// Air quality index, 1 (best) to 5 (worst); -1 for the sentinel
    pub aqi: i32,

    /// Fine particulate concentration (PM2.5)
    pub pm2_5: f64,

    /// Coarse particulate concentration (PM10)
    pub pm10: f64,
}

impl AirSample {
    /// Reserved reading meaning "no air data available at or after this time"
    pub fn sentinel() -> Self {
        Self {
            dt: -1,
            aqi: -1,
            pm2_5: -1.0,
            pm10: -1.0,
        }
    }

    /// Whether this sample is the "no data" sentinel
    pub fn is_sentinel(&self) -> bool {
        self.aqi == -1
    }
}

/// Weather category vocabulary used to key the photo journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCategory {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl WeatherCategory {
    /// Persisted string form (stable, do not change without a migration)
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherCategory::Sunny => "weather_sunny",
            WeatherCategory::Cloudy => "weather_cloudy",
            WeatherCategory::Rainy => "weather_rainy",
            WeatherCategory::Snowy => "weather_snowy",
        }
    }

    /// Parse the persisted string form back into a category
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "weather_sunny" => Some(WeatherCategory::Sunny),
            "weather_cloudy" => Some(WeatherCategory::Cloudy),
            "weather_rainy" => Some(WeatherCategory::Rainy),
            "weather_snowy" => Some(WeatherCategory::Snowy),
            _ => None,
        }
    }
}

/// Air-quality category vocabulary used to key the photo journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirCategory {
    VeryGood,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
}

impl AirCategory {
    /// Persisted string form (stable, do not change without a migration)
    pub fn as_str(self) -> &'static str {
        match self {
            AirCategory::VeryGood => "air_very_good",
            AirCategory::Fair => "air_fair",
            AirCategory::Moderate => "air_moderate",
            AirCategory::Poor => "air_poor",
            AirCategory::VeryPoor => "air_very_poor",
        }
    }

    /// Parse the persisted string form back into a category
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "air_very_good" => Some(AirCategory::VeryGood),
            "air_fair" => Some(AirCategory::Fair),
            "air_moderate" => Some(AirCategory::Moderate),
            "air_poor" => Some(AirCategory::Poor),
            "air_very_poor" => Some(AirCategory::VeryPoor),
            _ => None,
        }
    }
}

/// Normalized output row of the merge pipeline
///
/// One per retained forecast point. Recomputed fresh on every refresh cycle
/// and replaced wholesale; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Positional index: hour-slot (0, 2, 4, ..., 24) or day-slot (0..n)
    pub slot: i32,

    /// Unix timestamp of the forecast point
    pub dt: Timestamp,

    /// Categorical weather, derived from the condition code
    pub weather: WeatherCategory,

    /// Categorical air quality, derived from the attached sample's AQI
    pub air: AirCategory,

    /// Temperature in Kelvin
    pub temp: f64,

    /// Apparent temperature in Kelvin
    pub feels_like: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_max: Option<f64>,

    /// Raw AQI of the attached sample (-1 when no air data was available)
    pub aqi: i32,

    /// PM2.5 of the attached sample (-1.0 when no air data was available)
    pub pm2_5: f64,

    /// PM10 of the attached sample (-1.0 when no air data was available)
    pub pm10: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_string_round_trip() {
        for cat in [
            WeatherCategory::Sunny,
            WeatherCategory::Cloudy,
            WeatherCategory::Rainy,
            WeatherCategory::Snowy,
        ] {
            assert_eq!(WeatherCategory::parse(cat.as_str()), Some(cat));
        }
        for cat in [
            AirCategory::VeryGood,
            AirCategory::Fair,
            AirCategory::Moderate,
            AirCategory::Poor,
            AirCategory::VeryPoor,
        ] {
            assert_eq!(AirCategory::parse(cat.as_str()), Some(cat));
        }

        assert_eq!(WeatherCategory::parse("weather_foggy"), None);
        assert_eq!(AirCategory::parse("air_hazardous"), None);
    }

    #[test]
    fn test_sentinel_sample() {
        let sentinel = AirSample::sentinel();
        assert!(sentinel.is_sentinel());
        assert_eq!(sentinel.aqi, -1);
        assert_eq!(sentinel.pm2_5, -1.0);
        assert_eq!(sentinel.pm10, -1.0);

        let real = AirSample {
            dt: 1625000000,
            aqi: 2,
            pm2_5: 8.4,
            pm10: 12.1,
        };
        assert!(!real.is_sentinel());
    }

    #[test]
    fn test_forecast_point_serde() {
        let json = r#"{"dt":1625389200,"temp":300.15,"feels_like":301.0,"weather_id":801}"#;
        let point: ForecastPoint = serde_json::from_str(json).unwrap();

        assert_eq!(point.dt, 1625389200);
        assert_eq!(point.weather_id, 801);
        assert_eq!(point.temp_min, None);
    }
}
