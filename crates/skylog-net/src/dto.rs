//! Wire types for the two weather API payloads
//!
//! Mirrors the provider's JSON shape; unknown fields are ignored. Conversion
//! into core series happens here so the pipeline never sees raw payloads.

use serde::Deserialize;
use skylog_core::{AirSample, ForecastPoint};

/// Condition code substituted when a forecast entry carries an empty
/// `weather` array (clear sky)
pub const DEFAULT_CONDITION_CODE: i32 = 800;

/// One-call response: current conditions plus hourly and daily series
#[derive(Debug, Clone, Deserialize)]
pub struct OneCallResponse {
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    pub timezone_offset: i64,
    pub current: CurrentDto,
    pub hourly: Vec<HourlyDto>,
    pub daily: Vec<DailyDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentDto {
    pub dt: i64,
    pub temp: f64,
    pub feels_like: f64,
    #[serde(default)]
    pub weather: Vec<ConditionDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyDto {
    pub dt: i64,
    pub temp: f64,
    pub feels_like: f64,
    #[serde(default)]
    pub weather: Vec<ConditionDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyDto {
    pub dt: i64,
    pub temp: DailyTempDto,
    pub feels_like: DailyFeelsLikeDto,
    #[serde(default)]
    pub weather: Vec<ConditionDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyTempDto {
    pub day: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyFeelsLikeDto {
    pub day: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionDto {
    pub id: i32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Air pollution response
#[derive(Debug, Clone, Deserialize)]
pub struct AirResponse {
    pub list: Vec<AirEntryDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirEntryDto {
    pub dt: i64,
    pub main: AqiDto,
    pub components: ComponentsDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AqiDto {
    pub aqi: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentsDto {
    pub co: f64,
    pub no: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub nh3: f64,
}

fn condition_code(weather: &[ConditionDto]) -> i32 {
    weather
        .first()
        .map(|c| c.id)
        .unwrap_or(DEFAULT_CONDITION_CODE)
}

impl CurrentDto {
    pub fn as_point(&self) -> ForecastPoint {
        ForecastPoint {
            dt: self.dt,
            temp: self.temp,
            feels_like: self.feels_like,
            temp_min: None,
            temp_max: None,
            weather_id: condition_code(&self.weather),
        }
    }
}

impl OneCallResponse {
    /// Hourly series as core forecast points, in payload order
    pub fn hourly_points(&self) -> Vec<ForecastPoint> {
        self.hourly
            .iter()
            .map(|h| ForecastPoint {
                dt: h.dt,
                temp: h.temp,
                feels_like: h.feels_like,
                temp_min: None,
                temp_max: None,
                weather_id: condition_code(&h.weather),
            })
            .collect()
    }

    /// Daily series as core forecast points, in payload order
    pub fn daily_points(&self) -> Vec<ForecastPoint> {
        self.daily
            .iter()
            .map(|d| ForecastPoint {
                dt: d.dt,
                temp: d.temp.day,
                feels_like: d.feels_like.day,
                temp_min: Some(d.temp.min),
                temp_max: Some(d.temp.max),
                weather_id: condition_code(&d.weather),
            })
            .collect()
    }
}

impl AirResponse {
    /// Sample series as core air samples, in payload order
    pub fn samples(&self) -> Vec<AirSample> {
        self.list
            .iter()
            .map(|entry| AirSample {
                dt: entry.dt,
                aqi: entry.main.aqi,
                pm2_5: entry.components.pm2_5,
                pm10: entry.components.pm10,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_CALL_SAMPLE: &str = r#"{
        "lat": 37.3297,
        "lon": 127.1143,
        "timezone": "Asia/Seoul",
        "timezone_offset": 32400,
        "current": {
            "dt": 1625389200,
            "sunrise": 1625343001,
            "sunset": 1625395705,
            "temp": 300.15,
            "feels_like": 301.7,
            "humidity": 74,
            "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}]
        },
        "hourly": [
            {"dt": 1625389200, "temp": 300.15, "feels_like": 301.7, "pop": 0.2,
             "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}]}
        ],
        "daily": [
            {"dt": 1625367600,
             "temp": {"day": 301.0, "min": 294.2, "max": 302.4, "morn": 295.0, "eve": 299.0, "night": 296.0},
             "feels_like": {"day": 302.9, "morn": 295.5, "eve": 300.0, "night": 296.5},
             "pop": 0.4,
             "weather": [{"id": 601, "main": "Snow", "description": "snow", "icon": "13d"}]}
        ]
    }"#;

    const AIR_SAMPLE: &str = r#"{
        "coord": {"lat": 37.3297, "lon": 127.1143},
        "list": [
            {"dt": 1625389200,
             "main": {"aqi": 2},
             "components": {"co": 230.3, "no": 0.1, "no2": 9.6, "o3": 68.7,
                            "so2": 2.5, "pm2_5": 8.2, "pm10": 11.4, "nh3": 1.3}}
        ]
    }"#;

    #[test]
    fn test_one_call_decodes_and_converts() {
        let resp: OneCallResponse = serde_json::from_str(ONE_CALL_SAMPLE).unwrap();

        let current = resp.current.as_point();
        assert_eq!(current.dt, 1625389200);
        assert_eq!(current.weather_id, 802);
        assert_eq!(current.temp_min, None);

        let hourly = resp.hourly_points();
        assert_eq!(hourly.len(), 1);
        assert_eq!(hourly[0].weather_id, 500);

        let daily = resp.daily_points();
        assert_eq!(daily[0].temp, 301.0);
        assert_eq!(daily[0].feels_like, 302.9);
        assert_eq!(daily[0].temp_min, Some(294.2));
        assert_eq!(daily[0].temp_max, Some(302.4));
        assert_eq!(daily[0].weather_id, 601);
    }

    #[test]
    fn test_air_decodes_and_converts() {
        let resp: AirResponse = serde_json::from_str(AIR_SAMPLE).unwrap();

        let samples = resp.samples();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].aqi, 2);
        assert_eq!(samples[0].pm2_5, 8.2);
        assert_eq!(samples[0].pm10, 11.4);
    }

    #[test]
    fn test_empty_weather_array_falls_back_to_clear() {
        let json = r#"{"dt": 1, "temp": 290.0, "feels_like": 289.0, "weather": []}"#;
        let dto: CurrentDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.as_point().weather_id, DEFAULT_CONDITION_CODE);
    }

    #[test]
    fn test_missing_weather_array_falls_back_to_clear() {
        let json = r#"{"dt": 1, "temp": 290.0, "feels_like": 289.0}"#;
        let dto: HourlyDto = serde_json::from_str(json).unwrap();

        assert_eq!(condition_code(&dto.weather), DEFAULT_CONDITION_CODE);
    }
}
