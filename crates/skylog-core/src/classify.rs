//! Categorical mapping of condition codes and AQI values
//!
//! Both classifiers are total: unknown inputs map to a documented default
//! rather than erroring. Callers rely on that for sentinel readings.

use crate::types::{AirCategory, WeatherCategory};

/// Map a provider condition code to the four-way weather vocabulary.
///
/// Codes outside the known ranges default to `Sunny`.
pub fn weather_category(code: i32) -> WeatherCategory {
    match code {
        200..=599 => WeatherCategory::Rainy,
        600..=699 => WeatherCategory::Snowy,
        800..=801 => WeatherCategory::Sunny,
        802..=804 => WeatherCategory::Cloudy,
        _ => WeatherCategory::Sunny,
    }
}

/// Map a 1-5 air quality index to the five-way air vocabulary.
///
/// Any other value, including the -1 sentinel, defaults to `Moderate`.
pub fn air_category(aqi: i32) -> AirCategory {
    match aqi {
        1 => AirCategory::VeryGood,
        2 => AirCategory::Fair,
        3 => AirCategory::Moderate,
        4 => AirCategory::Poor,
        5 => AirCategory::VeryPoor,
        _ => AirCategory::Moderate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_category_boundaries() {
        assert_eq!(weather_category(199), WeatherCategory::Sunny); // below known ranges
        assert_eq!(weather_category(200), WeatherCategory::Rainy);
        assert_eq!(weather_category(599), WeatherCategory::Rainy);
        assert_eq!(weather_category(600), WeatherCategory::Snowy);
        assert_eq!(weather_category(699), WeatherCategory::Snowy);
        assert_eq!(weather_category(700), WeatherCategory::Sunny); // atmosphere group, default
        assert_eq!(weather_category(800), WeatherCategory::Sunny);
        assert_eq!(weather_category(801), WeatherCategory::Sunny);
        assert_eq!(weather_category(802), WeatherCategory::Cloudy);
        assert_eq!(weather_category(804), WeatherCategory::Cloudy);
        assert_eq!(weather_category(805), WeatherCategory::Sunny); // above known ranges
    }

    #[test]
    fn test_weather_category_default_for_negative_code() {
        assert_eq!(weather_category(-1), WeatherCategory::Sunny);
    }

    #[test]
    fn test_air_category_exact_matches() {
        assert_eq!(air_category(1), AirCategory::VeryGood);
        assert_eq!(air_category(2), AirCategory::Fair);
        assert_eq!(air_category(3), AirCategory::Moderate);
        assert_eq!(air_category(4), AirCategory::Poor);
        assert_eq!(air_category(5), AirCategory::VeryPoor);
    }

    #[test]
    fn test_air_category_default() {
        // Out-of-range values default to Moderate; use non-3 inputs so the
        // assertion cannot pass by coinciding with the exact-match arm.
        assert_eq!(air_category(0), AirCategory::Moderate);
        assert_eq!(air_category(6), AirCategory::Moderate);
        assert_eq!(air_category(99), AirCategory::Moderate);
        assert_eq!(air_category(-1), AirCategory::Moderate); // sentinel
    }
}
