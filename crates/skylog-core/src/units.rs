//! Temperature unit conversion

/// 0 degrees Celsius in Kelvin
pub const KELVIN_CELSIUS_DIFF: f64 = 273.15;

pub const ONE_HOUR_IN_SEC: i64 = 60 * 60;
pub const ONE_DAY_IN_SEC: i64 = 60 * 60 * 24;

/// Convert a provider temperature in Kelvin to whole-degree Celsius.
///
/// Rounds half-away-from-zero (`f64::round` semantics): 26.85 -> 27,
/// -0.5 -> -1.
pub fn to_celsius(kelvin: f64) -> i32 {
    (kelvin - KELVIN_CELSIUS_DIFF).round() as i32
}

// TODO: Fahrenheit display was planned upstream but never wired in; add a
// to_fahrenheit once a display setting exists to select it.
