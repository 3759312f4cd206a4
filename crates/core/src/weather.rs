// Synthetic current-weather generation

use chrono::{DateTime, Local, Timelike};
use rand::Rng;
use serde::Serialize;

use crate::round_to;

/// Fallback when a request carries no usable location.
pub const DEFAULT_LOCATION: &str = "London";

const CONDITION_MAIN: [&str; 3] = ["Clear", "Clouds", "Rain"];
const CONDITION_DESCRIPTIONS: [&str; 4] =
    ["clear sky", "few clouds", "scattered clouds", "light rain"];

/// A single synthetic weather observation.
///
/// Every field is sampled fresh per call; nothing persists between requests.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReading {
    pub location: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u32,
    pub pressure_hpa: u32,
    pub condition_main: String,
    pub condition_description: String,
    pub wind_speed_ms: f64,
    pub observed_at: i64,
    pub sunrise_at: i64,
    pub sunset_at: i64,
}

/// Generates demo weather readings for a named location.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherGenerator;

impl WeatherGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Produce a reading for `location`, falling back to
    /// [`DEFAULT_LOCATION`] when the input is empty or blank.
    pub fn generate(&self, location: &str) -> WeatherReading {
        self.generate_with(&mut rand::rng(), Local::now(), location)
    }

    /// Sampling core with an injectable random source and clock.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: DateTime<Local>,
        location: &str,
    ) -> WeatherReading {
        let location = if location.trim().is_empty() {
            DEFAULT_LOCATION
        } else {
            location
        };

        // main and description are sampled independently: a "Clear" reading
        // may carry a "light rain" description.
        let condition_main = CONDITION_MAIN[rng.random_range(0..CONDITION_MAIN.len())];
        let condition_description =
            CONDITION_DESCRIPTIONS[rng.random_range(0..CONDITION_DESCRIPTIONS.len())];

        WeatherReading {
            location: location.to_string(),
            temperature_c: round_to(rng.random_range(15.0..25.0), 1),
            feels_like_c: round_to(rng.random_range(14.0..26.0), 1),
            humidity_pct: rng.random_range(40..=80),
            pressure_hpa: rng.random_range(1000..=1020),
            condition_main: condition_main.to_string(),
            condition_description: condition_description.to_string(),
            wind_speed_ms: round_to(rng.random_range(1.0..10.0), 1),
            observed_at: now.timestamp(),
            sunrise_at: at_local_time(now, 6, 30),
            sunset_at: at_local_time(now, 19, 45),
        }
    }
}

/// Epoch seconds at `hour:minute` on the same local day as `now`.
fn at_local_time(now: DateTime<Local>, hour: u32, minute: u32) -> i64 {
    now.with_hour(hour)
        .and_then(|t| t.with_minute(minute))
        .and_then(|t| t.with_second(0))
        .unwrap_or(now)
        .timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_fields_stay_in_bounds() {
        let generator = WeatherGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let reading = generator.generate_with(&mut rng, fixed_now(), "Berlin");

            assert!((15.0..=25.0).contains(&reading.temperature_c));
            assert!((14.0..=26.0).contains(&reading.feels_like_c));
            assert!((40..=80).contains(&reading.humidity_pct));
            assert!((1000..=1020).contains(&reading.pressure_hpa));
            assert!((1.0..=10.0).contains(&reading.wind_speed_ms));
            assert!(CONDITION_MAIN.contains(&reading.condition_main.as_str()));
            assert!(CONDITION_DESCRIPTIONS.contains(&reading.condition_description.as_str()));
        }
    }

    #[test]
    fn test_temperatures_rounded_to_one_decimal() {
        let generator = WeatherGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let reading = generator.generate_with(&mut rng, fixed_now(), "Berlin");
            assert_eq!(reading.temperature_c, round_to(reading.temperature_c, 1));
            assert_eq!(reading.wind_speed_ms, round_to(reading.wind_speed_ms, 1));
        }
    }

    #[test]
    fn test_empty_location_defaults_to_london() {
        let generator = WeatherGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);

        let reading = generator.generate_with(&mut rng, fixed_now(), "");
        assert_eq!(reading.location, "London");

        let reading = generator.generate_with(&mut rng, fixed_now(), "   ");
        assert_eq!(reading.location, "London");

        let reading = generator.generate_with(&mut rng, fixed_now(), "Oslo");
        assert_eq!(reading.location, "Oslo");
    }

    #[test]
    fn test_sun_times_pinned_to_local_day() {
        let generator = WeatherGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);
        let now = fixed_now();

        let reading = generator.generate_with(&mut rng, now, "London");

        let sunrise = Local.with_ymd_and_hms(2025, 6, 15, 6, 30, 0).unwrap();
        let sunset = Local.with_ymd_and_hms(2025, 6, 15, 19, 45, 0).unwrap();
        assert_eq!(reading.sunrise_at, sunrise.timestamp());
        assert_eq!(reading.sunset_at, sunset.timestamp());
        assert_eq!(reading.observed_at, now.timestamp());
    }
}
