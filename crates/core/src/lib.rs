// Core data model and generators for the HomeGenie tool server

pub mod energy;
pub mod health;
pub mod report;
pub mod weather;

pub use energy::{EnergyPriceGenerator, EnergyPriceReport, PricePeriod};
pub use health::HealthStatus;
pub use weather::{WeatherGenerator, WeatherReading};

/// Service name reported by health checks and the HTTP status endpoints.
pub const SERVICE_NAME: &str = "HomeGenie MCP Server";

/// Round to a fixed number of decimal places (half away from zero).
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
