// Tiered energy pricing and 24-hour forecast generation

use chrono::{DateTime, Duration, Local, Timelike};
use serde::Serialize;

use crate::round_to;

/// Fallback when a request carries no usable region code.
pub const DEFAULT_REGION: &str = "EU";

/// Day-ahead base price in EUR per kWh before tier multipliers.
const BASE_PRICE_EUR_KWH: f64 = 0.25;

const FORECAST_HOURS: i64 = 24;

/// Time-of-day pricing band, a pure function of the local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePeriod {
    Peak,
    OffPeak,
    Standard,
}

impl PricePeriod {
    /// Classify a local hour-of-day in `0..=23`.
    ///
    /// Bands are checked in order: peak, then off-peak, then standard, so
    /// boundary hours belong to the first matching band.
    pub fn from_hour(hour: u32) -> Self {
        if (7..=9).contains(&hour) || (17..=20).contains(&hour) {
            Self::Peak
        } else if hour >= 22 || hour <= 6 {
            Self::OffPeak
        } else {
            Self::Standard
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Peak => 1.8,
            Self::OffPeak => 0.7,
            Self::Standard => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Peak => "peak",
            Self::OffPeak => "off_peak",
            Self::Standard => "standard",
        }
    }

    /// Human-facing band name used in rendered reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Peak => "Peak",
            Self::OffPeak => "Off Peak",
            Self::Standard => "Standard",
        }
    }

    /// Tier price rounded to 3 decimals, e.g. peak -> 0.45.
    pub fn price_per_kwh(self) -> f64 {
        round_to(BASE_PRICE_EUR_KWH * self.multiplier(), 3)
    }
}

/// Spot price at report time.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentPrice {
    pub price_per_kwh: f64,
    pub currency: String,
    pub period: PricePeriod,
    pub unit: String,
}

/// One hourly price projection.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastPoint {
    pub time: String,
    pub date: String,
    pub price_per_kwh: f64,
    pub period: PricePeriod,
}

/// Fixed exchange metadata attached to every report.
#[derive(Debug, Clone, Serialize)]
pub struct MarketInfo {
    pub market: String,
    pub source: String,
    pub last_updated: DateTime<Local>,
}

/// Current price plus a 24-point hourly forecast for a region.
#[derive(Debug, Clone, Serialize)]
pub struct EnergyPriceReport {
    pub region: String,
    pub generated_at: DateTime<Local>,
    pub current_price: CurrentPrice,
    pub forecast: Vec<ForecastPoint>,
    pub market_info: MarketInfo,
}

/// Generates demo day-ahead price reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyPriceGenerator;

impl EnergyPriceGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Report for `region` at the current wall clock, falling back to
    /// [`DEFAULT_REGION`] when the input is empty or blank.
    pub fn generate(&self, region: &str) -> EnergyPriceReport {
        self.generate_at(region, Local::now())
    }

    /// Report for a fixed clock reading.
    ///
    /// The full 24-point forecast is always computed; whether it gets
    /// rendered is the caller's concern.
    pub fn generate_at(&self, region: &str, now: DateTime<Local>) -> EnergyPriceReport {
        let region = if region.trim().is_empty() {
            DEFAULT_REGION
        } else {
            region
        };
        let period = PricePeriod::from_hour(now.hour());

        let forecast = (0..FORECAST_HOURS)
            .map(|offset| {
                let slot = now + Duration::hours(offset);
                let slot_period = PricePeriod::from_hour(slot.hour());
                ForecastPoint {
                    time: slot.format("%H:%M").to_string(),
                    date: slot.format("%Y-%m-%d").to_string(),
                    price_per_kwh: slot_period.price_per_kwh(),
                    period: slot_period,
                }
            })
            .collect();

        EnergyPriceReport {
            region: region.to_string(),
            generated_at: now,
            current_price: CurrentPrice {
                price_per_kwh: period.price_per_kwh(),
                currency: "EUR".to_string(),
                period,
                unit: "kWh".to_string(),
            },
            forecast,
            market_info: MarketInfo {
                market: "Day Ahead".to_string(),
                source: "Energy Exchange".to_string(),
                last_updated: now,
            },
        }
    }
}
