// Rendering of generated readings into annotated tool responses

use crate::energy::{EnergyPriceReport, PricePeriod};
use crate::weather::WeatherReading;

/// How many forecast entries a rendered report shows.
const FORECAST_DISPLAY_HOURS: usize = 8;

/// Render a weather reading as a multi-section report: current conditions,
/// automation recommendations, and the raw record for traceability.
pub fn format_weather(reading: &WeatherReading) -> String {
    let mut out = String::new();

    out.push_str(&format!("🌤️ Weather Data for {}:\n\n", reading.location));

    out.push_str("📊 Current Conditions:\n");
    out.push_str(&format!("• Temperature: {:.1}°C\n", reading.temperature_c));
    out.push_str(&format!(
        "• Description: {}\n",
        title_case(&reading.condition_description)
    ));
    out.push_str(&format!("• Humidity: {}%\n", reading.humidity_pct));
    out.push_str(&format!("• Wind Speed: {:.1} m/s\n", reading.wind_speed_ms));
    out.push_str(&format!("• Pressure: {} hPa\n\n", reading.pressure_hpa));

    out.push_str("🏠 HomeGenie Impact:\n");
    out.push_str(&format!(
        "• Heating: {}\n",
        heating_recommendation(reading.temperature_c)
    ));
    out.push_str(&format!(
        "• Lighting: {}\n",
        lighting_recommendation(&reading.condition_description)
    ));
    out.push_str(&format!(
        "• Ventilation: {}\n\n",
        ventilation_recommendation(&reading.condition_description)
    ));

    out.push_str(&format!("📱 Raw Data: {}", to_pretty_json(reading)));
    out
}

/// Render an energy price report. `include_forecast` gates only the
/// forecast section; the report always carries all 24 points.
pub fn format_energy(report: &EnergyPriceReport, include_forecast: bool) -> String {
    let current = &report.current_price;
    let mut out = String::new();

    out.push_str(&format!("⚡ Energy Prices for {}:\n\n", report.region));

    out.push_str("💰 Current Price:\n");
    out.push_str(&format!("• Price: €{}/kWh\n", current.price_per_kwh));
    out.push_str(&format!("• Period: {}\n", current.period.display_name()));
    out.push_str(&format!("• Currency: {}\n", current.currency));
    out.push_str(&format!(
        "• Last Updated: {}\n\n",
        report.generated_at.format("%Y-%m-%dT%H:%M:%S")
    ));

    out.push_str("🏠 HomeGenie Recommendations:\n");
    out.push_str(&format!(
        "• Period Type: {}\n",
        current.period.display_name()
    ));
    out.push_str(&format!(
        "• Cost Impact: {}\n",
        cost_impact(current.price_per_kwh)
    ));
    out.push_str(&format!("• Smart Actions: {}\n", smart_action(current.period)));

    if include_forecast {
        out.push_str(&format!("\n📈 Next {FORECAST_DISPLAY_HOURS} Hours Forecast:\n"));
        for point in report.forecast.iter().take(FORECAST_DISPLAY_HOURS) {
            out.push_str(&format!(
                "• {}: €{}/kWh ({})\n",
                point.time,
                point.price_per_kwh,
                point.period.label()
            ));
        }
    }

    out.push_str(&format!("\n📱 Raw Data: {}", to_pretty_json(report)));
    out
}

fn heating_recommendation(temperature_c: f64) -> &'static str {
    if temperature_c < 18.0 {
        "Increase"
    } else if temperature_c < 22.0 {
        "Maintain"
    } else {
        "Decrease"
    }
}

fn lighting_recommendation(description: &str) -> &'static str {
    let description = description.to_lowercase();
    if description.contains("cloud") || description.contains("rain") {
        "Low, increase indoor lighting"
    } else {
        "Good"
    }
}

fn ventilation_recommendation(description: &str) -> &'static str {
    if description.to_lowercase().contains("rain") {
        "Close windows"
    } else {
        "Consider ventilation"
    }
}

fn cost_impact(price_per_kwh: f64) -> &'static str {
    if price_per_kwh > 0.35 {
        "High cost"
    } else if price_per_kwh > 0.20 {
        "Standard cost"
    } else {
        "Low cost, good time for energy-intensive tasks"
    }
}

fn smart_action(period: PricePeriod) -> &'static str {
    match period {
        PricePeriod::Peak => "Delay washing/heating",
        PricePeriod::OffPeak => "Good time for appliances",
        PricePeriod::Standard => "Normal usage",
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
