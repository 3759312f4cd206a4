// Energy price tool: tiered current price plus hourly forecast

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_boolean, json_schema_object, json_schema_string, Tool};
use anyhow::Result;
use homegenie_core::energy::EnergyPriceGenerator;
use homegenie_core::report;
use serde::Deserialize;

/// Tool serving `get_energy_prices`.
pub struct EnergyPricesTool {
    generator: EnergyPriceGenerator,
}

impl EnergyPricesTool {
    pub fn new() -> Self {
        Self {
            generator: EnergyPriceGenerator::new(),
        }
    }
}

impl Default for EnergyPricesTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct EnergyArgs {
    region: String,
    include_forecast: bool,
}

impl Default for EnergyArgs {
    fn default() -> Self {
        Self {
            region: String::new(),
            include_forecast: true,
        }
    }
}

#[async_trait::async_trait]
impl Tool for EnergyPricesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_energy_prices".to_string(),
            description:
                "Fetch current energy prices per kWh with forecast data. \
                 Returns energy price information with smart home optimization recommendations."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "region": json_schema_string("Region code (EU, US, UK; default: EU)"),
                    "include_forecast": json_schema_boolean(
                        "Include 24-hour price forecast (default: true)"
                    )
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        // Permissive contract: malformed arguments fall back to defaults
        // instead of being rejected.
        let args: EnergyArgs = serde_json::from_value(arguments).unwrap_or_default();

        // The full forecast is computed either way; the flag only controls
        // whether it is rendered.
        let prices = self.generator.generate(&args.region);
        tracing::info!("fetching energy prices for region: {}", prices.region);

        Ok(CallToolResult::text(report::format_energy(
            &prices,
            args.include_forecast,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToolContent;

    fn result_text(result: &CallToolResult) -> &str {
        let ToolContent::Text { text } = &result.content[0];
        text
    }

    #[tokio::test]
    async fn test_missing_region_defaults_to_eu() {
        let tool = EnergyPricesTool::new();
        let result = tool.execute(serde_json::json!({})).await.unwrap();
        let text = result_text(&result);

        assert!(text.contains("Energy Prices for EU"));
        // include_forecast defaults to true
        assert!(text.contains("📈 Next 8 Hours Forecast:"));
    }

    #[tokio::test]
    async fn test_forecast_suppressed_on_request() {
        let tool = EnergyPricesTool::new();
        let result = tool
            .execute(serde_json::json!({"region": "UK", "include_forecast": false}))
            .await
            .unwrap();
        let text = result_text(&result);

        assert!(text.contains("Energy Prices for UK"));
        assert!(!text.contains("Forecast"));
    }

    #[tokio::test]
    async fn test_malformed_arguments_are_defaulted() {
        let tool = EnergyPricesTool::new();
        let result = tool
            .execute(serde_json::json!({"region": [], "include_forecast": "yes"}))
            .await
            .unwrap();
        let text = result_text(&result);

        assert!(text.contains("Energy Prices for EU"));
        assert!(text.contains("📈 Next 8 Hours Forecast:"));
    }

    #[test]
    fn test_schema_declares_no_required_fields() {
        let schema = EnergyPricesTool::new().schema();
        assert_eq!(schema.name, "get_energy_prices");
        assert_eq!(schema.input_schema["required"], serde_json::json!([]));
    }
}
