// Weather tool: synthetic current conditions for a location

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, Tool};
use anyhow::Result;
use homegenie_core::report;
use homegenie_core::weather::WeatherGenerator;
use serde::Deserialize;

/// Tool serving `get_weather_data`.
pub struct WeatherDataTool {
    generator: WeatherGenerator,
}

impl WeatherDataTool {
    pub fn new() -> Self {
        Self {
            generator: WeatherGenerator::new(),
        }
    }
}

impl Default for WeatherDataTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeatherArgs {
    location: String,
}

#[async_trait::async_trait]
impl Tool for WeatherDataTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_weather_data".to_string(),
            description:
                "Fetch current weather data for a specified location. \
                 Returns weather information with HomeGenie automation recommendations."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "location": json_schema_string("City name or location (default: London)")
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        // Permissive contract: malformed arguments fall back to defaults
        // instead of being rejected.
        let args: WeatherArgs = serde_json::from_value(arguments).unwrap_or_default();

        let reading = self.generator.generate(&args.location);
        tracing::info!("fetching weather data for: {}", reading.location);

        Ok(CallToolResult::text(report::format_weather(&reading)))
    }
}
