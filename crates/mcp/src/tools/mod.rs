pub mod energy;
pub mod health;
pub mod weather;
mod registry;

pub use energy::EnergyPricesTool;
pub use health::HealthCheckTool;
pub use weather::WeatherDataTool;
pub use registry::{
    json_schema_boolean, json_schema_object, json_schema_string, Tool, ToolRegistry,
};

use std::sync::Arc;

/// Registry with the full HomeGenie tool set registered.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(WeatherDataTool::new()));
    registry.register(Arc::new(EnergyPricesTool::new()));
    registry.register(Arc::new(HealthCheckTool::new()));
    registry
}
