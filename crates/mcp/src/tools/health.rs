// Health check tool for container orchestration probes

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, Tool};
use anyhow::Result;
use homegenie_core::HealthStatus;

/// Tool serving `health_check`. Takes no arguments and returns the
/// status payload as JSON text.
pub struct HealthCheckTool;

impl HealthCheckTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HealthCheckTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Tool for HealthCheckTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "health_check".to_string(),
            description: "Health check endpoint for container orchestration".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let status = HealthStatus::current();
        Ok(CallToolResult::text(serde_json::to_string(&status)?))
    }
}
