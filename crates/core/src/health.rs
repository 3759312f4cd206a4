// Service liveness payload shared by the health tool and the HTTP endpoints

use chrono::Local;
use serde::Serialize;

use crate::SERVICE_NAME;

/// Health payload reported to orchestrators and protocol clients.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

impl HealthStatus {
    /// Snapshot at the current wall clock. The status is always
    /// "healthy": the server has no degraded states to report.
    pub fn current() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Local::now().to_rfc3339(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_current_reports_healthy() {
        let status = HealthStatus::current();

        assert_eq!(status.status, "healthy");
        assert_eq!(status.service, SERVICE_NAME);
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_timestamp_is_fresh_rfc3339() {
        let status = HealthStatus::current();
        let parsed = DateTime::parse_from_rfc3339(&status.timestamp).unwrap();

        let age = Local::now().signed_duration_since(parsed);
        assert!(age.num_seconds().abs() <= 1, "timestamp too old: {age}");
    }
}
