//! Health reporting
//!
//! Checks that the user store answers queries and that its backing file
//! can be read.

use crate::logging::log_health_check;
use crate::storage::JsonUserStore;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use userapi_domain::repositories::UserRepository;

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    /// Component is fully operational
    Up,
    /// Component cannot serve requests
    Down,
}

impl HealthStatus {
    /// Check if the status indicates the component is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    /// Name of the health check
    pub name: String,
    /// Current status
    pub status: HealthStatus,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Additional details
    pub details: serde_json::Value,
}

impl HealthCheck {
    fn new<S: Into<String>>(name: S, status: HealthStatus, details: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            status,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            details,
        }
    }

    /// Create a successful health check
    pub fn healthy<S: Into<String>>(name: S, details: serde_json::Value) -> Self {
        Self::new(name, HealthStatus::Up, details)
    }

    /// Create a failed health check
    pub fn failed<S: Into<String>>(name: S, details: serde_json::Value) -> Self {
        Self::new(name, HealthStatus::Down, details)
    }

    /// Set response time
    #[must_use]
    pub fn with_response_time(mut self, started: Instant) -> Self {
        self.response_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self
    }
}

/// Name reported for the user store check
pub const USER_STORE_CHECK: &str = "userRepository";

/// Check the user store and its data file
///
/// A data file that does not exist yet counts as accessible; one that exists
/// but cannot be opened marks the store as down.
pub async fn check_user_store(store: &JsonUserStore) -> HealthCheck {
    let started = Instant::now();
    let user_count = store.count().await;
    let path = absolute_path(store.path());
    let accessible = data_file_accessible(store.path()).await;

    let check = if accessible {
        HealthCheck::healthy(
            USER_STORE_CHECK,
            serde_json::json!({
                "message": "User repository is healthy",
                "userCount": user_count,
                "dataFileAccessible": true,
                "dataFilePath": path,
            }),
        )
    } else {
        HealthCheck::failed(
            USER_STORE_CHECK,
            serde_json::json!({
                "message": "Data file is not accessible",
                "dataFilePath": path,
            }),
        )
    };

    log_health_check(
        USER_STORE_CHECK,
        accessible,
        (!accessible).then_some("data file is not readable"),
    );
    check.with_response_time(started)
}

async fn data_file_accessible(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => tokio::fs::File::open(path).await.is_ok(),
        Ok(_) => false,
        Err(e) => e.kind() == std::io::ErrorKind::NotFound,
    }
}

fn absolute_path(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
