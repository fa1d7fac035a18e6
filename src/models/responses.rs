use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub cached_dashboards: u64,
}

/// Display gate for a dashboard request
///
/// Serialized with a `status` tag so clients can switch on
/// `loading` / `ready` / `failed` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DashboardState<T> {
    Loading,
    Ready { dashboard: T },
    Failed { error: String, message: String },
}

impl<T> Default for DashboardState<T> {
    fn default() -> Self {
        DashboardState::Loading
    }
}

impl<T> DashboardState<T> {
    pub fn ready(dashboard: T) -> Self {
        DashboardState::Ready { dashboard }
    }

    pub fn failed(error: impl Into<String>, message: impl Into<String>) -> Self {
        DashboardState::Failed {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DashboardState::Ready { .. })
    }
}
