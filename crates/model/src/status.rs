//! Server status as shown on the connection's overview.

use serde::{Deserialize, Serialize};

use crate::{ApiType, Readiness, Timestamp};

/// Availability of one API surface on a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    pub api_type: ApiType,
    pub enabled: bool,
    /// `None` when the server does not report per-API readiness.
    pub ready: Option<bool>,
}

/// Server status and readiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    /// Server release (e.g. `2024.8.3`).
    pub version: String,
    pub started_at: Timestamp,
    pub uptime_seconds: u64,
    pub instance_id: String,
    pub catalogs_ok: u32,
    pub catalogs_corrupted: u32,
    pub readiness: Readiness,
    /// Known APIs, ordered by [`ApiType`].
    pub apis: Vec<ApiStatus>,
}

impl ServerStatus {
    pub fn api(&self, api_type: ApiType) -> Option<&ApiStatus> {
        self.apis.iter().find(|api| api.api_type == api_type)
    }

    /// Returns `true` if the API is enabled and not reported as unready.
    pub fn is_api_available(&self, api_type: ApiType) -> bool {
        self.api(api_type)
            .is_some_and(|api| api.enabled && api.ready != Some(false))
    }
}
