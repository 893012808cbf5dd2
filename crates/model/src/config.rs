//! Lab configuration.
//!
//! The hosting application hands the lab a JSON document listing the
//! preconfigured connections:
//!
//! ```json
//! {
//!   "readOnly": false,
//!   "connections": [
//!     { "name": "demo", "restUrl": "https://demo.evitadb.io:5555/rest", "gqlUrl": "https://demo.evitadb.io:5555/gql" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Connection, ConnectionRegistry, LabError, LabResult};

/// Parsed lab configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabConfig {
    /// Connections preconfigured by the host.
    #[serde(default)]
    pub connections: Vec<Connection>,

    /// When `true` the lab must not offer any modifying operation.
    #[serde(default)]
    pub read_only: bool,
}

impl LabConfig {
    /// Parses a configuration document.
    pub fn from_json(raw: &str) -> LabResult<Self> {
        serde_json::from_str(raw).map_err(|e| LabError::Configuration {
            message: format!("invalid lab configuration: {e}"),
        })
    }

    /// Validates every connection and builds the registry.
    ///
    /// Duplicate names are reported as [`LabError::Configuration`] because
    /// they originate in the configuration document, not in a user edit.
    pub fn into_registry(self) -> LabResult<ConnectionRegistry> {
        let mut registry = ConnectionRegistry::new();
        for connection in self.connections {
            connection.check()?;
            registry.add(connection).map_err(|e| LabError::Configuration {
                message: e.to_string(),
            })?;
        }
        debug!(connections = registry.len(), "Loaded lab configuration");
        Ok(registry)
    }
}
