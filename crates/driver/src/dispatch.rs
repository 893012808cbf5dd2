//! Per-connection driver selection.
//!
//! A server's release does not change mid-session, so the converter set is
//! resolved once when a connection is established ([`DriverRegistry::connect`])
//! and every later payload from that connection goes straight to the matching
//! converter.

use std::collections::hash_map::{Entry, HashMap};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use lab_model::{
    ApiType, CatalogSchema, Connection, ConnectionName, ConnectionRegistry, ConversionError,
    Converter, EntitySchema, FlatEntity, LabError, LabResult, QueryResult, ResourceKind,
    ServerStatus, TaskStatus, VisualiserType,
};

use crate::{v2024_8, v2025_1, ServerVersion};

/// API a resource kind's payloads are fetched from.
pub fn source_api(kind: ResourceKind) -> ApiType {
    match kind {
        ResourceKind::TaskStatus | ResourceKind::ServerStatus => ApiType::System,
        ResourceKind::CatalogSchema
        | ResourceKind::EntitySchema
        | ResourceKind::Entity
        | ResourceKind::QueryResult => ApiType::Rest,
    }
}

fn check_api(kind: ResourceKind, api: ApiType) -> Result<(), ConversionError> {
    if source_api(kind) == api {
        Ok(())
    } else {
        Err(ConversionError::UnsupportedApi { api })
    }
}

/// Deserialises `payload` into the release's wire type and converts it.
fn decode<D, E>(
    kind: ResourceKind,
    payload: &Value,
    converter: &impl Converter<D, E>,
) -> Result<E, ConversionError>
where
    D: DeserializeOwned,
{
    let wire = D::deserialize(payload)
        .map_err(|source| ConversionError::Deserialization { kind, source })?;
    converter.convert(&wire)
}

/// Same as [`decode`] for payloads holding a JSON array of resources.
fn decode_all<D, E>(
    kind: ResourceKind,
    payload: &Value,
    converter: &impl Converter<D, E>,
) -> Result<Vec<E>, ConversionError>
where
    D: DeserializeOwned,
{
    let wire = Vec::<D>::deserialize(payload)
        .map_err(|source| ConversionError::Deserialization { kind, source })?;
    converter.convert_all(&wire)
}

// ---------------------------------------------------------------------------

/// The converter set bound to one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDriver {
    connection: Connection,
    version: ServerVersion,
}

impl ConnectionDriver {
    /// Binds `connection` to the converter set for the server release it reports.
    pub fn resolve(connection: Connection, reported_version: &str) -> Result<Self, ConversionError> {
        let version = ServerVersion::resolve(reported_version)?;
        Ok(Self {
            connection,
            version,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn version(&self) -> ServerVersion {
        self.version
    }

    pub fn catalog_schema(&self, api: ApiType, payload: &Value) -> Result<CatalogSchema, ConversionError> {
        let kind = ResourceKind::CatalogSchema;
        check_api(kind, api)?;
        match self.version {
            ServerVersion::V2024_8 => {
                decode::<v2024_8::wire::CatalogSchema, _>(kind, payload, &v2024_8::CatalogSchemaConverter)
            }
            ServerVersion::V2025_1 => {
                decode::<v2025_1::wire::CatalogSchema, _>(kind, payload, &v2025_1::CatalogSchemaConverter)
            }
        }
    }

    pub fn entity_schema(&self, api: ApiType, payload: &Value) -> Result<EntitySchema, ConversionError> {
        let kind = ResourceKind::EntitySchema;
        check_api(kind, api)?;
        match self.version {
            ServerVersion::V2024_8 => {
                decode::<v2024_8::wire::EntitySchema, _>(kind, payload, &v2024_8::EntitySchemaConverter)
            }
            ServerVersion::V2025_1 => {
                decode::<v2025_1::wire::EntitySchema, _>(kind, payload, &v2025_1::EntitySchemaConverter)
            }
        }
    }

    pub fn entity(&self, api: ApiType, payload: &Value) -> Result<FlatEntity, ConversionError> {
        let kind = ResourceKind::Entity;
        check_api(kind, api)?;
        match self.version {
            ServerVersion::V2024_8 => {
                decode::<v2024_8::wire::Entity, _>(kind, payload, &v2024_8::EntityConverter)
            }
            ServerVersion::V2025_1 => {
                decode::<v2025_1::wire::Entity, _>(kind, payload, &v2025_1::EntityConverter)
            }
        }
    }

    pub fn query_result(&self, api: ApiType, payload: &Value) -> Result<QueryResult, ConversionError> {
        let kind = ResourceKind::QueryResult;
        check_api(kind, api)?;
        match self.version {
            ServerVersion::V2024_8 => {
                decode::<v2024_8::wire::QueryResponse, _>(kind, payload, &v2024_8::QueryResultConverter)
            }
            ServerVersion::V2025_1 => {
                decode::<v2025_1::wire::QueryResponse, _>(kind, payload, &v2025_1::QueryResultConverter)
            }
        }
    }

    /// Visualisers offered for the extra results of a query response.
    pub fn visualisers(&self, api: ApiType, payload: &Value) -> Result<Vec<VisualiserType>, ConversionError> {
        let kind = ResourceKind::QueryResult;
        check_api(kind, api)?;
        match self.version {
            ServerVersion::V2024_8 => {
                decode::<v2024_8::wire::QueryResponse, _>(kind, payload, &v2024_8::VisualiserConverter)
            }
            ServerVersion::V2025_1 => {
                decode::<v2025_1::wire::QueryResponse, _>(kind, payload, &v2025_1::VisualiserConverter)
            }
        }
    }

    pub fn task_status(&self, api: ApiType, payload: &Value) -> Result<TaskStatus, ConversionError> {
        let kind = ResourceKind::TaskStatus;
        check_api(kind, api)?;
        match self.version {
            ServerVersion::V2024_8 => {
                decode::<v2024_8::wire::TaskStatus, _>(kind, payload, &v2024_8::TaskStatusConverter)
            }
            ServerVersion::V2025_1 => {
                decode::<v2025_1::wire::TaskStatus, _>(kind, payload, &v2025_1::TaskStatusConverter)
            }
        }
    }

    /// Converts a task listing (JSON array of task statuses).
    pub fn task_statuses(&self, api: ApiType, payload: &Value) -> Result<Vec<TaskStatus>, ConversionError> {
        let kind = ResourceKind::TaskStatus;
        check_api(kind, api)?;
        match self.version {
            ServerVersion::V2024_8 => {
                decode_all::<v2024_8::wire::TaskStatus, _>(kind, payload, &v2024_8::TaskStatusConverter)
            }
            ServerVersion::V2025_1 => {
                decode_all::<v2025_1::wire::TaskStatus, _>(kind, payload, &v2025_1::TaskStatusConverter)
            }
        }
    }

    pub fn server_status(&self, api: ApiType, payload: &Value) -> Result<ServerStatus, ConversionError> {
        let kind = ResourceKind::ServerStatus;
        check_api(kind, api)?;
        match self.version {
            ServerVersion::V2024_8 => {
                decode::<v2024_8::wire::ServerStatus, _>(kind, payload, &v2024_8::ServerStatusConverter)
            }
            ServerVersion::V2025_1 => {
                decode::<v2025_1::wire::ServerStatus, _>(kind, payload, &v2025_1::ServerStatusConverter)
            }
        }
    }
}

// ---------------------------------------------------------------------------

/// Drivers of the currently established connections.
#[derive(Debug, Clone, Default)]
pub struct DriverRegistry {
    drivers: HashMap<ConnectionName, ConnectionDriver>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establishes (or re-establishes) the driver for connection `name`, whose
    /// server reports `reported_version`.
    pub fn connect(
        &mut self,
        connections: &ConnectionRegistry,
        name: &ConnectionName,
        reported_version: &str,
    ) -> LabResult<&ConnectionDriver> {
        let connection = connections
            .get(name)
            .ok_or_else(|| LabError::ConnectionNotFound { name: name.clone() })?;
        let driver = ConnectionDriver::resolve(connection.clone(), reported_version)?;
        info!(connection = %name, driver = %driver.version(), "Connection established");

        match self.drivers.entry(name.clone()) {
            Entry::Occupied(mut entry) => {
                entry.insert(driver);
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => Ok(entry.insert(driver)),
        }
    }

    pub fn get(&self, name: &ConnectionName) -> Option<&ConnectionDriver> {
        self.drivers.get(name)
    }

    /// Drops the driver of connection `name`, e.g. after the connection was
    /// edited or removed.
    pub fn disconnect(&mut self, name: &ConnectionName) -> Option<ConnectionDriver> {
        let driver = self.drivers.remove(name);
        if driver.is_some() {
            debug!(connection = %name, "Connection dropped");
        }
        driver
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}
