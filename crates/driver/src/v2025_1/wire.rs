//! Payload shapes of evitaDB 2025.1 (REST and system APIs).
//!
//! Changes against 2024.8:
//!
//! - entities name their collection in `entityType` instead of `type`;
//! - schema flags became per-scope (`filterableInScopes`, `uniqueInScopes`, ...);
//! - task timestamps and traits moved into nested objects, exceptions carry a
//!   structured message;
//! - server readiness moved into a nested `readiness` object along with the
//!   per-API readiness flags.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

pub use crate::v2024_8::wire::CatalogSchema;

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySchema {
    pub name: String,
    pub version: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub with_generated_primary_key: bool,
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeSchema>,
    #[serde(default)]
    pub associated_data: BTreeMap<String, AssociatedDataSchema>,
    #[serde(default)]
    pub references: BTreeMap<String, ReferenceSchema>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSchema {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub value_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub unique_in_scopes: Vec<ScopedUniqueness>,
    /// Scopes (`LIVE`, `ARCHIVED`) in which the attribute is filterable.
    #[serde(default)]
    pub filterable_in_scopes: Vec<String>,
    #[serde(default)]
    pub sortable_in_scopes: Vec<String>,
    #[serde(default)]
    pub localized: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedUniqueness {
    pub scope: String,
    pub uniqueness_type: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedDataSchema {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub value_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub localized: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSchema {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub referenced_entity_type: String,
    #[serde(default)]
    pub referenced_entity_type_managed: bool,
    pub cardinality: String,
    #[serde(default)]
    pub faceted_in_scopes: Vec<String>,
}

// ---------------------------------------------------------------------------
// Entities and queries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub primary_key: i64,
    pub entity_type: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub global: BTreeMap<String, Value>,
    #[serde(default)]
    pub localized: BTreeMap<String, BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(default)]
    pub record_page: Option<DataChunk>,
    #[serde(default)]
    pub record_strip: Option<DataChunk>,
    #[serde(default)]
    pub extra_results: BTreeMap<String, IgnoredAny>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataChunk {
    #[serde(default)]
    pub data: Vec<Entity>,
    pub total_record_count: u64,
}

// ---------------------------------------------------------------------------
// System API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    pub task_id: uuid::Uuid,
    pub task_type: String,
    pub task_name: String,
    #[serde(default)]
    pub catalog_name: Option<String>,
    pub timestamps: TaskTimestamps,
    pub state: String,
    #[serde(default)]
    pub progress: Option<i64>,
    #[serde(default)]
    pub traits: TaskTraits,
    #[serde(default)]
    pub exception: Option<TaskException>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskTimestamps {
    pub created: String,
    #[serde(default)]
    pub started: Option<String>,
    #[serde(default)]
    pub finished: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskTraits {
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskException {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub version: String,
    pub started_at: String,
    pub uptime: u64,
    pub instance_id: String,
    #[serde(default)]
    pub catalogs_corrupted: u32,
    #[serde(default)]
    pub catalogs_ok: u32,
    pub readiness: ReadinessProbe,
    /// Enabled flag per API; readiness per API is in [`ReadinessProbe::apis`].
    #[serde(default)]
    pub apis: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadinessProbe {
    pub state: String,
    #[serde(default)]
    pub apis: BTreeMap<String, bool>,
}
