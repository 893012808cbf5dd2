//! Payload shapes of evitaDB 2024.8 (REST and system APIs).

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Schema (REST `GET /rest/{catalog}/schema`, `GET /rest/{catalog}/{entity}/schema`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSchema {
    pub name: String,
    pub version: u32,
    #[serde(default)]
    pub description: Option<String>,
    /// Full entity schemas keyed by entity type; only the keys are used.
    #[serde(default)]
    pub entity_schemas: BTreeMap<String, IgnoredAny>,
}

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
    /// `NOT_UNIQUE`, `UNIQUE_WITHIN_COLLECTION` or `UNIQUE_WITHIN_COLLECTION_LOCALE`.
    #[serde(default = "not_unique")]
    pub uniqueness_type: String,
    #[serde(default)]
    pub filterable: bool,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub localized: bool,
}

fn not_unique() -> String {
    "NOT_UNIQUE".to_string()
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
    pub faceted: bool,
}

// ---------------------------------------------------------------------------
// Entities and queries (REST `POST /rest/{catalog}/{entity}/query`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub primary_key: i64,
    #[serde(rename = "type")]
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
    /// Localized attributes keyed by locale tag.
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
    /// Extra results keyed by requirement name (`facetSummary`, `hierarchy`, ...).
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
// System API (`GET /system/status`, task listing)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    pub task_id: uuid::Uuid,
    pub task_type: String,
    pub task_name: String,
    #[serde(default)]
    pub catalog_name: Option<String>,
    pub created: String,
    #[serde(default)]
    pub started: Option<String>,
    #[serde(default)]
    pub finished: Option<String>,
    pub state: String,
    #[serde(default = "no_progress")]
    pub progress: i64,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub exception: Option<String>,
}

fn no_progress() -> i64 {
    -1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub version: String,
    pub started_at: String,
    /// Uptime in seconds.
    pub uptime: u64,
    pub instance_id: String,
    #[serde(default)]
    pub catalogs_corrupted: u32,
    #[serde(default)]
    pub catalogs_ok: u32,
    /// `STARTING`, `READY`, `STALLING` or `SHUTDOWN`; absent on early 2024.8 builds.
    #[serde(default)]
    pub readiness: Option<String>,
    #[serde(default)]
    pub apis: BTreeMap<String, ApiFlags>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiFlags {
    pub enabled: bool,
    #[serde(default)]
    pub ready: Option<bool>,
}
