//! Entities and query results as the lab sees them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ConversionError, EntityType, PrimaryKey, ResourceKind, SchemaType};

/// Reference to an entity collection, tagged with the schema node kind it
/// resolves to in the schema viewer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeRef {
    pub name: EntityType,
    pub schema_type: SchemaType,
}

impl EntityTypeRef {
    /// Reference to the entity collection `name`.
    pub fn entity(name: EntityType) -> Self {
        Self {
            name,
            schema_type: SchemaType::Entity,
        }
    }
}

/// A single entity flattened for tabular display.
///
/// Localized attributes are already resolved for [`FlatEntity::locale`];
/// attribute values keep their JSON representation because the grid renders
/// them generically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatEntity {
    pub primary_key: PrimaryKey,
    pub entity_type: EntityTypeRef,
    pub locale: Option<String>,
    pub attributes: BTreeMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------

/// One page of entities plus the server-side total, irrespective of paging.
///
/// Invariant: `entities().len() <= total_entities_count()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    entities: Vec<FlatEntity>,
    total_entities_count: u64,
}

impl QueryResult {
    /// Creates a query result, rejecting a page larger than the reported total.
    pub fn new(entities: Vec<FlatEntity>, total_entities_count: u64) -> Result<Self, ConversionError> {
        let returned = entities.len() as u64;
        if returned > total_entities_count {
            return Err(ConversionError::integrity(
                ResourceKind::QueryResult,
                format!(
                    "page holds {returned} entities but the total count is {total_entities_count}"
                ),
            ));
        }
        Ok(Self {
            entities,
            total_entities_count,
        })
    }

    /// An empty result.
    pub fn empty() -> Self {
        Self {
            entities: Vec::new(),
            total_entities_count: 0,
        }
    }

    pub fn entities(&self) -> &[FlatEntity] {
        &self.entities
    }

    pub fn total_entities_count(&self) -> u64 {
        self.total_entities_count
    }

    /// Returns `true` if the server holds more entities than this page.
    pub fn is_partial(&self) -> bool {
        (self.entities.len() as u64) < self.total_entities_count
    }
}
