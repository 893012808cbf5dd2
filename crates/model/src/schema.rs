//! Schema tree nodes rendered by the schema viewer.
//!
//! Each node reports its [`SchemaType`] so the viewer can pick the matching
//! renderer without inspecting the concrete type.

use serde::{Deserialize, Serialize};

use crate::{Cardinality, CatalogName, EntityType, SchemaType};

/// Root of a catalog's schema tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSchema {
    pub name: CatalogName,
    pub version: u32,
    pub description: Option<String>,
    /// Entity collections in the catalog, sorted by name.
    pub entity_types: Vec<EntityType>,
}

impl CatalogSchema {
    pub fn schema_type(&self) -> SchemaType {
        SchemaType::Catalog
    }
}

/// Schema of one entity collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySchema {
    pub name: EntityType,
    pub version: u32,
    pub description: Option<String>,
    pub with_generated_primary_key: bool,
    /// Locales the collection accepts, sorted.
    pub locales: Vec<String>,
    pub attributes: Vec<AttributeSchema>,
    pub associated_data: Vec<AssociatedDataSchema>,
    pub references: Vec<ReferenceSchema>,
}

impl EntitySchema {
    pub fn schema_type(&self) -> SchemaType {
        SchemaType::Entity
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn reference(&self, name: &str) -> Option<&ReferenceSchema> {
        self.references.iter().find(|r| r.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSchema {
    pub name: String,
    pub description: Option<String>,
    /// Server-side value type name (e.g. `String`, `BigDecimal`).
    pub value_type: String,
    pub nullable: bool,
    pub unique: bool,
    pub filterable: bool,
    pub sortable: bool,
    pub localized: bool,
}

impl AttributeSchema {
    pub fn schema_type(&self) -> SchemaType {
        SchemaType::Attribute
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedDataSchema {
    pub name: String,
    pub description: Option<String>,
    pub value_type: String,
    pub nullable: bool,
    pub localized: bool,
}

impl AssociatedDataSchema {
    pub fn schema_type(&self) -> SchemaType {
        SchemaType::AssociatedData
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSchema {
    pub name: String,
    pub description: Option<String>,
    pub referenced_entity_type: EntityType,
    /// `true` when the referenced collection is managed by evitaDB.
    pub referenced_entity_managed: bool,
    pub cardinality: Cardinality,
    pub faceted: bool,
}

impl ReferenceSchema {
    pub fn schema_type(&self) -> SchemaType {
        SchemaType::Reference
    }
}
