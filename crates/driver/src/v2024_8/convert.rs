//! Converters from evitaDB 2024.8 payloads to the lab's model.

use lab_model::{
    AssociatedDataSchema, AttributeSchema, CatalogSchema, ConversionError, Converter,
    EntitySchema, EntityTypeRef, FlatEntity, QueryResult, Readiness, ReferenceSchema, ResourceKind,
    ServerStatus, TaskState, TaskStatus, TaskId, VisualiserType, VisualiserTypeType,
};
use tracing::warn;

use super::wire;
use crate::support;

#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogSchemaConverter;

impl Converter<wire::CatalogSchema, CatalogSchema> for CatalogSchemaConverter {
    fn convert(&self, payload: &wire::CatalogSchema) -> Result<CatalogSchema, ConversionError> {
        let kind = ResourceKind::CatalogSchema;
        let entity_types = payload
            .entity_schemas
            .keys()
            .map(|name| support::entity_type(kind, name))
            .collect::<Result<_, _>>()?;

        Ok(CatalogSchema {
            name: support::catalog_name(kind, &payload.name)?,
            version: payload.version,
            description: payload.description.clone(),
            entity_types,
        })
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct EntitySchemaConverter;

impl Converter<wire::EntitySchema, EntitySchema> for EntitySchemaConverter {
    fn convert(&self, payload: &wire::EntitySchema) -> Result<EntitySchema, ConversionError> {
        let kind = ResourceKind::EntitySchema;

        let attributes = payload
            .attributes
            .iter()
            .map(|(key, attribute)| -> Result<_, ConversionError> {
                Ok(AttributeSchema {
                    name: support::check_keyed_name(kind, key, attribute.name.as_deref())?,
                    description: attribute.description.clone(),
                    value_type: attribute.value_type.clone(),
                    nullable: attribute.nullable,
                    unique: support::is_unique(&attribute.uniqueness_type),
                    filterable: attribute.filterable,
                    sortable: attribute.sortable,
                    localized: attribute.localized,
                })
            })
            .collect::<Result<_, _>>()?;

        let associated_data = payload
            .associated_data
            .iter()
            .map(|(key, data)| -> Result<_, ConversionError> {
                Ok(AssociatedDataSchema {
                    name: support::check_keyed_name(kind, key, data.name.as_deref())?,
                    description: data.description.clone(),
                    value_type: data.value_type.clone(),
                    nullable: data.nullable,
                    localized: data.localized,
                })
            })
            .collect::<Result<_, _>>()?;

        let references = payload
            .references
            .iter()
            .map(|(key, reference)| -> Result<_, ConversionError> {
                Ok(ReferenceSchema {
                    name: support::check_keyed_name(kind, key, reference.name.as_deref())?,
                    description: reference.description.clone(),
                    referenced_entity_type: support::entity_type(
                        kind,
                        &reference.referenced_entity_type,
                    )?,
                    referenced_entity_managed: reference.referenced_entity_type_managed,
                    cardinality: support::cardinality(&reference.cardinality),
                    faceted: reference.faceted,
                })
            })
            .collect::<Result<_, _>>()?;

        let mut locales = payload.locales.clone();
        locales.sort();
        locales.dedup();

        Ok(EntitySchema {
            name: support::entity_type(kind, &payload.name)?,
            version: payload.version,
            description: payload.description.clone(),
            with_generated_primary_key: payload.with_generated_primary_key,
            locales,
            attributes,
            associated_data,
            references,
        })
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct EntityConverter;

impl Converter<wire::Entity, FlatEntity> for EntityConverter {
    fn convert(&self, payload: &wire::Entity) -> Result<FlatEntity, ConversionError> {
        let kind = ResourceKind::Entity;
        Ok(FlatEntity {
            primary_key: support::primary_key(kind, payload.primary_key)?,
            entity_type: EntityTypeRef::entity(support::entity_type(kind, &payload.entity_type)?),
            locale: payload.locale.clone(),
            attributes: support::flatten_attributes(
                kind,
                &payload.attributes.global,
                &payload.attributes.localized,
                payload.locale.as_deref(),
            )?,
        })
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryResultConverter;

impl Converter<wire::QueryResponse, QueryResult> for QueryResultConverter {
    fn convert(&self, payload: &wire::QueryResponse) -> Result<QueryResult, ConversionError> {
        let chunk = match (&payload.record_page, &payload.record_strip) {
            (Some(page), None) => page,
            (None, Some(strip)) => strip,
            (Some(_), Some(_)) => {
                return Err(ConversionError::integrity(
                    ResourceKind::QueryResult,
                    "response carries both a record page and a record strip",
                ))
            }
            (None, None) => {
                return Err(ConversionError::integrity(
                    ResourceKind::QueryResult,
                    "response carries neither a record page nor a record strip",
                ))
            }
        };
        let entities = EntityConverter.convert_all(&chunk.data)?;
        QueryResult::new(entities, chunk.total_record_count)
    }
}

/// Lists the visualisers applicable to a query response's extra results.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualiserConverter;

impl Converter<wire::QueryResponse, Vec<VisualiserType>> for VisualiserConverter {
    fn convert(&self, payload: &wire::QueryResponse) -> Result<Vec<VisualiserType>, ConversionError> {
        Ok(payload
            .extra_results
            .keys()
            .filter_map(|key| match key.as_str() {
                "facetSummary" => Some(VisualiserType::new("Facet summary", VisualiserTypeType::FacetSummary)),
                "hierarchy" => Some(VisualiserType::new("Hierarchy", VisualiserTypeType::Hierarchy)),
                "attributeHistogram" => Some(VisualiserType::new(
                    "Attribute histograms",
                    VisualiserTypeType::AttributeHistograms,
                )),
                "priceHistogram" => Some(VisualiserType::new(
                    "Price histogram",
                    VisualiserTypeType::PriceHistogram,
                )),
                other => {
                    warn!(extra_result = other, "No visualiser for extra result");
                    None
                }
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct TaskStatusConverter;

impl Converter<wire::TaskStatus, TaskStatus> for TaskStatusConverter {
    fn convert(&self, payload: &wire::TaskStatus) -> Result<TaskStatus, ConversionError> {
        let kind = ResourceKind::TaskStatus;
        let state = TaskState::from_wire(&payload.state);
        if state == TaskState::Unknown {
            warn!(task_id = %payload.task_id, state = %payload.state, "Unknown task state");
        }

        Ok(TaskStatus {
            task_id: TaskId::from_uuid(payload.task_id),
            task_type: payload.task_type.clone(),
            task_name: payload.task_name.clone(),
            catalog_name: payload
                .catalog_name
                .as_deref()
                .map(|name| support::catalog_name(kind, name))
                .transpose()?,
            created: support::timestamp(kind, "created", &payload.created)?,
            started: support::optional_timestamp(kind, "started", payload.started.as_deref())?,
            finished: support::optional_timestamp(kind, "finished", payload.finished.as_deref())?,
            state,
            progress: support::progress(kind, payload.progress)?,
            traits: support::task_traits(payload.traits.iter().map(String::as_str)),
            exception: payload.exception.clone(),
        })
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct ServerStatusConverter;

impl Converter<wire::ServerStatus, ServerStatus> for ServerStatusConverter {
    fn convert(&self, payload: &wire::ServerStatus) -> Result<ServerStatus, ConversionError> {
        let kind = ResourceKind::ServerStatus;
        let readiness = payload
            .readiness
            .as_deref()
            .map_or(Readiness::Unknown, Readiness::from_wire);
        if readiness == Readiness::Unknown {
            warn!(readiness = ?payload.readiness, "Unrecognised server readiness");
        }

        Ok(ServerStatus {
            version: payload.version.clone(),
            started_at: support::timestamp(kind, "startedAt", &payload.started_at)?,
            uptime_seconds: payload.uptime,
            instance_id: payload.instance_id.clone(),
            catalogs_ok: payload.catalogs_ok,
            catalogs_corrupted: payload.catalogs_corrupted,
            readiness,
            apis: support::api_statuses(
                payload
                    .apis
                    .iter()
                    .map(|(name, flags)| (name.as_str(), flags.enabled, flags.ready)),
            ),
        })
    }
}
