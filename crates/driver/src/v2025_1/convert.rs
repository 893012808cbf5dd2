//! Converters from evitaDB 2025.1 payloads to the lab's model.
//!
//! Per-scope schema flags are reported for the `LIVE` scope, which is the
//! scope the lab browses.

use lab_model::{
    ApiType, AssociatedDataSchema, AttributeSchema, ConversionError, Converter, EntitySchema,
    EntityTypeRef, FlatEntity, QueryResult, Readiness, ReferenceSchema, ResourceKind, ServerStatus,
    TaskId, TaskState, TaskStatus, VisualiserType, VisualiserTypeType,
};
use tracing::warn;

use super::wire;
use crate::support;

const LIVE_SCOPE: &str = "LIVE";

fn in_live_scope(scopes: &[String]) -> bool {
    scopes.iter().any(|scope| scope.eq_ignore_ascii_case(LIVE_SCOPE))
}

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
                    unique: attribute.unique_in_scopes.iter().any(|u| {
                        u.scope.eq_ignore_ascii_case(LIVE_SCOPE)
                            && support::is_unique(&u.uniqueness_type)
                    }),
                    filterable: in_live_scope(&attribute.filterable_in_scopes),
                    sortable: in_live_scope(&attribute.sortable_in_scopes),
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
                    faceted: in_live_scope(&reference.faceted_in_scopes),
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
            (Some(_), Some(_)) | (None, None) => {
                return Err(ConversionError::integrity(
                    ResourceKind::QueryResult,
                    "response must carry exactly one of record page and record strip",
                ))
            }
        };
        let entities = EntityConverter.convert_all(&chunk.data)?;
        QueryResult::new(entities, chunk.total_record_count)
    }
}

/// Lists the visualisers applicable to a query response's extra results.
///
/// 2025.1 reports histograms under `attributeHistograms` (plural).
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualiserConverter;

impl Converter<wire::QueryResponse, Vec<VisualiserType>> for VisualiserConverter {
    fn convert(&self, payload: &wire::QueryResponse) -> Result<Vec<VisualiserType>, ConversionError> {
        Ok(payload
            .extra_results
            .keys()
            .filter_map(|key| {
                let value = match key.as_str() {
                    "facetSummary" => VisualiserTypeType::FacetSummary,
                    "hierarchy" => VisualiserTypeType::Hierarchy,
                    "attributeHistograms" => VisualiserTypeType::AttributeHistograms,
                    "priceHistogram" => VisualiserTypeType::PriceHistogram,
                    other => {
                        warn!(extra_result = other, "No visualiser for extra result");
                        return None;
                    }
                };
                Some(VisualiserType::new(visualiser_title(value), value))
            })
            .collect())
    }
}

fn visualiser_title(value: VisualiserTypeType) -> &'static str {
    match value {
        VisualiserTypeType::FacetSummary => "Facet summary",
        VisualiserTypeType::Hierarchy => "Hierarchy",
        VisualiserTypeType::AttributeHistograms => "Attribute histograms",
        VisualiserTypeType::PriceHistogram => "Price histogram",
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
        let timestamps = &payload.timestamps;

        Ok(TaskStatus {
            task_id: TaskId::from_uuid(payload.task_id),
            task_type: payload.task_type.clone(),
            task_name: payload.task_name.clone(),
            catalog_name: payload
                .catalog_name
                .as_deref()
                .map(|name| support::catalog_name(kind, name))
                .transpose()?,
            created: support::timestamp(kind, "timestamps.created", &timestamps.created)?,
            started: support::optional_timestamp(
                kind,
                "timestamps.started",
                timestamps.started.as_deref(),
            )?,
            finished: support::optional_timestamp(
                kind,
                "timestamps.finished",
                timestamps.finished.as_deref(),
            )?,
            state,
            progress: match payload.progress {
                Some(raw) => support::progress(kind, raw)?,
                None => None,
            },
            traits: support::task_traits(payload.traits.values.iter().map(String::as_str)),
            exception: payload.exception.as_ref().map(|e| e.message.clone()),
        })
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct ServerStatusConverter;

impl Converter<wire::ServerStatus, ServerStatus> for ServerStatusConverter {
    fn convert(&self, payload: &wire::ServerStatus) -> Result<ServerStatus, ConversionError> {
        let kind = ResourceKind::ServerStatus;
        let readiness = Readiness::from_wire(&payload.readiness.state);
        if readiness == Readiness::Unknown {
            warn!(readiness = %payload.readiness.state, "Unrecognised server readiness");
        }

        let ready = support::flags_by_api(&payload.readiness.apis);

        Ok(ServerStatus {
            version: payload.version.clone(),
            started_at: support::timestamp(kind, "startedAt", &payload.started_at)?,
            uptime_seconds: payload.uptime,
            instance_id: payload.instance_id.clone(),
            catalogs_ok: payload.catalogs_ok,
            catalogs_corrupted: payload.catalogs_corrupted,
            readiness,
            apis: support::api_statuses(payload.apis.iter().map(|(name, enabled)| {
                (
                    name.as_str(),
                    *enabled,
                    ApiType::from_wire(name).and_then(|api| ready.get(&api).copied()),
                )
            })),
        })
    }
}
