//! Mapping primitives shared by every release's converters.
//!
//! These helpers only map values whose meaning is identical across releases.
//! Anything release-specific stays in the release module.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use tracing::warn;

use lab_model::{
    ApiStatus, ApiType, Cardinality, CatalogName, ConversionError, EntityType, PrimaryKey,
    ResourceKind, TaskTrait, Timestamp,
};

pub(crate) fn entity_type(kind: ResourceKind, raw: &str) -> Result<EntityType, ConversionError> {
    EntityType::new(raw).ok_or_else(|| ConversionError::integrity(kind, "entity type is blank"))
}

pub(crate) fn catalog_name(kind: ResourceKind, raw: &str) -> Result<CatalogName, ConversionError> {
    CatalogName::new(raw).ok_or_else(|| ConversionError::integrity(kind, "catalog name is blank"))
}

pub(crate) fn primary_key(kind: ResourceKind, raw: i64) -> Result<PrimaryKey, ConversionError> {
    if raw <= 0 {
        return Err(ConversionError::integrity(
            kind,
            format!("primary key must be positive, got {raw}"),
        ));
    }
    Ok(PrimaryKey::new(raw))
}

pub(crate) fn timestamp(
    kind: ResourceKind,
    field: &str,
    raw: &str,
) -> Result<Timestamp, ConversionError> {
    Timestamp::parse_rfc3339(raw).ok_or_else(|| {
        ConversionError::integrity(kind, format!("'{field}' is not an RFC 3339 date-time: {raw}"))
    })
}

pub(crate) fn optional_timestamp(
    kind: ResourceKind,
    field: &str,
    raw: Option<&str>,
) -> Result<Option<Timestamp>, ConversionError> {
    raw.map(|raw| timestamp(kind, field, raw)).transpose()
}

/// Negative progress means "not reported"; anything above 100 is malformed.
pub(crate) fn progress(kind: ResourceKind, raw: i64) -> Result<Option<u8>, ConversionError> {
    match u8::try_from(raw) {
        Ok(percent) if percent <= 100 => Ok(Some(percent)),
        _ if raw < 0 => Ok(None),
        _ => Err(ConversionError::integrity(
            kind,
            format!("task progress {raw} is outside 0..=100"),
        )),
    }
}

/// Attribute uniqueness tags that make an attribute unique. Anything else,
/// including unrecognised tags, reads as not unique.
const UNIQUE_TAGS: [&str; 4] = [
    "UNIQUE_WITHIN_COLLECTION",
    "UNIQUE_WITHIN_COLLECTION_LOCALE",
    "UNIQUE_WITHIN_CATALOG",
    "UNIQUE_WITHIN_CATALOG_LOCALE",
];

pub(crate) fn is_unique(uniqueness_type: &str) -> bool {
    if UNIQUE_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(uniqueness_type)) {
        return true;
    }
    if !uniqueness_type.eq_ignore_ascii_case("NOT_UNIQUE") {
        warn!(uniqueness_type, "Unknown uniqueness type, treating attribute as not unique");
    }
    false
}

pub(crate) fn cardinality(raw: &str) -> Cardinality {
    Cardinality::parse_wire(raw).unwrap_or_else(|| {
        warn!(cardinality = raw, "Unknown reference cardinality");
        Cardinality::ZeroOrMore
    })
}

/// Unknown traits are dropped: an unrecognised trait must never unlock an action.
pub(crate) fn task_traits<'a>(raw: impl IntoIterator<Item = &'a str>) -> BTreeSet<TaskTrait> {
    raw.into_iter()
        .filter_map(|value| {
            let mapped = TaskTrait::from_wire(value);
            if mapped.is_none() {
                warn!(task_trait = value, "Dropping unknown task trait");
            }
            mapped
        })
        .collect()
}

/// Maps per-API flags keyed by wire name, ordered by [`ApiType`]. Unknown APIs
/// are dropped.
pub(crate) fn api_statuses<'a>(
    raw: impl IntoIterator<Item = (&'a str, bool, Option<bool>)>,
) -> Vec<ApiStatus> {
    let mut apis = BTreeMap::new();
    for (name, enabled, ready) in raw {
        match ApiType::from_wire(name) {
            Some(api_type) => {
                apis.insert(
                    api_type,
                    ApiStatus {
                        api_type,
                        enabled,
                        ready,
                    },
                );
            }
            None => warn!(api = name, "Dropping unknown API"),
        }
    }
    apis.into_values().collect()
}

/// Re-keys per-API flags by [`ApiType`] so lookups match `api_statuses`
/// regardless of the wire name's casing. Unknown APIs are dropped.
pub(crate) fn flags_by_api(raw: &BTreeMap<String, bool>) -> BTreeMap<ApiType, bool> {
    raw.iter()
        .filter_map(|(name, flag)| ApiType::from_wire(name).map(|api| (api, *flag)))
        .collect()
}

/// Merges global attributes with the attributes localized to `locale`.
///
/// An attribute cannot be both global and localized; a clash is a schema
/// violation.
pub(crate) fn flatten_attributes(
    kind: ResourceKind,
    global: &BTreeMap<String, Value>,
    localized: &BTreeMap<String, BTreeMap<String, Value>>,
    locale: Option<&str>,
) -> Result<BTreeMap<String, Value>, ConversionError> {
    let mut attributes = global.clone();
    let Some(locale) = locale else {
        return Ok(attributes);
    };
    for (name, value) in localized.get(locale).into_iter().flatten() {
        if attributes.insert(name.clone(), value.clone()).is_some() {
            return Err(ConversionError::integrity(
                kind,
                format!("attribute '{name}' is both global and localized"),
            ));
        }
    }
    Ok(attributes)
}

/// Schema nodes are keyed by name on the wire; the key must match the node's
/// own name.
pub(crate) fn check_keyed_name(
    kind: ResourceKind,
    key: &str,
    name: Option<&str>,
) -> Result<String, ConversionError> {
    match name {
        Some(name) if name != key => Err(ConversionError::integrity(
            kind,
            format!("schema node keyed '{key}' is named '{name}'"),
        )),
        _ if key.trim().is_empty() => {
            Err(ConversionError::integrity(kind, "schema node name is blank"))
        }
        _ => Ok(key.to_string()),
    }
}
