//! Closed vocabularies of the lab's internal model.
//!
//! Wire payloads are open-world: a newer server may send values these enums do
//! not know. Internal values are closed-world: every `from_wire` either maps
//! onto an existing member, falls back to a designated safe member, or returns
//! `None` so the caller can drop the value explicitly. Extending one of these
//! enums is a deliberate breaking change.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Server surface
// ---------------------------------------------------------------------------

/// Protocol surface exposed by an evitaDB server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ApiType {
    /// Management API (server status, catalogs, file downloads).
    #[serde(rename = "system")]
    System,
    /// gRPC API used by the Java and C# drivers.
    #[serde(rename = "gRPC")]
    Grpc,
    /// GraphQL API.
    #[serde(rename = "graphQL")]
    GraphQL,
    /// REST API.
    #[serde(rename = "rest")]
    Rest,
    /// Metrics, tracing and JFR recording endpoints.
    #[serde(rename = "observability")]
    Observability,
    /// Endpoint serving the lab itself.
    #[serde(rename = "lab")]
    Lab,
}

impl ApiType {
    /// Every member, in declaration order.
    pub const ALL: [ApiType; 6] = [
        ApiType::System,
        ApiType::Grpc,
        ApiType::GraphQL,
        ApiType::Rest,
        ApiType::Observability,
        ApiType::Lab,
    ];

    /// Wire tag the server uses for this API.
    pub fn as_wire(self) -> &'static str {
        match self {
            ApiType::System => "system",
            ApiType::Grpc => "gRPC",
            ApiType::GraphQL => "graphQL",
            ApiType::Rest => "rest",
            ApiType::Observability => "observability",
            ApiType::Lab => "lab",
        }
    }

    /// Maps a wire tag case-insensitively; unknown APIs yield `None`.
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|api| api.as_wire().eq_ignore_ascii_case(raw))
    }
}

impl std::fmt::Display for ApiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

// ---------------------------------------------------------------------------

/// Server lifecycle state as reported by the readiness probe.
///
/// No order is implied between members. The state is authoritative from the
/// server and never computed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    Starting,
    Ready,
    Stalling,
    Shutdown,
    /// Fallback for any value the lab does not recognise.
    Unknown,
}

impl Readiness {
    /// Maps a raw probe value. Anything outside
    /// `starting | ready | stalling | shutdown` (any casing) is `Unknown`,
    /// never `Ready`.
    pub fn from_wire(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("starting") {
            Readiness::Starting
        } else if raw.eq_ignore_ascii_case("ready") {
            Readiness::Ready
        } else if raw.eq_ignore_ascii_case("stalling") {
            Readiness::Stalling
        } else if raw.eq_ignore_ascii_case("shutdown") {
            Readiness::Shutdown
        } else {
            Readiness::Unknown
        }
    }

    /// Returns `true` only for [`Readiness::Ready`].
    pub fn is_ready(self) -> bool {
        match self {
            Readiness::Ready => true,
            Readiness::Starting | Readiness::Stalling | Readiness::Shutdown | Readiness::Unknown => {
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Background tasks
// ---------------------------------------------------------------------------

/// Capability advertised by a server-side background task.
///
/// UI affordances (start, cancel, stop) are gated strictly by trait
/// membership, never inferred from the task type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskTrait {
    CanBeStarted,
    CanBeCancelled,
    NeedsToBeStopped,
}

impl TaskTrait {
    /// Maps a wire tag (e.g. `CAN_BE_CANCELLED`, any casing). Unknown traits
    /// yield `None`; callers drop them so no affordance is granted.
    pub fn from_wire(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("CAN_BE_STARTED") {
            Some(TaskTrait::CanBeStarted)
        } else if raw.eq_ignore_ascii_case("CAN_BE_CANCELLED") {
            Some(TaskTrait::CanBeCancelled)
        } else if raw.eq_ignore_ascii_case("NEEDS_TO_BE_STOPPED") {
            Some(TaskTrait::NeedsToBeStopped)
        } else {
            None
        }
    }
}

/// Execution state of a server-side background task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Queued,
    Running,
    Finished,
    Failed,
    /// Fallback for any value the lab does not recognise.
    Unknown,
}

impl TaskState {
    /// Maps a wire tag (e.g. `RUNNING`, any casing); unknown values are `Unknown`.
    pub fn from_wire(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("QUEUED") {
            TaskState::Queued
        } else if raw.eq_ignore_ascii_case("RUNNING") {
            TaskState::Running
        } else if raw.eq_ignore_ascii_case("FINISHED") {
            TaskState::Finished
        } else if raw.eq_ignore_ascii_case("FAILED") {
            TaskState::Failed
        } else {
            TaskState::Unknown
        }
    }

    /// Returns `true` once the task can no longer change state.
    pub fn is_terminal(self) -> bool {
        match self {
            TaskState::Finished | TaskState::Failed => true,
            TaskState::Queued | TaskState::Running | TaskState::Unknown => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Kind of node in the database's schema tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaType {
    Catalog,
    Entity,
    Attribute,
    AssociatedData,
    Reference,
}

impl SchemaType {
    /// Every member, in declaration order.
    pub const ALL: [SchemaType; 5] = [
        SchemaType::Catalog,
        SchemaType::Entity,
        SchemaType::Attribute,
        SchemaType::AssociatedData,
        SchemaType::Reference,
    ];
}

/// Reason a proposed classifier (catalog, entity, attribute... name) is rejected.
///
/// Exactly one applies per validation; see [`crate::validate_classifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassifierValidationErrorType {
    Empty,
    LeadingTrailingWhiteSpace,
    Keyword,
    Format,
}

impl ClassifierValidationErrorType {
    /// Stable key the validation UI uses to look up the localised message.
    pub fn message_key(self) -> &'static str {
        match self {
            ClassifierValidationErrorType::Empty => "classifier.validation.empty",
            ClassifierValidationErrorType::LeadingTrailingWhiteSpace => {
                "classifier.validation.leadingTrailingWhiteSpace"
            }
            ClassifierValidationErrorType::Keyword => "classifier.validation.keyword",
            ClassifierValidationErrorType::Format => "classifier.validation.format",
        }
    }
}

/// Cardinality of a reference schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cardinality {
    ZeroOrOne,
    ExactlyOne,
    ZeroOrMore,
    OneOrMore,
}

impl Cardinality {
    /// Maps a wire tag; unknown values fall back to the least restrictive
    /// [`Cardinality::ZeroOrMore`].
    pub fn from_wire(raw: &str) -> Self {
        Self::parse_wire(raw).unwrap_or(Cardinality::ZeroOrMore)
    }

    /// Maps a wire tag (any casing); unknown values yield `None`.
    pub fn parse_wire(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("ZERO_OR_ONE") {
            Some(Cardinality::ZeroOrOne)
        } else if raw.eq_ignore_ascii_case("EXACTLY_ONE") {
            Some(Cardinality::ExactlyOne)
        } else if raw.eq_ignore_ascii_case("ZERO_OR_MORE") {
            Some(Cardinality::ZeroOrMore)
        } else if raw.eq_ignore_ascii_case("ONE_OR_MORE") {
            Some(Cardinality::OneOrMore)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// Query grammar a console tab edits against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryLanguage {
    #[serde(rename = "evitaql")]
    EvitaQL,
    #[serde(rename = "graphql")]
    GraphQL,
}

/// Renderable shape of a query's faceted or statistical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualiserTypeType {
    FacetSummary,
    Hierarchy,
    AttributeHistograms,
    PriceHistogram,
}

/// Kind of entity property a user can pick for display in the entity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityPropertyType {
    Entity,
    Attributes,
    AssociatedData,
    Prices,
    References,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationSeverity {
    Info,
    Success,
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Driver dispatch
// ---------------------------------------------------------------------------

/// Resource kind a converter produces; half of the (version, kind) dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    CatalogSchema,
    EntitySchema,
    Entity,
    QueryResult,
    TaskStatus,
    ServerStatus,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::CatalogSchema => "catalog schema",
            ResourceKind::EntitySchema => "entity schema",
            ResourceKind::Entity => "entity",
            ResourceKind::QueryResult => "query result",
            ResourceKind::TaskStatus => "task status",
            ResourceKind::ServerStatus => "server status",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_maps_known_values_in_any_casing() {
        assert_eq!(Readiness::from_wire("READY"), Readiness::Ready);
        assert_eq!(Readiness::from_wire("starting"), Readiness::Starting);
        assert_eq!(Readiness::from_wire("Stalling"), Readiness::Stalling);
        assert_eq!(Readiness::from_wire("SHUTDOWN"), Readiness::Shutdown);
    }

    #[test]
    fn readiness_falls_back_to_unknown_never_ready() {
        for raw in [
            "", "healthy", "UP", "ready!", "readyy", "degraded", " ready", "ready\n", "\tREADY ",
        ] {
            let readiness = Readiness::from_wire(raw);
            assert_eq!(readiness, Readiness::Unknown, "raw value {raw:?}");
            assert!(!readiness.is_ready());
        }
    }

    #[test]
    fn api_type_round_trips_wire_tags() {
        for api in ApiType::ALL {
            assert_eq!(ApiType::from_wire(api.as_wire()), Some(api));
            let json = serde_json::to_string(&api).unwrap();
            assert_eq!(json, format!("\"{}\"", api.as_wire()));
        }
        assert_eq!(ApiType::from_wire("GRPC"), Some(ApiType::Grpc));
        assert_eq!(ApiType::from_wire("soap"), None);
        assert_eq!(ApiType::from_wire(" rest"), None);
    }

    #[test]
    fn task_trait_rejects_unknown_values() {
        assert_eq!(
            TaskTrait::from_wire("can_be_cancelled"),
            Some(TaskTrait::CanBeCancelled)
        );
        assert_eq!(TaskTrait::from_wire("CAN_BE_PAUSED"), None);
        assert_eq!(TaskTrait::from_wire(" CAN_BE_CANCELLED"), None);
        assert_eq!(TaskTrait::from_wire("CAN_BE_STARTED\n"), None);
    }

    #[test]
    fn task_state_terminal_states() {
        assert!(TaskState::from_wire("FINISHED").is_terminal());
        assert!(TaskState::from_wire("failed").is_terminal());
        assert!(!TaskState::from_wire("RUNNING").is_terminal());
        assert_eq!(TaskState::from_wire("PAUSED"), TaskState::Unknown);
        assert_eq!(TaskState::from_wire(" FINISHED"), TaskState::Unknown);
    }

    #[test]
    fn cardinality_falls_back_to_zero_or_more() {
        assert_eq!(Cardinality::from_wire("EXACTLY_ONE"), Cardinality::ExactlyOne);
        assert_eq!(Cardinality::from_wire("MANY_TO_MANY"), Cardinality::ZeroOrMore);
        assert_eq!(Cardinality::parse_wire("MANY_TO_MANY"), None);
        assert_eq!(Cardinality::parse_wire("zero_or_more"), Some(Cardinality::ZeroOrMore));
    }
}
