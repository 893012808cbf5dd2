//! Domain model of evitaLab, the evitaDB administration console.
//!
//! This crate contains every enumeration, identifier, internal model shape and
//! cross-cutting error type the lab works with, together with the classifier
//! validator and the [`Converter`] contract that versioned drivers implement.
//! Drivers translate release-specific server payloads into these types; UI and
//! state layers only ever see these types.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! Everything here is synchronous and free of shared mutable state.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`enums`] | Closed vocabularies (`ApiType`, `Readiness`, `TaskTrait`, `SchemaType`, ...) |
//! | [`identifiers`] | Newtype identifiers (`ConnectionName`, `EntityType`, `TaskId`, ...) |
//! | [`classifier`] | Classifier (schema node name) validation |
//! | [`connection`] | `Connection` values and the `ConnectionRegistry` |
//! | [`config`] | Lab configuration document |
//! | [`entity`] | `FlatEntity`, `QueryResult` |
//! | [`schema`] | Schema tree nodes |
//! | [`task`] | Background task status |
//! | [`status`] | Server status and readiness |
//! | [`console`] | Property selection, visualisers, tab parameters |
//! | [`notification`] | User-facing notifications |
//! | [`converter`] | The versioned `Converter` contract |
//! | [`errors`] | Conversion and lab errors |

pub mod classifier;
pub mod config;
pub mod connection;
pub mod console;
pub mod converter;
pub mod entity;
pub mod enums;
pub mod errors;
pub mod identifiers;
pub mod notification;
pub mod schema;
pub mod status;
pub mod task;
pub mod time;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use classifier::{is_reserved_keyword, validate_classifier, MAX_CLASSIFIER_LENGTH};
pub use config::LabConfig;
pub use connection::{Connection, ConnectionRegistry};
pub use console::{
    ConsoleTabParams, EntityPropertyKey, EntityPropertySelection, JobTabParams, TaskViewerParams,
    VisualiserType,
};
pub use converter::Converter;
pub use entity::{EntityTypeRef, FlatEntity, QueryResult};
pub use enums::{
    ApiType, Cardinality, ClassifierValidationErrorType, EntityPropertyType, NotificationSeverity,
    QueryLanguage, Readiness, ResourceKind, SchemaType, TaskState, TaskTrait, VisualiserTypeType,
};
pub use errors::{ConversionError, LabError, LabResult};
pub use identifiers::{CatalogName, ConnectionName, EntityType, PrimaryKey, TaskId};
pub use notification::NotificationData;
pub use schema::{AssociatedDataSchema, AttributeSchema, CatalogSchema, EntitySchema, ReferenceSchema};
pub use status::{ApiStatus, ServerStatus};
pub use task::TaskStatus;
pub use time::Timestamp;
