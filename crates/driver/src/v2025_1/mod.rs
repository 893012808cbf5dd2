//! Driver for evitaDB 2025.1 and newer.
//!
//! The catalog schema shape did not change in 2025.1; its converter is the
//! 2024.8 one. Every other resource has its own wire type and converter.

mod convert;
pub mod wire;

pub use crate::v2024_8::CatalogSchemaConverter;
pub use convert::{
    EntityConverter, EntitySchemaConverter, QueryResultConverter, ServerStatusConverter,
    TaskStatusConverter, VisualiserConverter,
};
