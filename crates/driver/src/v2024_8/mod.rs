//! Driver for evitaDB 2024.8.
//!
//! | Resource | Wire type | Converter |
//! |----------|-----------|-----------|
//! | catalog schema | [`wire::CatalogSchema`] | [`CatalogSchemaConverter`] |
//! | entity schema | [`wire::EntitySchema`] | [`EntitySchemaConverter`] |
//! | entity | [`wire::Entity`] | [`EntityConverter`] |
//! | query result | [`wire::QueryResponse`] | [`QueryResultConverter`], [`VisualiserConverter`] |
//! | task status | [`wire::TaskStatus`] | [`TaskStatusConverter`] |
//! | server status | [`wire::ServerStatus`] | [`ServerStatusConverter`] |

mod convert;
pub mod wire;

pub use convert::{
    CatalogSchemaConverter, EntityConverter, EntitySchemaConverter, QueryResultConverter,
    ServerStatusConverter, TaskStatusConverter, VisualiserConverter,
};
