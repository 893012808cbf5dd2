//! Shared fixtures for driver integration tests.

#![allow(dead_code)]

use lab_model::{Connection, ConnectionName};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

/// Routes driver log output through the test harness (`RUST_LOG` respected).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn connection(name: &str) -> Connection {
    Connection::new(
        ConnectionName::new(name).unwrap(),
        format!("https://{name}.evitadb.io:5555/rest"),
        Some(format!("https://{name}.evitadb.io:5555/gql")),
    )
    .unwrap()
}

pub const TASK_ID: &str = "0b9a7c0e-52a3-4c8f-9d41-3f7bbf0a1e11";

// ---------------------------------------------------------------------------
// evitaDB 2024.8
// ---------------------------------------------------------------------------

pub fn entity_2024_8() -> Value {
    json!({
        "primaryKey": 42,
        "type": "Product",
        "locale": "en",
        "attributes": {
            "global": { "code": "iphone-15", "stock": 7 },
            "localized": {
                "en": { "name": "iPhone 15" },
                "cs": { "name": "iPhone 15 CZ" }
            }
        }
    })
}

pub fn entity_schema_2024_8() -> Value {
    json!({
        "name": "Product",
        "version": 5,
        "description": "Sellable products",
        "withGeneratedPrimaryKey": true,
        "locales": ["en", "cs", "en"],
        "attributes": {
            "code": {
                "name": "code",
                "type": "String",
                "nullable": false,
                "uniquenessType": "UNIQUE_WITHIN_COLLECTION",
                "filterable": true,
                "sortable": true,
                "localized": false
            },
            "name": {
                "name": "name",
                "type": "String",
                "nullable": true,
                "uniquenessType": "NOT_UNIQUE",
                "filterable": true,
                "localized": true
            }
        },
        "associatedData": {
            "gallery": { "name": "gallery", "type": "ComplexDataObject", "nullable": true }
        },
        "references": {
            "brand": {
                "name": "brand",
                "referencedEntityType": "Brand",
                "referencedEntityTypeManaged": true,
                "cardinality": "ZERO_OR_ONE",
                "faceted": true
            }
        }
    })
}

pub fn catalog_schema() -> Value {
    json!({
        "name": "evita",
        "version": 12,
        "description": null,
        "entitySchemas": {
            "Product": { "name": "Product", "version": 5 },
            "Brand": { "name": "Brand", "version": 2 }
        }
    })
}

pub fn task_2024_8() -> Value {
    json!({
        "taskId": TASK_ID,
        "taskType": "BackupTask",
        "taskName": "Backup catalog evita",
        "catalogName": "evita",
        "created": "2024-08-12T10:00:00+02:00",
        "started": "2024-08-12T10:00:01+02:00",
        "finished": null,
        "state": "RUNNING",
        "progress": 40,
        "traits": ["CAN_BE_CANCELLED"]
    })
}

pub fn server_status_2024_8(readiness: &str) -> Value {
    json!({
        "serverName": "evitaDB-demo",
        "version": "2024.8.3",
        "startedAt": "2024-08-12T08:00:00Z",
        "uptime": 7200,
        "instanceId": "demo-1",
        "catalogsCorrupted": 0,
        "catalogsOk": 3,
        "readiness": readiness,
        "apis": {
            "system": { "enabled": true, "ready": true },
            "rest": { "enabled": true, "ready": true },
            "gRPC": { "enabled": true, "ready": false },
            "soap": { "enabled": true }
        }
    })
}

// ---------------------------------------------------------------------------
// evitaDB 2025.1
// ---------------------------------------------------------------------------

pub fn entity_2025_1() -> Value {
    json!({
        "primaryKey": 42,
        "entityType": "Product",
        "attributes": { "global": { "code": "iphone-15" } }
    })
}

pub fn entity_schema_2025_1() -> Value {
    json!({
        "name": "Product",
        "version": 6,
        "attributes": {
            "code": {
                "name": "code",
                "type": "String",
                "uniqueInScopes": [
                    { "scope": "LIVE", "uniquenessType": "UNIQUE_WITHIN_COLLECTION" },
                    { "scope": "ARCHIVED", "uniquenessType": "NOT_UNIQUE" }
                ],
                "filterableInScopes": ["LIVE", "ARCHIVED"],
                "sortableInScopes": ["ARCHIVED"]
            }
        },
        "references": {
            "brand": {
                "name": "brand",
                "referencedEntityType": "Brand",
                "cardinality": "EXACTLY_ONE",
                "facetedInScopes": ["LIVE"]
            }
        }
    })
}

pub fn task_2025_1() -> Value {
    json!({
        "taskId": TASK_ID,
        "taskType": "BackupTask",
        "taskName": "Backup catalog evita",
        "catalogName": "evita",
        "timestamps": {
            "created": "2025-01-20T10:00:00Z",
            "started": "2025-01-20T10:00:01Z",
            "finished": "2025-01-20T10:05:00Z"
        },
        "state": "FAILED",
        "traits": { "values": ["CAN_BE_STARTED", "NEEDS_TO_BE_STOPPED"] },
        "exception": { "message": "Disk full" }
    })
}

pub fn server_status_2025_1(readiness: &str) -> Value {
    json!({
        "version": "2025.1.0",
        "startedAt": "2025-01-20T08:00:00Z",
        "uptime": 60,
        "instanceId": "demo-2",
        "catalogsOk": 1,
        "readiness": {
            "state": readiness,
            "apis": { "rest": true, "graphQL": false }
        },
        "apis": { "rest": true, "graphQL": true, "lab": false }
    })
}
