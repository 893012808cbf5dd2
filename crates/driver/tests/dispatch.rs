//! Per-connection driver selection and raw payload dispatch.

mod common;

use std::sync::Arc;
use std::thread;

use lab_driver::{source_api, ConnectionDriver, DriverRegistry, ServerVersion};
use lab_model::{
    ApiType, ConnectionName, ConnectionRegistry, ConversionError, LabError, NotificationData,
    NotificationSeverity, PrimaryKey, Readiness, ResourceKind, SchemaType,
};
use serde_json::json;

fn registry() -> ConnectionRegistry {
    let mut connections = ConnectionRegistry::new();
    connections.add(common::connection("old")).unwrap();
    connections.add(common::connection("new")).unwrap();
    connections
}

fn name(raw: &str) -> ConnectionName {
    ConnectionName::new(raw).unwrap()
}

#[test]
fn connections_of_different_vintages_coexist() {
    common::init_tracing();
    let connections = registry();
    let mut drivers = DriverRegistry::new();

    drivers.connect(&connections, &name("old"), "2024.8.3").unwrap();
    drivers.connect(&connections, &name("new"), "2025.1.0").unwrap();

    let old = drivers.get(&name("old")).unwrap();
    let new = drivers.get(&name("new")).unwrap();
    assert_eq!(old.version(), ServerVersion::V2024_8);
    assert_eq!(new.version(), ServerVersion::V2025_1);

    let from_old = old.entity(ApiType::Rest, &json!({ "primaryKey": 42, "type": "Product" })).unwrap();
    let from_new = new.entity(ApiType::Rest, &common::entity_2025_1()).unwrap();
    assert_eq!(from_old.primary_key, from_new.primary_key);
    assert_eq!(from_old.entity_type, from_new.entity_type);
}

#[test]
fn documented_2024_8_entity_example() {
    let driver = ConnectionDriver::resolve(common::connection("demo"), "2024.8.0").unwrap();
    let payload = json!({ "primaryKey": 42, "type": "Product" });

    let first = driver.entity(ApiType::Rest, &payload).unwrap();
    let second = driver.entity(ApiType::Rest, &payload).unwrap();

    assert_eq!(first.primary_key, PrimaryKey::new(42));
    assert_eq!(first.entity_type.schema_type, SchemaType::Entity);
    assert_eq!(first, second);
}

#[test]
fn reconnect_re_resolves_the_driver() {
    let connections = registry();
    let mut drivers = DriverRegistry::new();

    drivers.connect(&connections, &name("old"), "2024.8.3").unwrap();
    let upgraded = drivers.connect(&connections, &name("old"), "2025.1.2").unwrap();
    assert_eq!(upgraded.version(), ServerVersion::V2025_1);
    assert_eq!(drivers.len(), 1);

    assert!(drivers.disconnect(&name("old")).is_some());
    assert!(drivers.is_empty());
    assert!(drivers.disconnect(&name("old")).is_none());
}

#[test]
fn connect_fails_for_unknown_connection_or_old_server() {
    let connections = registry();
    let mut drivers = DriverRegistry::new();

    assert!(matches!(
        drivers.connect(&connections, &name("missing"), "2024.8.3"),
        Err(LabError::ConnectionNotFound { .. })
    ));

    let err = drivers.connect(&connections, &name("old"), "2023.2.0").unwrap_err();
    assert!(matches!(
        err,
        LabError::Conversion(ConversionError::UnsupportedServerVersion { .. })
    ));
    assert!(drivers.is_empty());

    let notification = NotificationData::from(&err);
    assert_eq!(notification.severity, NotificationSeverity::Error);
    assert!(notification.message.contains("2023.2.0"));
}

#[test]
fn payload_from_the_wrong_api_is_rejected() {
    let driver = ConnectionDriver::resolve(common::connection("demo"), "2024.8.3").unwrap();

    assert_eq!(source_api(ResourceKind::ServerStatus), ApiType::System);
    assert_eq!(source_api(ResourceKind::Entity), ApiType::Rest);

    let err = driver
        .server_status(ApiType::GraphQL, &common::server_status_2024_8("READY"))
        .unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedApi { api: ApiType::GraphQL }));
}

#[test]
fn payload_of_the_wrong_shape_is_a_deserialization_error() {
    let driver = ConnectionDriver::resolve(common::connection("demo"), "2025.1.0").unwrap();

    // 2024.8 task payload sent to a 2025.1 connection
    let err = driver.task_status(ApiType::System, &common::task_2024_8()).unwrap_err();
    assert!(matches!(
        err,
        ConversionError::Deserialization { kind: ResourceKind::TaskStatus, .. }
    ));
}

#[test]
fn every_resource_kind_dispatches() {
    let old = ConnectionDriver::resolve(common::connection("old"), "2024.8.3").unwrap();
    let new = ConnectionDriver::resolve(common::connection("new"), "2025.1.0").unwrap();

    assert_eq!(
        old.catalog_schema(ApiType::Rest, &common::catalog_schema()).unwrap(),
        new.catalog_schema(ApiType::Rest, &common::catalog_schema()).unwrap()
    );
    assert_eq!(
        old.entity_schema(ApiType::Rest, &common::entity_schema_2024_8())
            .unwrap()
            .name
            .as_str(),
        "Product"
    );
    assert_eq!(
        new.entity_schema(ApiType::Rest, &common::entity_schema_2025_1())
            .unwrap()
            .version,
        6
    );

    let query = json!({ "recordPage": { "data": [common::entity_2024_8()], "totalRecordCount": 1 } });
    assert_eq!(old.query_result(ApiType::Rest, &query).unwrap().total_entities_count(), 1);
    assert!(old.visualisers(ApiType::Rest, &query).unwrap().is_empty());

    let tasks = json!([common::task_2024_8(), common::task_2024_8()]);
    assert_eq!(old.task_statuses(ApiType::System, &tasks).unwrap().len(), 2);
    assert_eq!(
        new.task_statuses(ApiType::System, &json!([common::task_2025_1()]))
            .unwrap()
            .len(),
        1
    );

    assert_eq!(
        old.server_status(ApiType::System, &common::server_status_2024_8("ready"))
            .unwrap()
            .readiness,
        Readiness::Ready
    );
    assert_eq!(
        new.server_status(ApiType::System, &common::server_status_2025_1("SHUTDOWN"))
            .unwrap()
            .readiness,
        Readiness::Shutdown
    );
}

#[test]
fn drivers_are_shared_across_threads_without_locking() {
    let driver = Arc::new(ConnectionDriver::resolve(common::connection("demo"), "2024.8.3").unwrap());
    let expected = driver.entity(ApiType::Rest, &common::entity_2024_8()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let driver = Arc::clone(&driver);
            thread::spawn(move || driver.entity(ApiType::Rest, &common::entity_2024_8()).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
