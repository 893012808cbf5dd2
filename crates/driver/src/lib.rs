//! evitaLab drivers for evitaDB servers.
//!
//! Implements the [`lab_model::Converter`] contract once per supported server
//! release. Supporting a new release adds a new module next to the existing
//! ones; existing modules are never edited to accommodate it, so the lab can
//! talk to servers of different vintages at the same time.
//!
//! ## Architectural Layer
//!
//! **Infrastructure adapter.** Wire payload shapes and their mapping onto the
//! model live here. The [`lab_model`] crate never sees a release-specific
//! shape. No network I/O happens in this crate: payloads arrive already
//! fetched and parsed as [`serde_json::Value`].
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`version`] | `ServerVersion` resolution from the server's reported release |
//! | [`v2024_8`] | Wire types and converters for evitaDB 2024.8 |
//! | [`v2025_1`] | Wire types and converters for evitaDB 2025.1+ |
//! | [`dispatch`] | Per-connection driver selection (`ConnectionDriver`, `DriverRegistry`) |

pub mod dispatch;
mod support;
pub mod v2024_8;
pub mod v2025_1;
pub mod version;

pub use dispatch::{source_api, ConnectionDriver, DriverRegistry};
pub use version::ServerVersion;
