//! Error types for the lab's model layer.
//!
//! [`ConversionError`] is raised by converters and the driver dispatch glue
//! when a server payload cannot be mapped onto the internal model.
//! [`LabError`] covers configuration and registry failures and wraps
//! conversion failures for callers that handle both.
//!
//! Classifier validation is **not** an error: a rejected identifier is the
//! normal return value of [`crate::validate_classifier`].

use thiserror::Error;

use crate::{ApiType, ConnectionName, ResourceKind};

// ---------------------------------------------------------------------------
// Conversion errors
// ---------------------------------------------------------------------------

/// A server payload could not be converted into the internal model.
///
/// These are defects in the transport or version-detection layer. They are
/// never resolved silently; callers surface them as an error notification.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The payload deserialised but violates the documented schema of its
    /// server version (missing value, broken invariant, malformed field).
    #[error("Data integrity error in {kind} payload: {reason}")]
    DataIntegrity {
        /// Resource kind being converted.
        kind: ResourceKind,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// The raw payload does not have the shape of the version's wire DTO.
    #[error("Malformed {kind} payload: {source}")]
    Deserialization {
        /// Resource kind being converted.
        kind: ResourceKind,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The server reports a version no driver supports.
    #[error("Unsupported evitaDB server version '{version}'")]
    UnsupportedServerVersion {
        /// Version string as reported by the server.
        version: String,
    },

    /// The payload originates from an API whose payloads the drivers do not convert.
    #[error("Payloads from the {api} API are not supported by this driver")]
    UnsupportedApi {
        /// Originating API.
        api: ApiType,
    },
}

impl ConversionError {
    /// Shorthand for [`ConversionError::DataIntegrity`].
    pub fn integrity(kind: ResourceKind, reason: impl Into<String>) -> Self {
        Self::DataIntegrity {
            kind,
            reason: reason.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Lab errors
// ---------------------------------------------------------------------------

/// Errors raised while configuring connections or processing server data.
#[derive(Debug, Error)]
pub enum LabError {
    /// A connection with the same name is already registered.
    #[error("Connection '{name}' already exists")]
    DuplicateConnection {
        /// The conflicting name.
        name: ConnectionName,
    },

    /// No connection with the given name is registered.
    #[error("Connection '{name}' not found")]
    ConnectionNotFound {
        /// The requested name.
        name: ConnectionName,
    },

    /// The lab configuration is invalid.
    ///
    /// Produced at load time; the lab never starts with an invalid config.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// A server payload could not be converted.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Result type for lab model operations.
pub type LabResult<T> = Result<T, LabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_error_messages_name_the_resource_kind() {
        let err = ConversionError::integrity(ResourceKind::Entity, "missing primary key");
        assert_eq!(
            err.to_string(),
            "Data integrity error in entity payload: missing primary key"
        );
    }

    #[test]
    fn lab_error_wraps_conversion_errors_transparently() {
        let err: LabError = ConversionError::UnsupportedServerVersion {
            version: "2023.1".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Unsupported evitaDB server version '2023.1'");
    }
}
