//! Server connections and the registry that owns them.
//!
//! A [`Connection`] is an immutable value; editing a connection replaces it
//! wholesale in the [`ConnectionRegistry`]. The registry is an explicit object
//! handed to the dispatch layer; converters never read it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ConnectionName, LabError, LabResult};

/// One configured evitaDB server endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    name: ConnectionName,
    rest_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gql_url: Option<String>,
}

impl Connection {
    /// Creates a connection.
    ///
    /// Fails with [`LabError::Configuration`] if `rest_url` is blank or
    /// `gql_url` is present but blank.
    pub fn new(
        name: ConnectionName,
        rest_url: impl Into<String>,
        gql_url: Option<String>,
    ) -> LabResult<Self> {
        let connection = Self {
            name,
            rest_url: rest_url.into(),
            gql_url,
        };
        connection.check()?;
        Ok(connection)
    }

    pub(crate) fn check(&self) -> LabResult<()> {
        if self.rest_url.trim().is_empty() {
            return Err(LabError::Configuration {
                message: format!("connection '{}' has an empty REST URL", self.name),
            });
        }
        if self.gql_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            return Err(LabError::Configuration {
                message: format!("connection '{}' has an empty GraphQL URL", self.name),
            });
        }
        Ok(())
    }

    pub fn name(&self) -> &ConnectionName {
        &self.name
    }

    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    pub fn gql_url(&self) -> Option<&str> {
        self.gql_url.as_deref()
    }
}

// ---------------------------------------------------------------------------

/// The set of configured connections, unique by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionRegistry {
    connections: Vec<Connection>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new connection.
    ///
    /// Fails with [`LabError::DuplicateConnection`] if the name is taken.
    pub fn add(&mut self, connection: Connection) -> LabResult<()> {
        if self.position(connection.name()).is_some() {
            return Err(LabError::DuplicateConnection {
                name: connection.name().clone(),
            });
        }
        debug!(connection = %connection.name(), "Registered connection");
        self.connections.push(connection);
        Ok(())
    }

    /// Replaces the connection registered as `name` with `connection`,
    /// keeping its position. The replacement may carry a new name as long as
    /// that name is not used by another connection.
    ///
    /// Returns the replaced connection.
    pub fn replace(&mut self, name: &ConnectionName, connection: Connection) -> LabResult<Connection> {
        let index = self
            .position(name)
            .ok_or_else(|| LabError::ConnectionNotFound { name: name.clone() })?;
        if let Some(other) = self.position(connection.name()) {
            if other != index {
                return Err(LabError::DuplicateConnection {
                    name: connection.name().clone(),
                });
            }
        }
        debug!(connection = %name, replacement = %connection.name(), "Replaced connection");
        Ok(std::mem::replace(&mut self.connections[index], connection))
    }

    /// Removes and returns the connection registered as `name`.
    pub fn remove(&mut self, name: &ConnectionName) -> LabResult<Connection> {
        let index = self
            .position(name)
            .ok_or_else(|| LabError::ConnectionNotFound { name: name.clone() })?;
        debug!(connection = %name, "Removed connection");
        Ok(self.connections.remove(index))
    }

    pub fn get(&self, name: &ConnectionName) -> Option<&Connection> {
        self.connections.iter().find(|c| c.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    fn position(&self, name: &ConnectionName) -> Option<usize> {
        self.connections.iter().position(|c| c.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> ConnectionName {
        ConnectionName::new(raw).unwrap()
    }

    fn connection(raw: &str) -> Connection {
        Connection::new(name(raw), format!("https://{raw}.example.com/rest"), None).unwrap()
    }

    #[test]
    fn new_rejects_blank_urls() {
        assert!(matches!(
            Connection::new(name("local"), "  ", None),
            Err(LabError::Configuration { .. })
        ));
        assert!(matches!(
            Connection::new(name("local"), "http://localhost:5555/rest", Some(String::new())),
            Err(LabError::Configuration { .. })
        ));
    }

    #[test]
    fn add_rejects_duplicate_names() {
        let mut registry = ConnectionRegistry::new();
        registry.add(connection("demo")).unwrap();
        let err = registry.add(connection("demo")).unwrap_err();
        assert!(matches!(err, LabError::DuplicateConnection { name } if name.as_str() == "demo"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn replace_swaps_wholesale_and_keeps_position() {
        let mut registry = ConnectionRegistry::new();
        registry.add(connection("a")).unwrap();
        registry.add(connection("b")).unwrap();

        let edited = Connection::new(
            name("renamed"),
            "http://localhost:5555/rest",
            Some("http://localhost:5555/gql".to_string()),
        )
        .unwrap();
        let old = registry.replace(&name("a"), edited.clone()).unwrap();

        assert_eq!(old, connection("a"));
        assert!(registry.get(&name("a")).is_none());
        assert_eq!(registry.iter().next(), Some(&edited));
    }

    #[test]
    fn replace_rejects_name_collisions_and_missing_entries() {
        let mut registry = ConnectionRegistry::new();
        registry.add(connection("a")).unwrap();
        registry.add(connection("b")).unwrap();

        assert!(matches!(
            registry.replace(&name("a"), connection("b")),
            Err(LabError::DuplicateConnection { .. })
        ));
        assert!(matches!(
            registry.replace(&name("missing"), connection("c")),
            Err(LabError::ConnectionNotFound { .. })
        ));
        // same name is an in-place edit
        assert!(registry.replace(&name("b"), connection("b")).is_ok());
    }

    #[test]
    fn remove_returns_the_connection() {
        let mut registry = ConnectionRegistry::new();
        registry.add(connection("a")).unwrap();
        assert_eq!(registry.remove(&name("a")).unwrap(), connection("a"));
        assert!(registry.is_empty());
        assert!(registry.remove(&name("a")).is_err());
    }
}
