//! State shared between the lab's console tabs: entity grid property
//! selection, result visualisers and tab parameters.

use serde::{Deserialize, Serialize};

use crate::{CatalogName, Connection, EntityPropertyType, QueryLanguage, TaskId, VisualiserTypeType};

// ---------------------------------------------------------------------------
// Entity grid
// ---------------------------------------------------------------------------

/// Identifies one displayable entity property (e.g. attribute `code`).
///
/// `name` is `None` for properties that are not keyed, such as the primary
/// key or the price list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPropertyKey {
    pub property_type: EntityPropertyType,
    pub name: Option<String>,
}

impl EntityPropertyKey {
    pub fn entity(name: impl Into<String>) -> Self {
        Self::named(EntityPropertyType::Entity, name)
    }

    pub fn attribute(name: impl Into<String>) -> Self {
        Self::named(EntityPropertyType::Attributes, name)
    }

    pub fn associated_data(name: impl Into<String>) -> Self {
        Self::named(EntityPropertyType::AssociatedData, name)
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::named(EntityPropertyType::References, name)
    }

    pub fn prices() -> Self {
        Self {
            property_type: EntityPropertyType::Prices,
            name: None,
        }
    }

    fn named(property_type: EntityPropertyType, name: impl Into<String>) -> Self {
        Self {
            property_type,
            name: Some(name.into()),
        }
    }
}

/// Ordered, duplicate-free set of properties selected for display.
///
/// Order is the order of selection; it drives the grid's column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPropertySelection {
    keys: Vec<EntityPropertyKey>,
}

impl EntityPropertySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key`; returns `false` if it was already selected.
    pub fn select(&mut self, key: EntityPropertyKey) -> bool {
        if self.is_selected(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Removes `key`; returns `false` if it was not selected.
    pub fn deselect(&mut self, key: &EntityPropertyKey) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        before != self.keys.len()
    }

    /// Flips the selection of `key`; returns whether it is now selected.
    pub fn toggle(&mut self, key: EntityPropertyKey) -> bool {
        if self.deselect(&key) {
            false
        } else {
            self.keys.push(key);
            true
        }
    }

    pub fn is_selected(&self, key: &EntityPropertyKey) -> bool {
        self.keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityPropertyKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<EntityPropertyKey> for EntityPropertySelection {
    fn from_iter<I: IntoIterator<Item = EntityPropertyKey>>(iter: I) -> Self {
        let mut selection = Self::new();
        for key in iter {
            selection.select(key);
        }
        selection
    }
}

// ---------------------------------------------------------------------------
// Visualisers
// ---------------------------------------------------------------------------

/// A renderable view over a query's extra results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualiserType {
    pub title: String,
    pub value: VisualiserTypeType,
}

impl VisualiserType {
    pub fn new(title: impl Into<String>, value: VisualiserTypeType) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// Tab parameters
// ---------------------------------------------------------------------------

/// Parameters of the job (task list) tab.
///
/// Holds the connection by value; tabs never hold live connection handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTabParams {
    pub connection: Connection,
}

/// Parameters of a tab showing a single task, or all tasks when `task_id`
/// is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskViewerParams {
    pub connection: Connection,
    pub task_id: Option<TaskId>,
}

/// Parameters of a query console tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleTabParams {
    pub connection: Connection,
    pub catalog_name: CatalogName,
    pub query_language: QueryLanguage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_keeps_order_and_rejects_duplicates() {
        let mut selection = EntityPropertySelection::new();
        assert!(selection.select(EntityPropertyKey::attribute("code")));
        assert!(selection.select(EntityPropertyKey::prices()));
        assert!(!selection.select(EntityPropertyKey::attribute("code")));

        let order: Vec<_> = selection.iter().cloned().collect();
        assert_eq!(
            order,
            vec![EntityPropertyKey::attribute("code"), EntityPropertyKey::prices()]
        );
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection: EntityPropertySelection =
            [EntityPropertyKey::entity("primaryKey")].into_iter().collect();
        let key = EntityPropertyKey::reference("brand");

        assert!(selection.toggle(key.clone()));
        assert!(selection.is_selected(&key));
        assert!(!selection.toggle(key.clone()));
        assert!(!selection.is_selected(&key));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn same_name_in_different_property_types_is_distinct() {
        let mut selection = EntityPropertySelection::new();
        selection.select(EntityPropertyKey::attribute("name"));
        assert!(!selection.is_selected(&EntityPropertyKey::associated_data("name")));
        assert!(!selection.deselect(&EntityPropertyKey::associated_data("name")));
    }
}
