//! Server-side background tasks (jobs).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{CatalogName, TaskId, TaskState, TaskTrait, Timestamp};

/// Status of one background task as last reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    pub task_id: TaskId,
    /// Server-side task class (e.g. `BackupTask`).
    pub task_type: String,
    /// Human-readable task name.
    pub task_name: String,
    /// Catalog the task operates on, if any.
    pub catalog_name: Option<CatalogName>,
    pub created: Timestamp,
    pub started: Option<Timestamp>,
    pub finished: Option<Timestamp>,
    pub state: TaskState,
    /// Completion percentage in `0..=100`, `None` when the task does not
    /// report progress.
    pub progress: Option<u8>,
    pub traits: BTreeSet<TaskTrait>,
    /// Failure description for [`TaskState::Failed`] tasks.
    pub exception: Option<String>,
}

impl TaskStatus {
    pub fn can_be_started(&self) -> bool {
        self.traits.contains(&TaskTrait::CanBeStarted)
    }

    pub fn can_be_cancelled(&self) -> bool {
        self.traits.contains(&TaskTrait::CanBeCancelled)
    }

    pub fn needs_to_be_stopped(&self) -> bool {
        self.traits.contains(&TaskTrait::NeedsToBeStopped)
    }
}
