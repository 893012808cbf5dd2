//! User-facing notifications.
//!
//! A notification is created where an event is raised, consumed once by the
//! display layer and then discarded.

use serde::{Deserialize, Serialize};

use crate::{ConversionError, LabError, NotificationSeverity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    pub severity: NotificationSeverity,
    pub message: String,
}

impl NotificationData {
    pub fn new(severity: NotificationSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationSeverity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationSeverity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationSeverity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationSeverity::Error, message)
    }
}

impl From<&LabError> for NotificationData {
    fn from(err: &LabError) -> Self {
        Self::error(err.to_string())
    }
}

impl From<&ConversionError> for NotificationData {
    fn from(err: &ConversionError) -> Self {
        Self::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResourceKind;

    #[test]
    fn errors_become_error_notifications() {
        let err = ConversionError::integrity(ResourceKind::TaskStatus, "missing task id");
        let notification = NotificationData::from(&err);
        assert_eq!(notification.severity, NotificationSeverity::Error);
        assert!(notification.message.contains("missing task id"));

        let lab_err = LabError::from(err);
        assert_eq!(NotificationData::from(&lab_err), notification);
    }
}
