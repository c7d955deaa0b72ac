//! One submission record as returned by the status API.
//!
//! The API sends more fields than these (ids, reviewer comments, dates);
//! only the two the notifier needs are extracted.

use serde_json::Value;

use crate::error::{CycleError, SchemaError};

/// A single homework entry from the `homeworks` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Human-readable name of the submission, never empty.
    pub name: String,
    /// Raw status code as sent by the API (e.g. `"approved"`).
    pub status: String,
}

impl WorkItem {
    /// Extract a work item from one element of the validated `homeworks`
    /// array.
    ///
    /// A field that is absent, not a string, or (for the name) empty counts
    /// as missing.
    pub fn from_value(value: &Value) -> Result<Self, CycleError> {
        let object = value.as_object().ok_or(SchemaError::ItemNotAMapping)?;

        let name = object
            .get("homework_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(CycleError::MissingField {
                field: "homework_name",
            })?;

        let status = object
            .get("status")
            .and_then(Value::as_str)
            .ok_or(CycleError::MissingField { field: "status" })?;

        Ok(Self {
            name: name.to_string(),
            status: status.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_name_and_status() {
        let item = WorkItem::from_value(&json!({
            "id": 123,
            "homework_name": "user__hw_python_oop.zip",
            "status": "reviewing",
            "reviewer_comment": ""
        }))
        .unwrap();

        assert_eq!(item.name, "user__hw_python_oop.zip");
        assert_eq!(item.status, "reviewing");
    }

    #[test]
    fn missing_name_is_reported() {
        let err = WorkItem::from_value(&json!({"status": "approved"})).unwrap_err();
        assert_eq!(err, CycleError::MissingField { field: "homework_name" });
    }

    #[test]
    fn empty_name_counts_as_missing() {
        let err = WorkItem::from_value(&json!({"homework_name": "", "status": "approved"}))
            .unwrap_err();
        assert_eq!(err, CycleError::MissingField { field: "homework_name" });
    }

    #[test]
    fn missing_status_is_reported() {
        let err = WorkItem::from_value(&json!({"homework_name": "HW1"})).unwrap_err();
        assert_eq!(err, CycleError::MissingField { field: "status" });
    }

    #[test]
    fn non_string_status_counts_as_missing() {
        let err = WorkItem::from_value(&json!({"homework_name": "HW1", "status": 3}))
            .unwrap_err();
        assert_eq!(err, CycleError::MissingField { field: "status" });
    }

    #[test]
    fn non_object_item_is_a_schema_error() {
        let err = WorkItem::from_value(&json!(["HW1", "approved"])).unwrap_err();
        assert_eq!(err, CycleError::Schema(SchemaError::ItemNotAMapping));
    }
}
