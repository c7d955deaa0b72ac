//! Shape checks for the decoded status-API payload.
//!
//! The payload is kept as a [`serde_json::Value`] rather than deserialized
//! straight into a struct so that each kind of malformation maps onto its
//! own [`SchemaError`] instead of a generic serde message.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SchemaError;

/// Check that `raw` is an object with a `homeworks` array and return that
/// array unchanged.  An empty array is valid and means "nothing new".
pub fn validate(raw: &Value) -> Result<&[Value], SchemaError> {
    let object = raw.as_object().ok_or(SchemaError::NotAMapping)?;
    let homeworks = object
        .get("homeworks")
        .ok_or(SchemaError::MissingHomeworksKey)?;
    let items = homeworks
        .as_array()
        .ok_or(SchemaError::HomeworksNotAList)?;

    debug!(count = items.len(), "upstream response validated");
    Ok(items)
}

/// The server-reported timestamp to resume from, if the payload carries a
/// usable one.
pub fn current_date(raw: &Value) -> Option<i64> {
    let value = raw.get("current_date")?;
    match value.as_i64() {
        Some(ts) => Some(ts),
        None => {
            warn!(%value, "ignoring non-integer current_date");
            None
        }
    }
}
