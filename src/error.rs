//! Fault taxonomy for a single poll cycle.
//!
//! Every fault a cycle can hit is a [`CycleError`].  The scheduler catches
//! them all at the loop boundary; none of them stop the process.  The
//! `Display` text of a fault is what gets forwarded to the chat and what
//! [`DedupGuard`](crate::dedup::DedupGuard) keys on, so keep it stable and
//! free of secrets.

use thiserror::Error;

/// Ways the upstream payload can violate the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The decoded body is not a JSON object.
    #[error("not-a-mapping")]
    NotAMapping,

    /// The body has no `homeworks` field.
    #[error("missing-homeworks-key")]
    MissingHomeworksKey,

    /// `homeworks` is present but is not an array.
    #[error("homeworks-not-a-list")]
    HomeworksNotAList,

    /// An element of `homeworks` is not a JSON object.
    #[error("homework-not-a-mapping")]
    ItemNotAMapping,
}

/// A fault that aborts the current cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    /// Transport failure or non-success status from the status API.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The status API answered with something that is not JSON.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    /// The JSON payload does not have the expected shape.
    #[error("unexpected upstream response schema: {0}")]
    Schema(#[from] SchemaError),

    /// A work item lacks one of its required fields.
    #[error("homework is missing required field `{field}`")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A work item carries a status code outside the known table.
    #[error("undocumented homework status `{0}`")]
    UnknownStatus(String),

    /// The notification was not confirmed by the messaging endpoint.
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

impl CycleError {
    /// Build an upstream error from a non-success HTTP status.
    pub fn upstream_status(status: u16, endpoint: &str) -> Self {
        Self::Upstream(format!("status {status} from {endpoint}"))
    }

    /// Short machine-friendly label, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Upstream(_) => "upstream",
            Self::Decode(_) => "decode",
            Self::Schema(_) => "schema",
            Self::MissingField { .. } => "missing_field",
            Self::UnknownStatus(_) => "unknown_status",
            Self::Delivery(_) => "delivery",
        }
    }
}
