//! Upstream status source abstraction.
//!
//! This module defines the [`StatusSource`] trait and the [`WorkItem`] type.
//! The only concrete source is [`PracticumSource`], which talks to the
//! homework-status HTTP API.
//!
//! A source only fetches and decodes.  Shape validation and interpretation
//! happen in the cycle, so fakes used in tests can hand back arbitrary JSON.

mod practicum;
mod work_item;

pub use practicum::PracticumSource;
pub use work_item::WorkItem;

use serde_json::Value;

use crate::error::CycleError;

/// Capability: fetch the status payload for everything changed since
/// `from_date`.
pub trait StatusSource: Send {
    /// Human-readable label used in log lines.
    fn name(&self) -> &str;

    /// Fetch and decode one payload.
    ///
    /// Implementations return [`CycleError::Upstream`] for transport faults
    /// and non-success responses, and [`CycleError::Decode`] when the body
    /// is not JSON.
    fn fetch(&self, from_date: i64) -> Result<Value, CycleError>;
}
