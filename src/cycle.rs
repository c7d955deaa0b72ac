//! One poll cycle: fetch, validate, interpret, notify, advance.
//!
//! Novelty is decided entirely by the upstream `from_date` filter: every
//! item in the returned window is treated as a fresh status change.  There
//! is no local record of item identities.
//!
//! The first failing item aborts the rest of the cycle.  Items before it have
//! already been delivered; since the checkpoint is not advanced, they will be
//! fetched and sent again on the next cycle.

use tracing::debug;

use crate::error::CycleError;
use crate::notify::NotificationSink;
use crate::source::StatusSource;
use crate::status::interpret;
use crate::validate::{current_date, validate};

/// Summary of a cycle that reached the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Work items returned by the upstream.
    pub items: usize,
    /// Notifications confirmed by the sink.
    pub delivered: usize,
    /// Where the next cycle should query from.
    pub checkpoint: i64,
}

/// Run a single cycle against `source` and `sink`, starting at `checkpoint`.
///
/// On success the returned report carries the advanced checkpoint: the
/// server's `current_date` when present, otherwise `checkpoint` unchanged.
pub fn run_cycle<S, N>(source: &S, sink: &N, checkpoint: i64) -> Result<CycleReport, CycleError>
where
    S: StatusSource + ?Sized,
    N: NotificationSink + ?Sized,
{
    debug!(source = source.name(), from_date = checkpoint, "fetching");
    let raw = source.fetch(checkpoint)?;

    let items = validate(&raw)?;

    let mut delivered = 0;
    for item in items {
        let message = interpret(item)?;
        sink.send(&message)?;
        delivered += 1;
    }

    let next = current_date(&raw).unwrap_or(checkpoint);
    debug!(delivered, checkpoint = next, "cycle complete");

    Ok(CycleReport {
        items: items.len(),
        delivered,
        checkpoint: next,
    })
}
