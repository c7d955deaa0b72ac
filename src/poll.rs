//! The polling loop.
//!
//! Runs on the main thread: one cycle to completion, then sleep, forever.
//! A new cycle never starts while one is outstanding.  Every fault a cycle
//! raises is caught here, logged, and (once per distinct text) forwarded to
//! the chat; none of them stop the loop.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::cycle::{run_cycle, CycleReport};
use crate::dedup::DedupGuard;
use crate::error::CycleError;
use crate::notify::NotificationSink;
use crate::source::StatusSource;

/// Sent once when the loop starts.
pub const STARTUP_MESSAGE: &str = "bot started";

/// What a single tick produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The cycle ran to the end.
    Done(CycleReport),
    /// The cycle was aborted by this fault.
    Failed(CycleError),
}

/// Owns the checkpoint and the dedup state and drives cycles.
pub struct Poller<S, N> {
    source: S,
    sink: N,
    interval: Duration,
    checkpoint: i64,
    dedup: DedupGuard,
}

impl<S: StatusSource, N: NotificationSink> Poller<S, N> {
    /// Create a poller whose first query window starts one interval ago.
    pub fn new(source: S, sink: N, interval: Duration) -> Self {
        let lag = i64::try_from(interval.as_secs()).unwrap_or(i64::MAX);
        Self {
            source,
            sink,
            interval,
            checkpoint: Utc::now().timestamp().saturating_sub(lag),
            dedup: DedupGuard::new(),
        }
    }

    /// Start from an explicit checkpoint instead.
    #[cfg(test)]
    pub fn with_checkpoint(mut self, checkpoint: i64) -> Self {
        self.checkpoint = checkpoint;
        self
    }

    pub fn checkpoint(&self) -> i64 {
        self.checkpoint
    }

    /// Best-effort "I'm alive" message.  Failure is logged, not returned.
    pub fn announce_startup(&self) {
        if let Err(e) = self.sink.send(STARTUP_MESSAGE) {
            warn!("could not announce startup: {e}");
        }
    }

    /// Run exactly one cycle and fold its result into the poller state.
    pub fn tick(&mut self) -> CycleOutcome {
        match run_cycle(&self.source, &self.sink, self.checkpoint) {
            Ok(report) => {
                self.checkpoint = report.checkpoint;
                if report.delivered > 0 {
                    info!(
                        items = report.items,
                        delivered = report.delivered,
                        "status changes delivered"
                    );
                    self.dedup.reset();
                }
                CycleOutcome::Done(report)
            }
            Err(e) => {
                error!(kind = e.kind(), checkpoint = self.checkpoint, "cycle failed: {e}");
                self.report_fault(&e);
                CycleOutcome::Failed(e)
            }
        }
    }

    /// Poll forever.
    pub fn run(&mut self) -> ! {
        info!(
            source = self.source.name(),
            interval = ?self.interval,
            checkpoint = self.checkpoint(),
            "starting poll loop"
        );
        loop {
            match self.tick() {
                CycleOutcome::Done(report) => {
                    debug!(checkpoint = report.checkpoint, "cycle done")
                }
                CycleOutcome::Failed(fault) => {
                    debug!(kind = fault.kind(), "retrying after interval")
                }
            }
            thread::sleep(self.interval);
        }
    }

    /// Forward a fault to the chat unless the same text already went out.
    fn report_fault(&mut self, fault: &CycleError) {
        let text = fault.to_string();
        if !self.dedup.should_notify(&text) {
            return;
        }
        match self.sink.send(&text) {
            Ok(receipt) => {
                debug!(message_id = ?receipt.message_id, "fault forwarded");
                self.dedup.remember(receipt.text);
            }
            Err(e) => error!("could not forward fault notification: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
