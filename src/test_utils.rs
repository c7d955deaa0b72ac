//! In-memory fakes for the source and sink capabilities.
//!
//! Both fakes are cheap to clone and share their state, so a test can hand
//! one clone to the poller and keep another to inspect afterwards.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::CycleError;
use crate::notify::{DeliveryReceipt, NotificationSink};
use crate::source::StatusSource;

/// A source that replays queued responses in order.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    responses: Arc<Mutex<VecDeque<Result<Value, CycleError>>>>,
    requested: Arc<Mutex<Vec<i64>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Result<Value, CycleError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Every `from_date` the source was asked for, in order.
    pub fn requested(&self) -> Vec<i64> {
        self.requested.lock().unwrap().clone()
    }
}

impl StatusSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    fn fetch(&self, from_date: i64) -> Result<Value, CycleError> {
        self.requested.lock().unwrap().push(from_date);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CycleError::Upstream("script exhausted".into())))
    }
}

/// A sink that records every text it was asked to send.
#[derive(Clone, Default)]
pub struct RecordingSink {
    sent: Arc<Mutex<Vec<String>>>,
    failing: Arc<Mutex<bool>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following send fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Texts that were accepted, in order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn send(&self, text: &str) -> Result<DeliveryReceipt, CycleError> {
        if *self.failing.lock().unwrap() {
            return Err(CycleError::Delivery("sink is down".into()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(text.to_string());
        Ok(DeliveryReceipt {
            message_id: Some(sent.len() as i64),
            text: text.to_string(),
        })
    }
}
