//! HTTP source for the Practicum homework-status API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

use super::StatusSource;
use crate::error::CycleError;

/// Polls `GET <endpoint>?from_date=<ts>` with an OAuth token.
pub struct PracticumSource {
    endpoint: String,
    token: String,
    client: Client,
}

impl PracticumSource {
    /// Create a source for `endpoint`, authenticating with `token`.
    ///
    /// `timeout` bounds every request; hitting it surfaces as an upstream
    /// fault like any other transport error.
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        })
    }

    /// Transport faults carry the endpoint but not the query string, so the
    /// same outage produces the same text whatever the checkpoint.
    fn transport_fault(&self, e: reqwest::Error) -> CycleError {
        CycleError::Upstream(format!("{} ({})", e.without_url(), self.endpoint))
    }

    /// Decode a response body.  Pure, so it can be tested without a server.
    pub fn parse_body(body: &str) -> Result<Value, CycleError> {
        serde_json::from_str(body).map_err(|e| CycleError::Decode(e.to_string()))
    }
}

impl StatusSource for PracticumSource {
    fn name(&self) -> &str {
        "practicum"
    }

    fn fetch(&self, from_date: i64) -> Result<Value, CycleError> {
        debug!(endpoint = %self.endpoint, from_date, "requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .map_err(|e| self.transport_fault(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CycleError::upstream_status(status.as_u16(), &self.endpoint));
        }

        let body = response.text().map_err(|e| self.transport_fault(e))?;
        let payload = Self::parse_body(&body)?;

        info!("homework statuses received");
        Ok(payload)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
