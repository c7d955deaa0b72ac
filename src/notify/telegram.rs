//! Telegram Bot API sink.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{confirm_echo, DeliveryReceipt, NotificationSink};
use crate::error::CycleError;

/// Sends messages to one chat through `sendMessage`.
pub struct TelegramSink {
    api_url: String,
    bot_token: String,
    chat_id: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<SentMessage>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    #[serde(default)]
    message_id: Option<i64>,
    #[serde(default)]
    text: Option<String>,
}

impl TelegramSink {
    /// Create a sink posting to `api_url` (e.g. `https://api.telegram.org`).
    pub fn new(
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let api_url = api_url.into();
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            client,
        })
    }

    fn method_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.bot_token)
    }
}

impl NotificationSink for TelegramSink {
    fn send(&self, text: &str) -> Result<DeliveryReceipt, CycleError> {
        debug!(chat_id = %self.chat_id, "sending telegram message");

        // The bot token is part of the URL; strip it from transport errors.
        let response = self
            .client
            .post(self.method_url())
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .map_err(|e| CycleError::Delivery(e.without_url().to_string()))?;

        let status = response.status();
        let reply: ApiReply = response
            .json()
            .map_err(|e| CycleError::Delivery(format!("status {status}: {}", e.without_url())))?;

        if !status.is_success() || !reply.ok {
            let reason = reply
                .description
                .unwrap_or_else(|| "no description".to_string());
            return Err(CycleError::Delivery(format!("status {status}: {reason}")));
        }

        let sent = reply.result.unwrap_or(SentMessage {
            message_id: None,
            text: None,
        });
        let receipt = confirm_echo(text, sent.message_id, sent.text)?;

        info!(message_id = ?receipt.message_id, "telegram message delivered");
        Ok(receipt)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
