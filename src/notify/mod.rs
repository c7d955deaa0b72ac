//! Outbound notification capability.
//!
//! [`NotificationSink`] is the only way the notifier talks to a human.  It is
//! used for both status-change messages and best-effort fault reports.

mod telegram;

pub use telegram::TelegramSink;

use crate::error::CycleError;

/// Confirmation that the messaging endpoint accepted a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Endpoint-assigned id of the delivered message, when it reports one.
    pub message_id: Option<i64>,
    /// The text as echoed back by the endpoint.
    pub text: String,
}

/// Capability: deliver one text message to the configured destination.
pub trait NotificationSink: Send {
    /// Send `text` exactly once.
    ///
    /// Succeeds only when the endpoint echoes back `text` unchanged; any
    /// other outcome is a [`CycleError::Delivery`].  No retries happen here.
    fn send(&self, text: &str) -> Result<DeliveryReceipt, CycleError>;
}

/// Compare an echoed text against what was sent.
pub(crate) fn confirm_echo(
    sent: &str,
    message_id: Option<i64>,
    echoed: Option<String>,
) -> Result<DeliveryReceipt, CycleError> {
    match echoed {
        Some(text) if text == sent => Ok(DeliveryReceipt { message_id, text }),
        Some(text) => Err(CycleError::Delivery(format!(
            "endpoint echoed {text:?} instead of the sent text"
        ))),
        None => Err(CycleError::Delivery(
            "endpoint did not echo the message text".to_string(),
        )),
    }
}
