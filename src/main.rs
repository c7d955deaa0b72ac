//! homework-notifier: watches homework review statuses and reports changes
//! to a Telegram chat.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  tick()  ┌──────────┐  fetch   ┌───────────┐
//! │  poll.rs │ ───────► │ cycle.rs │ ───────► │  source/  │
//! │  (loop)  │          │          │          └───────────┘
//! └──────────┘          │          │ validate ┌───────────┐
//!      │ faults         │          │ ───────► │validate.rs│
//!      ▼                │          │          └───────────┘
//! ┌──────────┐          │          │interpret ┌───────────┐
//! │ dedup.rs │          │          │ ───────► │ status.rs │
//! └──────────┘          │          │          └───────────┘
//!      │                │          │  send    ┌───────────┐
//!      └──────────────► │          │ ───────► │  notify/  │
//!                       └──────────┘          └───────────┘
//! ```
//!
//! * **`source/`**: the `StatusSource` trait and the Practicum HTTP source.
//! * **`validate`**: checks the payload shape.
//! * **`status`**: turns a work item into the message text.
//! * **`notify/`**: the `NotificationSink` trait and the Telegram sink.
//! * **`cycle`**: one fetch-validate-notify iteration.
//! * **`dedup`**: suppresses repeated fault notifications.
//! * **`poll`**: runs cycles forever, owns the checkpoint.
//! * **`config`**: environment configuration.
//! * **`main`**: wires everything together.

mod config;
mod cycle;
mod dedup;
mod error;
mod notify;
mod poll;
mod source;
mod status;
#[cfg(test)]
mod test_utils;
mod validate;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use notify::TelegramSink;
use poll::Poller;
use source::PracticumSource;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_notifier=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // -- configuration (fatal if incomplete) ---------------------------------
    let config = Config::from_env().context("incomplete configuration, refusing to start")?;
    config.validate().context("invalid configuration")?;
    info!(?config, "configuration loaded");

    // -- capabilities --------------------------------------------------------
    let source = PracticumSource::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        config.request_timeout,
    )
    .context("failed to build status API client")?;

    let sink = TelegramSink::new(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
        config.request_timeout,
    )
    .context("failed to build Telegram client")?;

    // -- main loop (never returns) -------------------------------------------
    let mut poller = Poller::new(source, sink, config.poll_interval);
    poller.announce_startup();
    poller.run()
}
