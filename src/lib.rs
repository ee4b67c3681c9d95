//! Tagbot - a small backend that relays two commands to the Slack Web API:
//! tag every member of a channel in a message thread, or tag only the
//! channel members who have not reacted to the linked message.
//!
//! # Architecture
//!
//! Each endpoint is a short sequential pipeline over the Slack Web API:
//!
//! 1. Parse the channel ID and thread timestamp out of a shareable
//!    message link ([`utils::links`]).
//! 2. Fetch channel membership (and, for the unreacted path, the linked
//!    message's reactions) through the [`clients::SlackApi`] seam.
//! 3. Compose `<@U...>` mentions and post them as a threaded reply
//!    ([`features::tag`]).
//! 4. Translate the outcome into an HTTP status and JSON payload
//!    ([`api`]).
//!
//! Nothing persists between requests; the only process-wide state is the
//! bot token and the excluded-user set read once at startup.

// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod utils;

/// Configure structured logging for the server process.
///
/// Respects `RUST_LOG` when set and otherwise defaults to info-level
/// output for the crate and the HTTP trace layer.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tagbot=info,tower_http=info".into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
