//! Client modules for external API interactions

pub mod slack_client;

pub use slack_client::{SlackApi, SlackClient};
