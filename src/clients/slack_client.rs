//! Slack API client module
//!
//! Encapsulates the Slack Web API calls the tagging pipelines depend on.
//! Every Web API response is a JSON envelope with an `ok` flag and a
//! structured error code on failure; the code is classified into the
//! crate's error taxonomy by [`SlackError::from_error_code`].

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::errors::SlackError;

const SLACK_API_BASE: &str = "https://slack.com/api";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Identity reported by `auth.test` for a valid token.
#[derive(Debug, Clone)]
pub struct BotIdentity {
    pub user: Option<String>,
    pub team: Option<String>,
}

/// A single reaction entry on a message: an emoji name and the users who
/// applied it.
#[derive(Debug, Clone, Deserialize)]
pub struct Reaction {
    pub name: String,
    #[serde(default)]
    pub users: Vec<String>,
}

/// The message record returned by the history lookup. Only the reaction
/// metadata matters to the unreacted pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageRecord {
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

#[derive(Debug, Deserialize)]
struct AuthTestResponse {
    ok: bool,
    user: Option<String>,
    team: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChannelInfoResponse {
    ok: bool,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MembersResponse {
    ok: bool,
    members: Option<Vec<String>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    ok: bool,
    messages: Option<Vec<MessageRecord>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    error: Option<String>,
}

/// The remote operations the tagging pipelines depend on.
///
/// Implemented by [`SlackClient`] in production and by in-memory fakes in
/// tests, so failure classification is exercised without network calls.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Validate the credential and report the bot's identity.
    async fn auth_test(&self) -> Result<BotIdentity, SlackError>;

    /// Probe channel access; fails with [`SlackError::NotInChannel`] when
    /// the bot has not been invited.
    async fn channel_info(&self, channel_id: &str) -> Result<(), SlackError>;

    /// List the members of a channel, in the order Slack returns them.
    async fn channel_members(&self, channel_id: &str) -> Result<Vec<String>, SlackError>;

    /// Fetch the single message at (or immediately before) the given
    /// timestamp, including its reaction entries.
    async fn message_at(&self, channel_id: &str, ts: &str) -> Result<MessageRecord, SlackError>;

    /// Post `text` as a threaded reply under `thread_ts`.
    async fn post_thread_reply(
        &self,
        channel_id: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), SlackError>;
}

/// Slack Web API client authenticated with a bot token.
pub struct SlackClient {
    token: String,
}

impl SlackClient {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    fn envelope_error(error: Option<String>) -> SlackError {
        SlackError::from_error_code(&error.unwrap_or_else(|| "unknown_error".to_string()))
    }
}

#[async_trait]
impl SlackApi for SlackClient {
    async fn auth_test(&self) -> Result<BotIdentity, SlackError> {
        let resp = HTTP_CLIENT
            .get(format!("{SLACK_API_BASE}/auth.test"))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| SlackError::HttpError(e.to_string()))?;

        let data: AuthTestResponse = resp
            .json()
            .await
            .map_err(|e| SlackError::MalformedResponse(e.to_string()))?;

        if !data.ok {
            // Whatever code auth.test reports, the credential is unusable.
            return Err(match Self::envelope_error(data.error) {
                SlackError::ApiError(code) => SlackError::AuthFailed(code),
                other => other,
            });
        }

        Ok(BotIdentity {
            user: data.user,
            team: data.team,
        })
    }

    async fn channel_info(&self, channel_id: &str) -> Result<(), SlackError> {
        debug!(channel = %channel_id, "conversations.info");
        let resp = HTTP_CLIENT
            .get(format!("{SLACK_API_BASE}/conversations.info"))
            .bearer_auth(&self.token)
            .query(&[("channel", channel_id)])
            .send()
            .await
            .map_err(|e| SlackError::HttpError(e.to_string()))?;

        let data: ChannelInfoResponse = resp
            .json()
            .await
            .map_err(|e| SlackError::MalformedResponse(e.to_string()))?;

        if !data.ok {
            return Err(Self::envelope_error(data.error));
        }
        Ok(())
    }

    async fn channel_members(&self, channel_id: &str) -> Result<Vec<String>, SlackError> {
        debug!(channel = %channel_id, "conversations.members");
        let resp = HTTP_CLIENT
            .get(format!("{SLACK_API_BASE}/conversations.members"))
            .bearer_auth(&self.token)
            .query(&[("channel", channel_id)])
            .send()
            .await
            .map_err(|e| SlackError::HttpError(e.to_string()))?;

        let data: MembersResponse = resp
            .json()
            .await
            .map_err(|e| SlackError::MalformedResponse(e.to_string()))?;

        if !data.ok {
            return Err(Self::envelope_error(data.error));
        }

        data.members
            .ok_or_else(|| SlackError::MalformedResponse("no members in response".to_string()))
    }

    async fn message_at(&self, channel_id: &str, ts: &str) -> Result<MessageRecord, SlackError> {
        debug!(channel = %channel_id, ts = %ts, "conversations.history");
        let resp = HTTP_CLIENT
            .get(format!("{SLACK_API_BASE}/conversations.history"))
            .bearer_auth(&self.token)
            .query(&[
                ("channel", channel_id),
                ("latest", ts),
                ("inclusive", "true"),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| SlackError::HttpError(e.to_string()))?;

        let data: HistoryResponse = resp
            .json()
            .await
            .map_err(|e| SlackError::MalformedResponse(e.to_string()))?;

        if !data.ok {
            return Err(Self::envelope_error(data.error));
        }

        data.messages
            .and_then(|messages| messages.into_iter().next())
            .ok_or_else(|| SlackError::ApiError("message_not_found".to_string()))
    }

    async fn post_thread_reply(
        &self,
        channel_id: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), SlackError> {
        debug!(channel = %channel_id, thread_ts = %thread_ts, "chat.postMessage");
        let payload = json!({
            "channel": channel_id,
            "thread_ts": thread_ts,
            "text": text,
        });

        let resp = HTTP_CLIENT
            .post(format!("{SLACK_API_BASE}/chat.postMessage"))
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SlackError::HttpError(e.to_string()))?;

        let data: PostMessageResponse = resp
            .json()
            .await
            .map_err(|e| SlackError::MalformedResponse(e.to_string()))?;

        if !data.ok {
            return Err(Self::envelope_error(data.error));
        }
        Ok(())
    }
}
