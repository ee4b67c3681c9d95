#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use tagbot::clients::SlackApi;
use tagbot::clients::slack_client::{BotIdentity, MessageRecord, Reaction};
use tagbot::errors::SlackError;

/// A threaded reply recorded by the fake.
#[derive(Debug, Clone)]
pub struct Post {
    pub channel_id: String,
    pub thread_ts: String,
    pub text: String,
}

/// In-memory stand-in for the Slack Web API.
///
/// Error fields hold an upstream error code (e.g. "not_in_channel") which
/// is classified exactly like a real `ok: false` envelope. Every call and
/// every posted reply is recorded so tests can assert on call order and
/// side effects.
#[derive(Default)]
pub struct FakeSlack {
    pub members: Vec<String>,
    pub reactions: Vec<Reaction>,
    pub auth_error: Option<String>,
    pub info_error: Option<String>,
    pub members_error: Option<String>,
    pub history_error: Option<String>,
    pub post_error: Option<String>,
    /// When set, the member-listing call fails as if Slack returned a
    /// payload that does not deserialize, carrying this decode detail.
    pub members_malformed: Option<String>,
    pub calls: Mutex<Vec<&'static str>>,
    pub posts: Mutex<Vec<Post>>,
}

impl FakeSlack {
    pub fn with_members(ids: &[&str]) -> Self {
        Self {
            members: ids.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn reaction(mut self, emoji: &str, users: &[&str]) -> Self {
        self.reactions.push(Reaction {
            name: emoji.to_string(),
            users: users.iter().map(ToString::to_string).collect(),
        });
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }
}

fn envelope_error(code: &str) -> SlackError {
    SlackError::from_error_code(code)
}

#[async_trait]
impl SlackApi for FakeSlack {
    async fn auth_test(&self) -> Result<BotIdentity, SlackError> {
        self.calls.lock().unwrap().push("auth_test");
        match &self.auth_error {
            Some(code) => Err(envelope_error(code)),
            None => Ok(BotIdentity {
                user: Some("tagbot".to_string()),
                team: Some("acme".to_string()),
            }),
        }
    }

    async fn channel_info(&self, _channel_id: &str) -> Result<(), SlackError> {
        self.calls.lock().unwrap().push("channel_info");
        match &self.info_error {
            Some(code) => Err(envelope_error(code)),
            None => Ok(()),
        }
    }

    async fn channel_members(&self, _channel_id: &str) -> Result<Vec<String>, SlackError> {
        self.calls.lock().unwrap().push("channel_members");
        if let Some(detail) = &self.members_malformed {
            return Err(SlackError::MalformedResponse(detail.clone()));
        }
        match &self.members_error {
            Some(code) => Err(envelope_error(code)),
            None => Ok(self.members.clone()),
        }
    }

    async fn message_at(&self, _channel_id: &str, _ts: &str) -> Result<MessageRecord, SlackError> {
        self.calls.lock().unwrap().push("message_at");
        match &self.history_error {
            Some(code) => Err(envelope_error(code)),
            None => Ok(MessageRecord {
                reactions: self.reactions.clone(),
            }),
        }
    }

    async fn post_thread_reply(
        &self,
        channel_id: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), SlackError> {
        self.calls.lock().unwrap().push("post_thread_reply");
        if let Some(code) = &self.post_error {
            return Err(envelope_error(code));
        }
        self.posts.lock().unwrap().push(Post {
            channel_id: channel_id.to_string(),
            thread_ts: thread_ts.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}
