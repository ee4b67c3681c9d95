use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Slack rejected the credential: {0}")]
    AuthFailed(String),

    #[error("the bot is not a member of the channel")]
    NotInChannel,

    #[error("Slack API call failed: {0}")]
    ApiError(String),

    #[error("malformed response from Slack: {0}")]
    MalformedResponse(String),

    #[error("failed to send HTTP request: {0}")]
    HttpError(String),
}

impl SlackError {
    /// Classify an `ok: false` envelope by its structured error code.
    #[must_use]
    pub fn from_error_code(code: &str) -> Self {
        match code {
            "invalid_auth" | "not_authed" | "token_revoked" | "token_expired"
            | "account_inactive" => SlackError::AuthFailed(code.to_string()),
            "not_in_channel" => SlackError::NotInChannel,
            _ => SlackError::ApiError(code.to_string()),
        }
    }
}

impl From<reqwest::Error> for SlackError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            SlackError::MalformedResponse(error.to_string())
        } else if error.status() == Some(reqwest::StatusCode::UNAUTHORIZED) {
            SlackError::AuthFailed(error.to_string())
        } else {
            SlackError::HttpError(error.to_string())
        }
    }
}
