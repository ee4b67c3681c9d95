use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::errors::SlackError;

/// Terminal outcomes of a request that did not complete normally.
#[derive(Debug)]
pub enum ApiError {
    /// The request body carried no message link.
    MissingLink,
    /// The message link did not match the expected permalink pattern.
    InvalidLink,
    /// A remote call failed; the inner error decides the status code.
    Slack(SlackError),
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl From<SlackError> for ApiError {
    fn from(err: SlackError) -> Self {
        ApiError::Slack(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, error, details) = match self {
            ApiError::MissingLink => (
                StatusCode::BAD_REQUEST,
                "A message link is required.".to_string(),
                None,
                None,
            ),
            ApiError::InvalidLink => (
                StatusCode::BAD_REQUEST,
                "Invalid message link.".to_string(),
                None,
                None,
            ),
            ApiError::Slack(err) => {
                error!("Slack pipeline failed: {err}");
                match err {
                    SlackError::AuthFailed(code) => (
                        StatusCode::UNAUTHORIZED,
                        "Authentication failed: the Slack token is not valid.".to_string(),
                        Some(code),
                        None,
                    ),
                    SlackError::NotInChannel => (
                        StatusCode::FORBIDDEN,
                        "The bot has not been invited to this channel.".to_string(),
                        Some(
                            "Run '/invite @<bot name>' in the channel to invite the bot."
                                .to_string(),
                        ),
                        None,
                    ),
                    SlackError::MalformedResponse(detail) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Upstream response error.".to_string(),
                        Some("Received a malformed response from the Slack API.".to_string()),
                        Some(detail),
                    ),
                    SlackError::ApiError(code) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Slack API call failed.".to_string(),
                        Some(code),
                        None,
                    ),
                    SlackError::HttpError(detail) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to reach the Slack API.".to_string(),
                        Some(detail),
                        None,
                    ),
                }
            }
        };

        let body = ErrorResponse {
            message,
            error,
            details,
        };

        (status, Json(body)).into_response()
    }
}
