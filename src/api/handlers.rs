use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::{error::ApiError, state::AppState};
use crate::features::tag::{self, TagOutcome};
use crate::utils::links::parse_message_link;

#[derive(Debug, Deserialize)]
pub struct TagRequest {
    #[serde(rename = "messageLink")]
    pub message_link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub message: String,
}

/// Pull the message link out of the request body.
///
/// Any body the `Json` extractor rejects (empty, invalid JSON, wrong
/// content type) is treated the same as a body without a link, so every
/// bad-request shape lands in the 400 JSON translation instead of the
/// framework's plain-text rejection.
fn extract_link(body: Result<Json<TagRequest>, JsonRejection>) -> Result<String, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::MissingLink)?;
    req.message_link.ok_or(ApiError::MissingLink)
}

/// `POST /tag-members` - mention every channel member in the linked thread.
pub async fn tag_members(
    State(state): State<AppState>,
    body: Result<Json<TagRequest>, JsonRejection>,
) -> Result<Json<TagResponse>, ApiError> {
    let link = extract_link(body)?;
    let msg = parse_message_link(&link).ok_or(ApiError::InvalidLink)?;

    let tagged = tag::tag_all_members(state.slack.as_ref(), &msg).await?;
    info!(channel = %msg.channel_id, tagged, "tag-members completed");

    Ok(Json(TagResponse {
        message: "Tagged everyone in the thread!".to_string(),
    }))
}

/// `POST /tag-unreacted-members` - mention only the members who have not
/// reacted to the linked message.
pub async fn tag_unreacted_members(
    State(state): State<AppState>,
    body: Result<Json<TagRequest>, JsonRejection>,
) -> Result<Json<TagResponse>, ApiError> {
    let link = extract_link(body)?;
    let msg = parse_message_link(&link).ok_or(ApiError::InvalidLink)?;

    let outcome =
        tag::tag_unreacted_members(state.slack.as_ref(), &msg, &state.excluded_user_ids).await?;

    let message = match outcome {
        TagOutcome::AllReacted => "\u{2705} Everyone has already reacted!".to_string(),
        TagOutcome::Posted { tagged } => {
            info!(channel = %msg.channel_id, tagged, "tag-unreacted-members completed");
            "Tagged the members who have not reacted.".to_string()
        }
    };

    Ok(Json(TagResponse { message }))
}

/// `GET /` - liveness probe.
pub async fn health() -> &'static str {
    "Tagbot backend is up and running."
}
