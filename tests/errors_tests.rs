use std::error::Error;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use tagbot::api::error::ApiError;
use tagbot::errors::SlackError;

#[test]
fn slack_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SlackError::ApiError("channel_not_found".to_string());
    assert_error(&error);
}

#[test]
fn slack_error_display() {
    let error = SlackError::ApiError("channel_not_found".to_string());
    assert_eq!(
        format!("{error}"),
        "Slack API call failed: channel_not_found"
    );

    let error = SlackError::MalformedResponse("expected JSON".to_string());
    assert_eq!(
        format!("{error}"),
        "malformed response from Slack: expected JSON"
    );

    let error = SlackError::NotInChannel;
    assert_eq!(format!("{error}"), "the bot is not a member of the channel");
}

#[test]
fn error_codes_are_classified_into_the_taxonomy() {
    // Credential problems, however Slack spells them
    for code in [
        "invalid_auth",
        "not_authed",
        "token_revoked",
        "token_expired",
        "account_inactive",
    ] {
        assert!(matches!(
            SlackError::from_error_code(code),
            SlackError::AuthFailed(_)
        ));
    }

    assert!(matches!(
        SlackError::from_error_code("not_in_channel"),
        SlackError::NotInChannel
    ));

    // Everything else passes the code through
    match SlackError::from_error_code("ratelimited") {
        SlackError::ApiError(code) => assert_eq!(code, "ratelimited"),
        other => panic!("unexpected classification: {other:?}"),
    }
}

#[test]
fn reqwest_errors_convert_into_slack_errors() {
    // Never called; verifies the conversion exists and compiles.
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SlackError {
        SlackError::from(err)
    }
}

async fn response_parts(err: ApiError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn missing_and_invalid_input_translate_to_400() {
    let (status, body) = response_parts(ApiError::MissingLink).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "A message link is required.");

    let (status, body) = response_parts(ApiError::InvalidLink).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid message link.");
}

#[tokio::test]
async fn auth_failure_translates_to_401() {
    let err = ApiError::Slack(SlackError::AuthFailed("invalid_auth".to_string()));
    let (status, body) = response_parts(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_auth");
}

#[tokio::test]
async fn missing_invite_translates_to_403_with_instruction() {
    let (status, body) = response_parts(ApiError::Slack(SlackError::NotInChannel)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("/invite"));
}

#[tokio::test]
async fn malformed_upstream_response_translates_to_500_with_details() {
    let err = ApiError::Slack(SlackError::MalformedResponse(
        "error decoding response body".to_string(),
    ));
    let (status, body) = response_parts(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Upstream response error.");
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("malformed response")
    );
    assert_eq!(body["details"], "error decoding response body");
}

#[tokio::test]
async fn success_payloads_omit_error_fields() {
    // 400s carry no upstream error code; the optional fields must be absent
    // rather than null.
    let (_, body) = response_parts(ApiError::MissingLink).await;
    assert!(body.get("error").is_none());
    assert!(body.get("details").is_none());
}
