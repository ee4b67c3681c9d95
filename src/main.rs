use std::sync::Arc;

use anyhow::Context;
use tagbot::api::{build_router, state::AppState};
use tagbot::clients::{SlackApi, SlackClient};
use tagbot::core::config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (silently ignore if missing)
    dotenvy::dotenv().ok();
    tagbot::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("config error: {e}"))?;

    let slack: Arc<dyn SlackApi> = Arc::new(SlackClient::new(config.slack_bot_token.clone()));

    // Refuse to start with a credential Slack does not accept.
    let identity = slack
        .auth_test()
        .await
        .context("Slack token validation failed")?;
    info!(
        user = identity.user.as_deref().unwrap_or("unknown"),
        team = identity.team.as_deref().unwrap_or("unknown"),
        "Slack token validated"
    );

    let state = AppState::new(slack, config.excluded_user_ids.clone());
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {addr}");
    info!("Endpoints: POST /tag-members, POST /tag-unreacted-members");

    axum::serve(listener, app).await?;

    Ok(())
}
