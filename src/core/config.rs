use std::collections::HashSet;
use std::env;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub port: u16,
    /// User IDs never mentioned by the unreacted-tagging endpoint,
    /// e.g. the bot itself or known exempt accounts.
    pub excluded_user_ids: HashSet<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let slack_bot_token =
            env::var("SLACK_BOT_TOKEN").map_err(|e| format!("SLACK_BOT_TOKEN: {}", e))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|e| format!("PORT: {}", e))?,
            Err(_) => DEFAULT_PORT,
        };

        let excluded_user_ids = env::var("EXCLUDED_USER_IDS")
            .map(|raw| parse_id_list(&raw))
            .unwrap_or_default();

        Ok(Self {
            slack_bot_token,
            port,
            excluded_user_ids,
        })
    }
}

fn parse_id_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}
