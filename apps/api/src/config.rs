use anyhow::{Context, Result};
use uuid::Uuid;

/// Single-user deployment: every mood, entry and insight belongs to this id
/// unless `WELLNESS_USER_ID` overrides it.
pub const DEFAULT_USER_ID: &str = "00000000-0000-0000-0000-000000000001";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_USER_PROFILE: &str =
    "Someone building a daily journaling habit to look after their wellbeing.";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub google_api_key: String,
    pub gemini_model: String,
    pub llm_timeout_secs: u64,
    pub db_acquire_timeout_secs: u64,
    pub user_id: Uuid,
    pub user_profile: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            google_api_key: require_env("GOOGLE_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 30)?,
            db_acquire_timeout_secs: parse_env("DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            user_id: std::env::var("WELLNESS_USER_ID")
                .unwrap_or_else(|_| DEFAULT_USER_ID.to_string())
                .parse::<Uuid>()
                .context("WELLNESS_USER_ID must be a valid UUID")?,
            user_profile: std::env::var("USER_PROFILE")
                .unwrap_or_else(|_| DEFAULT_USER_PROFILE.to_string()),
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
