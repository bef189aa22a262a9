use anyhow::{Context, Result};

const DEFAULT_CAREER_API_BASE_URL: &str = "https://api.careeronestop.org/v1";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub career_api_base_url: String,
    pub career_user_id: String,
    pub career_api_token: String,
    pub anthropic_api_key: String,
    /// When unset, sessions live in process memory and vanish on restart.
    pub redis_url: Option<String>,
    pub session_ttl_secs: u64,
    /// Location code used for career lookups when the request carries none.
    pub default_location: String,
    pub upstream_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            career_api_base_url: optional_env("CAREER_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_CAREER_API_BASE_URL.to_string()),
            career_user_id: require_env("CAREER_USER_ID")?,
            career_api_token: require_env("CAREER_API_TOKEN")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            redis_url: optional_env("REDIS_URL"),
            session_ttl_secs: parse_env("SESSION_TTL_SECS", 86_400)?,
            default_location: optional_env("DEFAULT_LOCATION")
                .unwrap_or_else(|| "95747".to_string()),
            upstream_timeout_secs: parse_env("UPSTREAM_TIMEOUT_SECS", 30)?,
            port: parse_env("PORT", 8080)?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Config with placeholder credentials; never reaches the network in tests.
    pub fn for_tests() -> Self {
        Config {
            career_api_base_url: DEFAULT_CAREER_API_BASE_URL.to_string(),
            career_user_id: "test-user".to_string(),
            career_api_token: "test-token".to_string(),
            anthropic_api_key: "test-key".to_string(),
            redis_url: None,
            session_ttl_secs: 60,
            default_location: "95747".to_string(),
            upstream_timeout_secs: 5,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
