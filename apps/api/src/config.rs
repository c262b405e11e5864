use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub ai_api_key: String,
    /// Sent as the `HTTP-Referer` header on model calls (OpenRouter attribution).
    pub http_referer: String,
    pub port: u16,
    pub rust_log: String,
    /// Seed the catalog with sample items at startup (development convenience).
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ai_api_key: require_env("AI_API_KEY")?,
            http_referer: std::env::var("HTTP_REFERER")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            seed_sample_data: std::env::var("SEED_SAMPLE_DATA")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
