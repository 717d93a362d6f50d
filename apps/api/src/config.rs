use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::metrics::time_range::TimeRange;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables AI generation. Unset leaves assist endpoints returning MISSING_CREDENTIALS.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub seed_fixtures: bool,
    pub fixtures_path: Option<PathBuf>,
    pub default_time_range: TimeRange,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| {
            get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Config {
            anthropic_api_key: optional("ANTHROPIC_API_KEY"),
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            seed_fixtures: optional("SEED_FIXTURES")
                .map(|v| parse_bool(&v))
                .transpose()
                .context("SEED_FIXTURES must be true or false")?
                .unwrap_or(true),
            fixtures_path: optional("FIXTURES_PATH").map(PathBuf::from),
            default_time_range: optional("DEFAULT_TIME_RANGE")
                .map(|v| v.parse::<TimeRange>())
                .transpose()
                .context("DEFAULT_TIME_RANGE is not a known range")?
                .unwrap_or_default(),
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("'{other}' is not a boolean"),
    }
}
