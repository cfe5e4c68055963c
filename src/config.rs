use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::story::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` when `GEMINI_API_KEY` is unset or blank.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; missing values take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port: u16 = parse_number("PORT", var("PORT", "3000"))?;
        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

        let timeout_secs: u64 = parse_number("GEMINI_TIMEOUT_SECS", var("GEMINI_TIMEOUT_SECS", "60"))?;

        let api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Self {
            addr,
            static_dir: var("STATIC_DIR", "static").into(),
            gemini: GeminiConfig {
                api_key,
                model: var("GEMINI_MODEL", DEFAULT_MODEL),
                base_url: var("GEMINI_BASE_URL", DEFAULT_BASE_URL),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotANumber { name, value })
}
