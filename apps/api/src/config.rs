use anyhow::{Context, Result};

pub const DEFAULT_MISTRAL_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub mistral_api_key: String,
    pub mistral_api_url: String,
    /// The only origin the browser client may call from.
    pub allowed_origin: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            mistral_api_key: lookup("MISTRAL_API_KEY")
                .context("Required environment variable 'MISTRAL_API_KEY' is not set")?,
            mistral_api_url: lookup("MISTRAL_API_URL")
                .unwrap_or_else(|| DEFAULT_MISTRAL_API_URL.to_string()),
            allowed_origin: lookup("ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
