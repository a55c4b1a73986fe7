use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_PORT: u16 = 8787;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Kept optional so the server can come up without it; /ask reports
    /// the missing key per request instead.
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub public_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            google_api_key: std::env::var("GOOGLE_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            public_dir: std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
        })
    }
}
