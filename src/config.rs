use anyhow::{Context, Result};

/// REST backend of the hosted GreenGo deployment.
const DEFAULT_API_URL: &str = "https://api.greengo.app";

/// Default location of the durable client store.
const DEFAULT_STORAGE_PATH: &str = "greengo_client.json";

#[derive(Debug, Clone)]
pub struct Config {
    // Backend
    pub api_base_url: String,
    pub request_timeout_secs: u64,

    // Durable client storage
    pub storage_path: String,
}

impl Config {
    /// Load `.env` (ignored in production) and build the config from the
    /// environment.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Backend
            api_base_url: std::env::var("GREENGO_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            request_timeout_secs: match std::env::var("GREENGO_REQUEST_TIMEOUT_SECS") {
                Ok(v) => v
                    .parse()
                    .context("GREENGO_REQUEST_TIMEOUT_SECS is not a number")?,
                Err(_) => 30,
            },

            // Durable client storage
            storage_path: std::env::var("GREENGO_STORAGE_PATH")
                .unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string()),
        })
    }
}
