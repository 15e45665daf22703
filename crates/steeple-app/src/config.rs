use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub youtube_api_key: Option<String>,
    pub youtube_channel_id: Option<String>,
    pub default_passage: String,
    pub http_timeout: Duration,
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_timeout = match non_empty("STEEPLE_HTTP_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .with_context(|| format!("STEEPLE_HTTP_TIMEOUT_SECS is not a number: {}", secs))?,
            ),
            None => steeple_media::DEFAULT_TIMEOUT,
        };

        Ok(Self {
            data_path: non_empty("STEEPLE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("steeple.db")),
            youtube_api_key: non_empty("STEEPLE_YOUTUBE_API_KEY"),
            youtube_channel_id: non_empty("STEEPLE_YOUTUBE_CHANNEL_ID"),
            default_passage: non_empty("STEEPLE_DEFAULT_PASSAGE")
                .unwrap_or_else(|| "john 3:16".to_string()),
            http_timeout,
        })
    }
}
