use serde::Deserialize;
use tracing::{debug, warn};

use crate::MediaError;

pub const BIBLE_API_BASE: &str = "https://bible-api.com";

pub const PASSAGE_NOT_FOUND: &str = "Passage not found";
pub const PASSAGE_ERROR: &str = "Error fetching passage";

/// Public scripture text lookup by passage reference, e.g. `john 3:16`.
#[derive(Clone)]
pub struct ScriptureClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PassageResponse {
    #[serde(default)]
    text: Option<String>,
}

impl ScriptureClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, BIBLE_API_BASE)
    }

    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The passage text. Unknown references come back as an error status with
    /// a JSON body and resolve to [`PASSAGE_NOT_FOUND`]; only transport and
    /// decode failures are errors.
    pub async fn passage(&self, reference: &str) -> Result<String, MediaError> {
        let url = format!("{}/{}", self.base_url, encode_reference(reference));

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, reference, "Scripture lookup returned an error status");
        }

        let body: PassageResponse = response.json().await?;
        Ok(body
            .text
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| PASSAGE_NOT_FOUND.to_string()))
    }

    /// Passage text, or placeholder text when the lookup fails.
    pub async fn passage_or_placeholder(&self, reference: &str) -> String {
        match self.passage(reference).await {
            Ok(text) => text,
            Err(e) => {
                warn!(reference, "Scripture lookup failed: {}", e);
                PASSAGE_ERROR.to_string()
            }
        }
    }
}

/// `John 3:16` -> `john+3:16`.
fn encode_reference(reference: &str) -> String {
    reference
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("+")
        .to_lowercase()
}
