//! Read-only fetches against the two third-party services the app shows:
//! the channel's newest video and a scripture passage.

pub mod error;
pub mod scripture;
pub mod video;

use std::time::Duration;

pub use error::MediaError;
pub use scripture::ScriptureClient;
pub use video::VideoClient;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared HTTP client for both services.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, MediaError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(client)
}
