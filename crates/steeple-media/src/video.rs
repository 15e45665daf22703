use serde::Deserialize;
use tracing::{debug, warn};

use crate::MediaError;

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com";

/// Looks up the newest upload on one channel through the video platform's search API.
#[derive(Clone)]
pub struct VideoClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    channel_id: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

impl VideoClient {
    pub fn new(http: reqwest::Client, api_key: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self::with_base_url(http, YOUTUBE_API_BASE, api_key, channel_id)
    }

    pub fn with_base_url(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            channel_id: channel_id.into(),
        }
    }

    /// Id of the most recent video, or `None` when the channel has none.
    pub async fn latest_video_id(&self) -> Result<Option<String>, MediaError> {
        let url = format!("{}/youtube/v3/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("channelId", self.channel_id.as_str()),
                ("part", "snippet,id"),
                ("order", "date"),
                ("maxResults", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Video search failed");
            return Err(MediaError::Status {
                service: "video search",
                status,
            });
        }

        let body: SearchResponse = response.json().await?;
        let video_id = first_video_id(body);
        debug!(video_id = ?video_id, "Latest video resolved");
        Ok(video_id)
    }
}

fn first_video_id(body: SearchResponse) -> Option<String> {
    body.items.into_iter().find_map(|item| item.id.video_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::serve_once;

    #[test]
    fn test_first_video_id_skips_non_videos() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"items":[{"id":{"kind":"youtube#channel","channelId":"UC1"}},{"id":{"kind":"youtube#video","videoId":"abc123"}}]}"#,
        )
        .unwrap();
        assert_eq!(first_video_id(body), Some("abc123".to_string()));

        let empty: SearchResponse = serde_json::from_str(r#"{"kind":"youtube#searchListResponse"}"#).unwrap();
        assert_eq!(first_video_id(empty), None);
    }

    #[tokio::test]
    async fn test_latest_video_id_over_http() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"items":[{"id":{"kind":"youtube#video","videoId":"dQw4w9WgXcQ"}}]}"#,
        )
        .await;

        let client = VideoClient::with_base_url(reqwest::Client::new(), base, "k3y", "UC123");
        let id = client.latest_video_id().await.unwrap();
        assert_eq!(id.as_deref(), Some("dQw4w9WgXcQ"));

        let request_line = request.await.unwrap();
        assert!(request_line.starts_with("GET /youtube/v3/search?"));
        assert!(request_line.contains("key=k3y"));
        assert!(request_line.contains("channelId=UC123"));
        assert!(request_line.contains("order=date"));
        assert!(request_line.contains("maxResults=1"));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let (base, _request) = serve_once("403 Forbidden", r#"{"error":{"code":403}}"#).await;

        let client = VideoClient::with_base_url(reqwest::Client::new(), base, "bad", "UC123");
        let err = client.latest_video_id().await.unwrap_err();
        assert!(matches!(
            err,
            MediaError::Status { status, .. } if status == reqwest::StatusCode::FORBIDDEN
        ));
    }
}
