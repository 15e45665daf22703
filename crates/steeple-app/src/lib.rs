//! Application root: owns the entity store and the media clients, and is the
//! single place screens reach them through.

pub mod config;
pub mod logging;

use anyhow::Result;
use steeple_db::Database;
use steeple_media::{MediaError, ScriptureClient, VideoClient};
use steeple_store::EntityStore;
use tracing::{info, warn};

pub use config::Config;

pub struct App {
    config: Config,
    store: EntityStore<Database>,
    video: Option<VideoClient>,
    scripture: ScriptureClient,
    latest_video_id: Option<String>,
    loading_video: bool,
    loading_passage: bool,
}

/// Holds a loading flag set for its lifetime, so the flag is cleared even when
/// the fetch future is dropped before completing.
struct Loading<'a>(&'a mut bool);

impl<'a> Loading<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl App {
    /// Opens storage and restores all persisted state before returning.
    pub fn open(config: Config) -> Result<Self> {
        let db = Database::open(&config.data_path)?;
        let mut store = EntityStore::new(db);

        let report = store.load();
        if !report.failed.is_empty() {
            warn!(keys = ?report.failed, "Some stored collections could not be restored");
        }

        let http = steeple_media::http_client(config.http_timeout)?;
        let video = match (&config.youtube_api_key, &config.youtube_channel_id) {
            (Some(key), Some(channel)) => Some(VideoClient::new(http.clone(), key, channel)),
            _ => {
                info!("Video search not configured");
                None
            }
        };
        let scripture = ScriptureClient::new(http);

        Ok(Self {
            config,
            store,
            video,
            scripture,
            latest_video_id: None,
            loading_video: false,
            loading_passage: false,
        })
    }

    /// Replaces the media clients, e.g. to point them at another host.
    pub fn with_clients(mut self, video: Option<VideoClient>, scripture: ScriptureClient) -> Self {
        self.video = video;
        self.scripture = scripture;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &EntityStore<Database> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntityStore<Database> {
        &mut self.store
    }

    pub fn latest_video_id(&self) -> Option<&str> {
        self.latest_video_id.as_deref()
    }

    pub fn is_loading_video(&self) -> bool {
        self.loading_video
    }

    pub fn is_loading_passage(&self) -> bool {
        self.loading_passage
    }

    /// Fetches the channel's newest video. On failure the previous id is kept
    /// and the error is returned for the caller to surface.
    pub async fn refresh_latest_video(&mut self) -> Result<Option<String>, MediaError> {
        let Some(client) = &self.video else {
            return Ok(None);
        };

        let result = {
            let _loading = Loading::start(&mut self.loading_video);
            client.latest_video_id().await
        };

        match &result {
            Ok(Some(id)) => self.latest_video_id = Some(id.clone()),
            Ok(None) => {}
            Err(e) => warn!("Failed to fetch the latest video: {}", e),
        }
        result
    }

    /// The configured daily passage, or placeholder text if it cannot be fetched.
    pub async fn daily_passage(&mut self) -> String {
        let _loading = Loading::start(&mut self.loading_passage);
        self.scripture
            .passage_or_placeholder(&self.config.default_passage)
            .await
    }
}
