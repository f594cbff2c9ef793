use reelhost_core::Config;
use reelhost_db::VideoRepository;
use reelhost_probe::Prober;
use reelhost_storage::{RemoteStore, ThumbnailSink};
use std::sync::Arc;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub videos: VideoRepository,
    pub store: Arc<dyn RemoteStore>,
    pub thumbnails: Arc<dyn ThumbnailSink>,
    pub prober: Arc<dyn Prober>,
}
