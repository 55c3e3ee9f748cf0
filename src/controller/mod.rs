//! Controller module - Application logic and event handling
//!
//! This module coordinates between the model, the content source, the audio
//! backend and persistence. It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `playback`: Ayah loading, navigation and the audio-end decisions
//! - `navigation`: Catalog loading and surah/edition selection
//! - `player_events`: Audio backend event listener

mod input;
mod navigation;
mod playback;
mod player_events;

use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::audio::AudioBackend;
use crate::model::{AppModel, PlaybackState, RangeSeed};
use crate::source::{ContentSource, SourceError};
use crate::storage::Storage;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) source: ContentSource,
    pub(crate) storage: Storage,
    pub(crate) audio: AudioBackend,
    pub(crate) http: reqwest::Client,
    pub(crate) range_seed: RangeSeed,
    /// Stamp for in-flight loads; responses for superseded loads are dropped.
    pub(crate) load_generation: Arc<AtomicU64>,
}

impl AppController {
    pub fn new(
        model: Arc<Mutex<AppModel>>,
        source: ContentSource,
        storage: Storage,
        audio: AudioBackend,
        range_seed: RangeSeed,
    ) -> Self {
        Self {
            model,
            source,
            storage,
            audio,
            http: reqwest::Client::new(),
            range_seed,
            load_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Write the snapshot after a mutation. Persistence failures are logged
    /// but never interrupt the interaction that caused them.
    pub(crate) fn persist(&self, snapshot: &PlaybackState) {
        if let Err(e) = self.storage.save_state(snapshot) {
            tracing::warn!(error = %e, "Failed to persist playback snapshot");
        }
    }

    /// User-facing messages, matching the Arabic strings of the web app.
    pub(crate) fn format_error(error: &SourceError) -> String {
        match error {
            SourceError::Network(_) | SourceError::Api(_) => {
                "فشل في تحميل البيانات".to_string()
            }
            SourceError::Lookup(_) | SourceError::Io(_) | SourceError::Parse(_) => {
                "فشل في تحميل الأية".to_string()
            }
        }
    }
}
