//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::theme::Theme;

use super::content::{AyahContent, ContentState, Edition, SurahInfo};
use super::playback::PlaybackState;
use super::types::{ActiveSection, RangeDraft, UiState};

/// Main application model containing all state.
///
/// The UI layer is the only holder of a mutable reference; everything that
/// decides behavior goes through [`PlaybackState`]'s pure methods.
pub struct AppModel {
    playback: Arc<Mutex<PlaybackState>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub content_state: Arc<Mutex<ContentState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            playback: Arc::new(Mutex::new(PlaybackState::default())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            content_state: Arc::new(Mutex::new(ContentState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    // ========================================================================
    // Playback state
    // ========================================================================

    pub async fn playback_snapshot(&self) -> PlaybackState {
        self.playback.lock().await.clone()
    }

    /// Wholesale overwrite, used when restoring a persisted snapshot.
    pub async fn restore_playback(&self, state: PlaybackState) {
        *self.playback.lock().await = state;
    }

    /// Apply a closure to the playback state and return its result along with
    /// a snapshot for persistence.
    pub async fn with_playback<T>(
        &self,
        f: impl FnOnce(&mut PlaybackState) -> T,
    ) -> (T, PlaybackState) {
        let mut playback = self.playback.lock().await;
        let out = f(&mut playback);
        (out, playback.clone())
    }

    // ========================================================================
    // Content
    // ========================================================================

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    pub async fn set_content_loading(&self, loading: bool) {
        let mut state = self.content_state.lock().await;
        state.is_loading = loading;
    }

    pub async fn set_surahs(&self, surahs: Vec<SurahInfo>) {
        let mut state = self.content_state.lock().await;
        state.surahs = surahs;
    }

    pub async fn set_editions(&self, text: Vec<Edition>, audio: Vec<Edition>) {
        let mut state = self.content_state.lock().await;
        state.text_editions = text;
        state.audio_editions = audio;
    }

    pub async fn set_current_ayah(&self, content: AyahContent) {
        let mut state = self.content_state.lock().await;
        state.current = Some(content);
        state.is_loading = false;
    }

    pub async fn get_surah(&self, index: usize) -> Option<SurahInfo> {
        let state = self.content_state.lock().await;
        state.surahs.get(index).cloned()
    }

    pub async fn get_text_edition(&self, index: usize) -> Option<Edition> {
        let state = self.content_state.lock().await;
        state.text_editions.get(index).cloned()
    }

    pub async fn get_audio_edition(&self, index: usize) -> Option<Edition> {
        let state = self.content_state.lock().await;
        state.audio_editions.get(index).cloned()
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        match state.active_section {
            ActiveSection::Surahs => {
                state.surah_selected = state.surah_selected.saturating_sub(1);
            }
            ActiveSection::Editions => {
                state.edition_selected = state.edition_selected.saturating_sub(1);
            }
            ActiveSection::Reciters => {
                state.reciter_selected = state.reciter_selected.saturating_sub(1);
            }
            ActiveSection::Reader => {}
        }
    }

    pub async fn move_selection_down(&self) {
        let content = self.content_state.lock().await;
        let mut state = self.ui_state.lock().await;
        match state.active_section {
            ActiveSection::Surahs => {
                if state.surah_selected < content.surahs.len().saturating_sub(1) {
                    state.surah_selected += 1;
                }
            }
            ActiveSection::Editions => {
                if state.edition_selected < content.text_editions.len().saturating_sub(1) {
                    state.edition_selected += 1;
                }
            }
            ActiveSection::Reciters => {
                if state.reciter_selected < content.audio_editions.len().saturating_sub(1) {
                    state.reciter_selected += 1;
                }
            }
            ActiveSection::Reader => {}
        }
    }

    pub async fn set_range_draft(&self, draft: Option<RangeDraft>) {
        let mut state = self.ui_state.lock().await;
        state.range_draft = draft;
    }

    pub async fn get_theme(&self) -> Theme {
        self.ui_state.lock().await.theme
    }

    pub async fn set_theme(&self, theme: Theme) {
        let mut state = self.ui_state.lock().await;
        state.theme = theme;
    }

    // ========================================================================
    // Errors & lifecycle
    // ========================================================================

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > 5 {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
