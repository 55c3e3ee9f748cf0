//! Ayah loading, navigation and the audio-end decisions

use std::sync::atomic::Ordering;

use crate::model::NextAction;

use super::AppController;

impl AppController {
    /// Load one ayah from the content source and apply it to the model.
    ///
    /// Loads are stamped with a generation number; if another load starts
    /// while this one is in flight, the late response is dropped instead of
    /// overwriting newer state.
    pub async fn load_ayah(&self, surah: u32, ayah: u32) {
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(surah, ayah, generation, "Loading ayah");

        let model = self.model.lock().await;
        model.set_content_loading(true).await;
        let playback = model.playback_snapshot().await;
        drop(model);

        let result = self
            .source
            .resolve(
                surah,
                ayah,
                playback.edition.as_deref(),
                playback.audio_edition.as_deref(),
            )
            .await;

        let model = self.model.lock().await;
        if self.load_generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(surah, ayah, generation, "Dropping superseded load");
            return;
        }

        let content = match result {
            Ok(content) => content,
            Err(e) => {
                tracing::error!(surah, ayah, error = %e, "Ayah load failed");
                model.set_content_loading(false).await;
                model.set_error(Self::format_error(&e)).await;
                return;
            }
        };

        let total_ayahs = content.total_ayahs;
        let (_, snapshot) = model
            .with_playback(|p| {
                p.surah = Some(surah);
                p.ayah = Some(ayah);
                p.total_ayahs = total_ayahs;
            })
            .await;
        model.set_current_ayah(content.clone()).await;
        drop(model);
        self.persist(&snapshot);

        if snapshot.autoplay_enabled {
            if let Some(url) = content.audio_url {
                self.play_audio_url(&url, generation).await;
            }
        } else {
            // Swapping the displayed ayah silences whatever was playing.
            self.audio.stop();
        }
    }

    /// Fetch and start the audio for a URL, unless a newer load superseded us.
    async fn play_audio_url(&self, url: &str, generation: u64) {
        tracing::debug!(%url, "Fetching ayah audio");
        match self.fetch_audio(url).await {
            Ok(bytes) => {
                if self.load_generation.load(Ordering::SeqCst) != generation {
                    tracing::debug!(%url, "Dropping superseded audio fetch");
                    return;
                }
                self.audio.play(bytes);
            }
            Err(e) => {
                tracing::error!(%url, error = %e, "Audio fetch failed");
                let model = self.model.lock().await;
                model.set_error("فشل في تحميل الصوت".to_string()).await;
            }
        }
    }

    async fn fetch_audio(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Manual play of the currently displayed ayah's audio.
    pub async fn play_current(&self) {
        let model = self.model.lock().await;
        let content = model.get_content_state().await;
        drop(model);

        if let Some(url) = content.current.and_then(|c| c.audio_url) {
            let generation = self.load_generation.load(Ordering::SeqCst);
            self.play_audio_url(&url, generation).await;
        }
    }

    pub async fn next_ayah(&self) {
        let model = self.model.lock().await;
        let playback = model.playback_snapshot().await;
        drop(model);

        if let (Some(surah), Some(ayah)) = (playback.surah, playback.ayah) {
            if playback.can_go_next() {
                self.load_ayah(surah, ayah + 1).await;
            }
        }
    }

    pub async fn prev_ayah(&self) {
        let model = self.model.lock().await;
        let playback = model.playback_snapshot().await;
        drop(model);

        if let (Some(surah), Some(ayah)) = (playback.surah, playback.ayah) {
            if playback.can_go_prev() {
                self.load_ayah(surah, ayah - 1).await;
            }
        }
    }

    /// Entry point for the audio backend's end-of-audio signal.
    pub async fn handle_audio_end(&self) {
        let model = self.model.lock().await;
        let playback = model.playback_snapshot().await;
        drop(model);

        let action = playback.advance_on_audio_end();
        tracing::debug!(?action, "Audio ended");
        match action {
            NextAction::Replay => self.audio.replay(),
            NextAction::LoadAyah(next) => {
                if let Some(surah) = playback.surah {
                    self.load_ayah(surah, next).await;
                }
            }
            NextAction::Stop => {}
        }
    }

    // ========================================================================
    // Flag toggles - each one persists the snapshot, like the web app did
    // on every click.
    // ========================================================================

    pub async fn toggle_autoplay(&self) {
        let model = self.model.lock().await;
        let (enabled, snapshot) = model
            .with_playback(|p| {
                p.autoplay_enabled = !p.autoplay_enabled;
                p.autoplay_enabled
            })
            .await;
        drop(model);
        tracing::info!(enabled, "Autoplay toggled");
        self.persist(&snapshot);
    }

    pub async fn toggle_loop(&self) {
        let model = self.model.lock().await;
        let (enabled, snapshot) = model
            .with_playback(|p| {
                p.loop_enabled = !p.loop_enabled;
                p.loop_enabled
            })
            .await;
        drop(model);
        tracing::info!(enabled, "Ayah loop toggled");
        self.persist(&snapshot);
    }

    pub async fn toggle_surah_loop(&self) {
        let model = self.model.lock().await;
        let (enabled, snapshot) = model
            .with_playback(|p| {
                p.surah_loop_enabled = !p.surah_loop_enabled;
                p.surah_loop_enabled
            })
            .await;
        drop(model);
        tracing::info!(enabled, "Surah loop toggled");
        self.persist(&snapshot);
    }

    pub async fn toggle_range_mode(&self) {
        let seed = self.range_seed;
        let model = self.model.lock().await;
        let (enabled, snapshot) = model
            .with_playback(|p| {
                p.toggle_range_mode(seed);
                p.range_mode_enabled
            })
            .await;
        drop(model);
        tracing::info!(enabled, ?seed, "Range mode toggled");
        self.persist(&snapshot);
    }

    /// Commit a user-entered range. If the current ayah falls outside the
    /// committed bounds, playback snaps to the range start.
    pub async fn commit_range(&self, raw_start: i64, raw_end: i64) {
        let model = self.model.lock().await;
        let (commit, snapshot) = model
            .with_playback(|p| p.commit_range(raw_start, raw_end))
            .await;
        drop(model);
        tracing::info!(
            start = commit.start,
            end = commit.end,
            relocate = commit.relocate,
            "Range committed"
        );
        self.persist(&snapshot);

        if commit.relocate {
            if let Some(surah) = snapshot.surah {
                self.load_ayah(surah, commit.start).await;
            }
        }
    }

    pub async fn cycle_theme(&self) {
        let model = self.model.lock().await;
        let theme = model.get_theme().await.next();
        model.set_theme(theme).await;
        drop(model);
        if let Err(e) = self.storage.save_theme(theme) {
            tracing::warn!(error = %e, "Failed to persist theme");
        }
    }
}
