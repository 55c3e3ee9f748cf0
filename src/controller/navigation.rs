//! Catalog loading and surah/edition selection

use super::AppController;

impl AppController {
    /// Load the surah catalog and both edition catalogs at startup.
    pub async fn load_catalogs(&self) {
        let model = self.model.lock().await;
        model.set_content_loading(true).await;
        drop(model);

        let catalogs = futures::future::try_join(
            self.source.surah_list(),
            self.source.edition_catalog(),
        )
        .await;

        let model = self.model.lock().await;
        match catalogs {
            Ok((surahs, (text, audio))) => {
                model.set_surahs(surahs).await;
                model.set_editions(text, audio).await;
                model.set_content_loading(false).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Catalog load failed");
                model.set_content_loading(false).await;
                model.set_error(Self::format_error(&e)).await;
            }
        }
    }

    /// Selecting a surah resets the position to its first ayah.
    pub async fn select_surah(&self, index: usize) {
        let model = self.model.lock().await;
        let Some(surah) = model.get_surah(index).await else {
            return;
        };
        drop(model);
        tracing::info!(surah = surah.number, "Surah selected");
        self.load_ayah(surah.number, 1).await;
    }

    /// Changing the tafsir reloads the current ayah with the new edition.
    pub async fn select_text_edition(&self, index: usize) {
        let model = self.model.lock().await;
        let Some(edition) = model.get_text_edition(index).await else {
            return;
        };
        let (_, snapshot) = model
            .with_playback(|p| p.edition = Some(edition.identifier.clone()))
            .await;
        drop(model);
        tracing::info!(edition = %edition.identifier, "Text edition selected");
        self.persist(&snapshot);

        if let (Some(surah), Some(ayah)) = (snapshot.surah, snapshot.ayah) {
            self.load_ayah(surah, ayah).await;
        }
    }

    pub async fn select_audio_edition(&self, index: usize) {
        let model = self.model.lock().await;
        let Some(edition) = model.get_audio_edition(index).await else {
            return;
        };
        let (_, snapshot) = model
            .with_playback(|p| p.audio_edition = Some(edition.identifier.clone()))
            .await;
        drop(model);
        tracing::info!(edition = %edition.identifier, "Audio edition selected");
        self.persist(&snapshot);

        if let (Some(surah), Some(ayah)) = (snapshot.surah, snapshot.ayah) {
            self.load_ayah(surah, ayah).await;
        }
    }

    /// Restore the persisted session: theme, then the playback snapshot, then
    /// the ayah it points at. A corrupt snapshot falls back to defaults and
    /// tells the user the old state was lost.
    pub async fn restore_session(&self) {
        let theme = self.storage.load_theme();
        {
            let model = self.model.lock().await;
            model.set_theme(theme).await;
        }

        let restored = match self.storage.load_state() {
            Ok(Some(state)) => state,
            Ok(None) => {
                tracing::debug!("No saved session");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saved session is unreadable, starting fresh");
                let model = self.model.lock().await;
                model.set_error("فشل تحميل الحالة المحفوظة".to_string()).await;
                return;
            }
        };

        tracing::info!(
            surah = ?restored.surah,
            ayah = ?restored.ayah,
            "Restoring saved session"
        );

        let model = self.model.lock().await;
        model.restore_playback(restored.clone()).await;

        // Point the list cursors at the restored selections.
        let content = model.get_content_state().await;
        let mut ui = model.ui_state.lock().await;
        if let Some(surah) = restored.surah {
            if let Some(i) = content.surahs.iter().position(|s| s.number == surah) {
                ui.surah_selected = i;
            }
        }
        if let Some(edition) = &restored.edition {
            if let Some(i) = content
                .text_editions
                .iter()
                .position(|e| &e.identifier == edition)
            {
                ui.edition_selected = i;
            }
        }
        if let Some(edition) = &restored.audio_edition {
            if let Some(i) = content
                .audio_editions
                .iter()
                .position(|e| &e.identifier == edition)
            {
                ui.reciter_selected = i;
            }
        }
        drop(ui);
        drop(model);

        if let (Some(surah), Some(ayah)) = (restored.surah, restored.ayah) {
            self.load_ayah(surah, ayah).await;
        }
    }
}
