//! On-disk persistence for the playback snapshot and the theme choice
//!
//! The web app kept both under localStorage keys; here they are two small
//! files in the platform data directory. Writes are whole-object overwrites,
//! last writer wins.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::PlaybackState;
use crate::theme::Theme;

const STATE_FILE: &str = "state.json";
const THEME_FILE: &str = "theme";

#[derive(Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Platform default: `<data_dir>/munir-rs`.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("munir-rs")
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir)
                .with_context(|| format!("creating state directory {}", self.dir.display()))?;
        }
        Ok(())
    }

    pub fn save_state(&self, state: &PlaybackState) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string(state)?;
        std::fs::write(self.path(STATE_FILE), content)?;
        tracing::trace!("Playback snapshot saved");
        Ok(())
    }

    /// `Ok(None)` means no snapshot exists. A present but unreadable snapshot
    /// is an error so the caller can tell the user state was lost; the file
    /// is left in place.
    pub fn load_state(&self) -> Result<Option<PlaybackState>> {
        let path = self.path(STATE_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        let state = serde_json::from_str(&raw)
            .with_context(|| format!("snapshot {} is corrupted", path.display()))?;
        Ok(Some(state))
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.ensure_dir()?;
        std::fs::write(self.path(THEME_FILE), theme.to_string())?;
        Ok(())
    }

    /// Unset or unparseable values fall back to `Auto`.
    pub fn load_theme(&self) -> Theme {
        match std::fs::read_to_string(self.path(THEME_FILE)) {
            Ok(raw) => raw.parse().unwrap_or_default(),
            Err(_) => Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("state"));
        (dir, storage)
    }

    #[test]
    fn snapshot_round_trip() {
        let (_dir, storage) = storage();
        let state = PlaybackState {
            surah: Some(18),
            ayah: Some(10),
            total_ayahs: 110,
            range_start: 5,
            range_end: 20,
            autoplay_enabled: true,
            range_mode_enabled: true,
            edition: Some("ar.jalalayn".to_string()),
            ..Default::default()
        };
        storage.save_state(&state).unwrap();
        assert_eq!(storage.load_state().unwrap(), Some(state));
    }

    #[test]
    fn missing_snapshot_is_none() {
        let (_dir, storage) = storage();
        assert!(storage.load_state().unwrap().is_none());
    }

    #[test]
    fn corrupt_snapshot_is_an_error_and_kept() {
        let (_dir, storage) = storage();
        storage.ensure_dir().unwrap();
        let path = storage.path(STATE_FILE);
        std::fs::write(&path, "{not json").unwrap();
        assert!(storage.load_state().is_err());
        assert!(path.exists());
    }

    #[test]
    fn theme_round_trip_and_fallback() {
        let (_dir, storage) = storage();
        assert_eq!(storage.load_theme(), Theme::Auto);

        storage.save_theme(Theme::Dark).unwrap();
        assert_eq!(storage.load_theme(), Theme::Dark);

        std::fs::write(storage.path(THEME_FILE), "mauve").unwrap();
        assert_eq!(storage.load_theme(), Theme::Auto);
    }
}
