//! Content sources - resolving surah/ayah/edition into renderable content
//!
//! Two interchangeable implementations sit behind [`ContentSource`]:
//!
//! - `api_client`: the alquran.cloud REST API (allow-listed editions)
//! - `local_store`: a pre-fetched JSON bundle on disk (exclude-listed editions)
//!
//! The controller only sees the enum, so the choice is purely configuration.

mod api_client;
mod local_store;

use thiserror::Error;

use crate::config::{SourceConfig, SourceKind};
use crate::model::{AyahContent, Edition, SurahInfo};

pub use api_client::ApiClient;
pub use local_store::LocalStore;

/// The edition holding the canonical Arabic text.
pub const ARABIC_TEXT_EDITION: &str = "quran-uthmani";

/// Content resolution errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Api(u16),

    #[error("not found: {0}")]
    Lookup(String),

    #[error("malformed content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("bundle read failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
pub enum ContentSource {
    Remote(ApiClient),
    Local(LocalStore),
}

impl ContentSource {
    pub fn from_config(config: &SourceConfig) -> Self {
        match config.kind {
            SourceKind::Remote => Self::Remote(ApiClient::new(&config.api_base)),
            SourceKind::Local => Self::Local(LocalStore::new(&config.data_dir)),
        }
    }

    pub async fn surah_list(&self) -> Result<Vec<SurahInfo>, SourceError> {
        match self {
            Self::Remote(client) => client.surah_list().await,
            Self::Local(store) => store.surah_list().await,
        }
    }

    /// Returns `(text_editions, audio_editions)`.
    pub async fn edition_catalog(&self) -> Result<(Vec<Edition>, Vec<Edition>), SourceError> {
        match self {
            Self::Remote(client) => client.edition_catalog().await,
            Self::Local(store) => store.edition_catalog().await,
        }
    }

    /// Resolve one ayah: Arabic text, optional translation, optional audio URL
    /// and the surah metadata the navigation logic needs.
    pub async fn resolve(
        &self,
        surah: u32,
        ayah: u32,
        edition: Option<&str>,
        audio_edition: Option<&str>,
    ) -> Result<AyahContent, SourceError> {
        match self {
            Self::Remote(client) => client.resolve(surah, ayah, edition, audio_edition).await,
            Self::Local(store) => store.resolve(surah, ayah, edition, audio_edition).await,
        }
    }
}

/// Keep only catalog entries on the allow-list, in catalog order.
pub(crate) fn filter_allowed(editions: Vec<Edition>, allowed: &[&str]) -> Vec<Edition> {
    editions
        .into_iter()
        .filter(|e| allowed.contains(&e.identifier.as_str()))
        .collect()
}

/// Drop catalog entries on the exclude-list.
pub(crate) fn filter_excluded(editions: Vec<Edition>, excluded: &[&str]) -> Vec<Edition> {
    editions
        .into_iter()
        .filter(|e| !excluded.contains(&e.identifier.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editions(ids: &[&str]) -> Vec<Edition> {
        ids.iter()
            .map(|id| Edition {
                identifier: id.to_string(),
                name: id.to_uppercase(),
            })
            .collect()
    }

    #[test]
    fn allow_list_keeps_only_listed_editions() {
        let out = filter_allowed(editions(&["a", "b", "c"]), &["c", "a"]);
        let ids: Vec<_> = out.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn exclude_list_drops_listed_editions() {
        let out = filter_excluded(editions(&["a", "b", "c"]), &["b"]);
        let ids: Vec<_> = out.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
