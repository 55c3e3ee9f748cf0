//! Pre-fetched JSON bundle on disk
//!
//! The bundle mirrors the API shapes, one file per edition:
//! `arabic_text_editions.json`, `arabic_audio_editions.json`,
//! `quran_text_<edition>.json` and `quran_audio_<edition>.json`, each holding
//! the full text (or audio URLs) of every surah for that edition.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{AyahContent, Edition, SurahInfo};

use super::{filter_excluded, SourceError, ARABIC_TEXT_EDITION};

/// Bundle files that exist but should not be offered in the pickers.
const TEXT_EXCLUDE_LIST: &[&str] = &[
    "quran-buck",
    "quran-corpus-qd",
    "quran-kids",
    "quran-simple-clean",
    "quran-simple-enhanced",
    "quran-simple-min",
    "quran-simple",
    "quran-tajweed",
    "quran-unicode",
    "quran-uthmani-quran-academy",
    "quran-wordbyword-2",
    "quran-wordbyword",
    "quran-uthmani",
    "quran-uthmani-min",
];

const AUDIO_EXCLUDE_LIST: &[&str] = &["ar.parhizgar"];

// ============================================================================
// Bundle file shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct BundleEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct EditionEntry {
    identifier: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct QuranData {
    edition: Option<EditionEntry>,
    surahs: Vec<BundleSurah>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleSurah {
    number: u32,
    name: String,
    english_name: String,
    ayahs: Vec<BundleAyah>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleAyah {
    text: Option<String>,
    audio: Option<String>,
    number_in_surah: u32,
}

// ============================================================================
// Store
// ============================================================================

#[derive(Clone)]
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    fn read_file<T: serde::de::DeserializeOwned>(&self, filename: &str) -> Result<T, SourceError> {
        let path = self.data_dir.join(filename);
        if !path.exists() {
            return Err(SourceError::Lookup(format!(
                "bundle file {} is missing",
                path.display()
            )));
        }
        let raw = std::fs::read_to_string(&path)?;
        let envelope: BundleEnvelope<T> = serde_json::from_str(&raw)?;
        Ok(envelope.data)
    }

    fn read_quran(&self, kind: &str, edition: &str) -> Result<QuranData, SourceError> {
        self.read_file(&format!("quran_{kind}_{edition}.json"))
    }

    pub async fn surah_list(&self) -> Result<Vec<SurahInfo>, SourceError> {
        // The Arabic text file carries the full surah structure.
        let quran = self.read_quran("text", ARABIC_TEXT_EDITION)?;
        let surahs = quran
            .surahs
            .into_iter()
            .map(|s| SurahInfo {
                number: s.number,
                english_name: s.english_name,
                arabic_name: s.name,
                total_ayahs: s.ayahs.len() as u32,
            })
            .collect::<Vec<_>>();
        tracing::info!(count = surahs.len(), "Loaded surah catalog from bundle");
        Ok(surahs)
    }

    pub async fn edition_catalog(&self) -> Result<(Vec<Edition>, Vec<Edition>), SourceError> {
        let text: Vec<EditionEntry> = self.read_file("arabic_text_editions.json")?;
        let audio: Vec<EditionEntry> = self.read_file("arabic_audio_editions.json")?;

        let to_editions = |entries: Vec<EditionEntry>| {
            entries
                .into_iter()
                .map(|e| Edition {
                    identifier: e.identifier,
                    name: e.name,
                })
                .collect::<Vec<_>>()
        };

        Ok((
            filter_excluded(to_editions(text), TEXT_EXCLUDE_LIST),
            filter_excluded(to_editions(audio), AUDIO_EXCLUDE_LIST),
        ))
    }

    fn lookup<'a>(
        data: &'a QuranData,
        surah: u32,
        ayah: u32,
    ) -> Result<(&'a BundleSurah, &'a BundleAyah), SourceError> {
        let surah_entry = data
            .surahs
            .get(surah.saturating_sub(1) as usize)
            .ok_or_else(|| SourceError::Lookup(format!("surah {surah} not in bundle")))?;
        let ayah_entry = surah_entry
            .ayahs
            .get(ayah.saturating_sub(1) as usize)
            .ok_or_else(|| SourceError::Lookup(format!("ayah {surah}:{ayah} not in bundle")))?;
        Ok((surah_entry, ayah_entry))
    }

    pub async fn resolve(
        &self,
        surah: u32,
        ayah: u32,
        edition: Option<&str>,
        audio_edition: Option<&str>,
    ) -> Result<AyahContent, SourceError> {
        let arabic = self.read_quran("text", ARABIC_TEXT_EDITION)?;
        let (surah_entry, ayah_entry) = Self::lookup(&arabic, surah, ayah)?;

        let mut content = AyahContent {
            arabic_text: ayah_entry.text.clone().unwrap_or_default(),
            number_in_surah: ayah_entry.number_in_surah,
            total_ayahs: surah_entry.ayahs.len() as u32,
            surah_english_name: surah_entry.english_name.clone(),
            surah_arabic_name: surah_entry.name.clone(),
            ..Default::default()
        };

        if let Some(edition) = edition {
            let translation = self.read_quran("text", edition)?;
            let (_, translation_ayah) = Self::lookup(&translation, surah, ayah)?;
            content.translation_text = translation_ayah.text.clone();
            content.translation_edition = translation.edition.map(|e| e.name);
        }

        if let Some(audio_edition) = audio_edition {
            let audio = self.read_quran("audio", audio_edition)?;
            let (_, audio_ayah) = Self::lookup(&audio, surah, ayah)?;
            content.audio_url = audio_ayah.audio.clone();
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TEXT_FIXTURE: &str = r#"{
        "data": {
            "edition": {"identifier": "quran-uthmani", "name": "القرآن الكريم"},
            "surahs": [
                {
                    "number": 1,
                    "name": "سورة الفاتحة",
                    "englishName": "Al-Faatiha",
                    "ayahs": [
                        {"number": 1, "text": "بِسْمِ ٱللَّهِ", "numberInSurah": 1},
                        {"number": 2, "text": "ٱلْحَمْدُ لِلَّهِ", "numberInSurah": 2}
                    ]
                }
            ]
        }
    }"#;

    const AUDIO_FIXTURE: &str = r#"{
        "data": {
            "edition": {"identifier": "ar.alafasy", "name": "مشاري العفاسي"},
            "surahs": [
                {
                    "number": 1,
                    "name": "سورة الفاتحة",
                    "englishName": "Al-Faatiha",
                    "ayahs": [
                        {"number": 1, "audio": "https://cdn.example/1.mp3", "numberInSurah": 1},
                        {"number": 2, "audio": "https://cdn.example/2.mp3", "numberInSurah": 2}
                    ]
                }
            ]
        }
    }"#;

    fn store_with_fixtures() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("quran_text_quran-uthmani.json"), TEXT_FIXTURE).unwrap();
        fs::write(dir.path().join("quran_audio_ar.alafasy.json"), AUDIO_FIXTURE).unwrap();
        let store = LocalStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn resolves_arabic_and_audio() {
        let (_dir, store) = store_with_fixtures();
        let content = store.resolve(1, 2, None, Some("ar.alafasy")).await.unwrap();
        assert_eq!(content.arabic_text, "ٱلْحَمْدُ لِلَّهِ");
        assert_eq!(content.number_in_surah, 2);
        assert_eq!(content.total_ayahs, 2);
        assert_eq!(content.audio_url.as_deref(), Some("https://cdn.example/2.mp3"));
        assert!(content.translation_text.is_none());
    }

    #[tokio::test]
    async fn missing_ayah_is_a_lookup_error() {
        let (_dir, store) = store_with_fixtures();
        let err = store.resolve(1, 9, None, None).await.unwrap_err();
        assert!(matches!(err, SourceError::Lookup(_)));

        let err = store.resolve(3, 1, None, None).await.unwrap_err();
        assert!(matches!(err, SourceError::Lookup(_)));
    }

    #[tokio::test]
    async fn missing_edition_file_is_a_lookup_error() {
        let (_dir, store) = store_with_fixtures();
        let err = store
            .resolve(1, 1, Some("ar.muyassar"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Lookup(_)));
    }

    #[tokio::test]
    async fn surah_list_counts_ayahs() {
        let (_dir, store) = store_with_fixtures();
        let surahs = store.surah_list().await.unwrap();
        assert_eq!(surahs.len(), 1);
        assert_eq!(surahs[0].total_ayahs, 2);
        assert_eq!(surahs[0].english_name, "Al-Faatiha");
    }
}
