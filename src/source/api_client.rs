//! alquran.cloud API client

use serde::Deserialize;

use crate::model::{AyahContent, Edition, SurahInfo};

use super::{filter_allowed, SourceError, ARABIC_TEXT_EDITION};

/// Editions offered in the tafsir picker. `quran-uthmani` is fetched for the
/// Arabic text but never shown as a translation choice.
const TEXT_ALLOW_LIST: &[&str] = &[
    "ar.baghawi",
    "ar.jalalayn",
    "ar.miqbas",
    "ar.muyassar",
    "ar.qurtubi",
    "ar.waseet",
];

const AUDIO_ALLOW_LIST: &[&str] = &[
    "ar.abdullahbasfar",
    "ar.abdulsamad",
    "ar.abdurrahmaansudais",
    "ar.ahmedajamy",
    "ar.alafasy",
    "ar.aymanswoaid",
    "ar.hanirifai",
    "ar.hudhaify",
    "ar.husary",
    "ar.husarymujawwad",
    "ar.ibrahimakhbar",
    "ar.mahermuaiqly",
    "ar.muhammadayyoub",
    "ar.muhammadjibreel",
    "ar.saoodshuraym",
    "ar.shaatree",
];

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SurahEntry {
    number: u32,
    name: String,
    english_name: String,
    number_of_ayahs: u32,
}

#[derive(Debug, Deserialize)]
struct EditionEntry {
    identifier: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AyahEntry {
    text: Option<String>,
    audio: Option<String>,
    number_in_surah: u32,
    surah: SurahEntry,
    edition: Option<EditionEntry>,
}

impl From<SurahEntry> for SurahInfo {
    fn from(entry: SurahEntry) -> Self {
        SurahInfo {
            number: entry.number,
            english_name: entry.english_name,
            arabic_name: entry.name,
            total_ayahs: entry.number_of_ayahs,
        }
    }
}

impl From<EditionEntry> for Edition {
    fn from(entry: EditionEntry) -> Self {
        Edition {
            identifier: entry.identifier,
            name: entry.name,
        }
    }
}

// ============================================================================
// Client
// ============================================================================

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "API request");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "API request failed");
            return Err(SourceError::Api(status.as_u16()));
        }
        let envelope: ApiEnvelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    pub async fn surah_list(&self) -> Result<Vec<SurahInfo>, SourceError> {
        let surahs: Vec<SurahEntry> = self.get("/surah").await?;
        tracing::info!(count = surahs.len(), "Loaded surah catalog");
        Ok(surahs.into_iter().map(Into::into).collect())
    }

    pub async fn edition_catalog(&self) -> Result<(Vec<Edition>, Vec<Edition>), SourceError> {
        let (text, audio) = futures::future::try_join(
            self.get::<Vec<EditionEntry>>("/edition?format=text"),
            self.get::<Vec<EditionEntry>>("/edition?format=audio&type=versebyverse"),
        )
        .await?;

        let text = filter_allowed(text.into_iter().map(Into::into).collect(), TEXT_ALLOW_LIST);
        let audio = filter_allowed(audio.into_iter().map(Into::into).collect(), AUDIO_ALLOW_LIST);
        tracing::info!(
            text = text.len(),
            audio = audio.len(),
            "Loaded edition catalogs"
        );
        Ok((text, audio))
    }

    async fn ayah(&self, surah: u32, ayah: u32, edition: &str) -> Result<AyahEntry, SourceError> {
        self.get(&format!("/ayah/{surah}:{ayah}/{edition}")).await
    }

    pub async fn resolve(
        &self,
        surah: u32,
        ayah: u32,
        edition: Option<&str>,
        audio_edition: Option<&str>,
    ) -> Result<AyahContent, SourceError> {
        let arabic = self.ayah(surah, ayah, ARABIC_TEXT_EDITION).await?;

        let mut content = AyahContent {
            arabic_text: arabic.text.unwrap_or_default(),
            number_in_surah: arabic.number_in_surah,
            total_ayahs: arabic.surah.number_of_ayahs,
            surah_english_name: arabic.surah.english_name,
            surah_arabic_name: arabic.surah.name,
            ..Default::default()
        };

        if let Some(edition) = edition {
            let translation = self.ayah(surah, ayah, edition).await?;
            content.translation_text = translation.text;
            content.translation_edition = translation.edition.map(|e| e.name);
        }

        if let Some(audio_edition) = audio_edition {
            let audio = self.ayah(surah, ayah, audio_edition).await?;
            content.audio_url = audio.audio;
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ayah_response_shape() {
        let raw = r#"{
            "code": 200,
            "status": "OK",
            "data": {
                "number": 262,
                "text": "ٱللَّهُ لَآ إِلَـٰهَ إِلَّا هُوَ",
                "numberInSurah": 255,
                "surah": {
                    "number": 2,
                    "name": "سورة البقرة",
                    "englishName": "Al-Baqara",
                    "numberOfAyahs": 286
                },
                "edition": {
                    "identifier": "quran-uthmani",
                    "name": "القرآن الكريم برسم العثماني"
                }
            }
        }"#;
        let envelope: ApiEnvelope<AyahEntry> = serde_json::from_str(raw).unwrap();
        let entry = envelope.data;
        assert_eq!(entry.number_in_surah, 255);
        assert_eq!(entry.surah.english_name, "Al-Baqara");
        assert_eq!(entry.surah.number_of_ayahs, 286);
        assert!(entry.audio.is_none());
    }

    #[test]
    fn parses_audio_response_shape() {
        let raw = r#"{
            "data": {
                "number": 1,
                "audio": "https://cdn.islamic.network/quran/audio/128/ar.alafasy/1.mp3",
                "numberInSurah": 1,
                "surah": {
                    "number": 1,
                    "name": "سورة الفاتحة",
                    "englishName": "Al-Faatiha",
                    "numberOfAyahs": 7
                }
            }
        }"#;
        let envelope: ApiEnvelope<AyahEntry> = serde_json::from_str(raw).unwrap();
        assert!(envelope.data.audio.is_some());
        assert!(envelope.data.edition.is_none());
    }

    #[test]
    fn parses_surah_catalog_shape() {
        let raw = r#"{
            "data": [
                {"number": 1, "name": "سورة الفاتحة", "englishName": "Al-Faatiha", "numberOfAyahs": 7},
                {"number": 2, "name": "سورة البقرة", "englishName": "Al-Baqara", "numberOfAyahs": 286}
            ]
        }"#;
        let envelope: ApiEnvelope<Vec<SurahEntry>> = serde_json::from_str(raw).unwrap();
        let surahs: Vec<SurahInfo> = envelope.data.into_iter().map(Into::into).collect();
        assert_eq!(surahs.len(), 2);
        assert_eq!(surahs[0].label(), "1. Al-Faatiha (سورة الفاتحة)");
    }

    #[test]
    fn uthmani_is_never_a_tafsir_choice() {
        assert!(!TEXT_ALLOW_LIST.contains(&ARABIC_TEXT_EDITION));
    }
}
