//! Content data resolved by the loaders and shown in the reader pane

/// One entry of the surah catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurahInfo {
    pub number: u32,
    pub english_name: String,
    pub arabic_name: String,
    pub total_ayahs: u32,
}

impl SurahInfo {
    /// List label matching the web app: `1. Al-Faatiha (الفاتحة)`.
    pub fn label(&self) -> String {
        format!("{}. {} ({})", self.number, self.english_name, self.arabic_name)
    }
}

/// A text or audio edition from the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edition {
    pub identifier: String,
    pub name: String,
}

/// Everything needed to render and play one ayah.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AyahContent {
    pub arabic_text: String,
    pub translation_text: Option<String>,
    /// Display name of the edition the translation came from.
    pub translation_edition: Option<String>,
    pub audio_url: Option<String>,
    pub surah_english_name: String,
    pub surah_arabic_name: String,
    pub number_in_surah: u32,
    pub total_ayahs: u32,
}

/// Catalogs plus the currently displayed ayah.
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub surahs: Vec<SurahInfo>,
    pub text_editions: Vec<Edition>,
    pub audio_editions: Vec<Edition>,
    pub current: Option<AyahContent>,
    pub is_loading: bool,
}
