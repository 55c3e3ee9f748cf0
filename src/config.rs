//! Configuration file loading
//!
//! A small `config.toml` selects the content source (remote API vs. local
//! JSON bundle), the range seeding policy and where state is persisted.
//! Missing file or missing keys fall back to defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::RangeSeed;

pub const DEFAULT_API_BASE: &str = "https://api.alquran.cloud/v1";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub playback: PlaybackConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Remote,
    Local,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub api_base: String,
    /// Directory holding the pre-fetched JSON bundle for the local source.
    pub data_dir: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Remote,
            api_base: DEFAULT_API_BASE.to_string(),
            data_dir: PathBuf::from("data"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub range_seed: RangeSeed,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory for snapshots and theme.
    pub state_dir: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let raw = r#"
            [source]
            kind = "local"
            data_dir = "bundle"

            [playback]
            range_seed = "start"

            [storage]
            state_dir = "/tmp/munir-rs-test"
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.source.kind, SourceKind::Local);
        assert_eq!(config.source.data_dir, PathBuf::from("bundle"));
        assert_eq!(config.source.api_base, DEFAULT_API_BASE);
        assert_eq!(config.playback.range_seed, RangeSeed::Start);
        assert!(config.storage.state_dir.is_some());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.source.kind, SourceKind::Remote);
        assert_eq!(config.playback.range_seed, RangeSeed::Current);
        assert!(config.storage.state_dir.is_none());
    }

    #[test]
    fn missing_file_is_defaults() {
        let config = Config::load(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.source.kind, SourceKind::Remote);
    }
}
