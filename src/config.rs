//! Application configuration
//!
//! Read from `config.toml` in the data directory. A missing file or
//! missing keys fall back to defaults, so a fresh install needs no setup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::flashcards::DEFAULT_KNOWN_REVIEW_CAP;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub study: StudyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Known cards leave the default study rotation after this many
    /// reviews. Raising it keeps them in refresher rotation longer.
    pub known_review_cap: u32,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            known_review_cap: DEFAULT_KNOWN_REVIEW_CAP,
        }
    }
}

impl Config {
    /// Load from `<data_dir>/config.toml`, falling back to defaults.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("config.toml");
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };

        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path());
        assert_eq!(config.study.known_review_cap, DEFAULT_KNOWN_REVIEW_CAP);
    }

    #[test]
    fn cap_override_is_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[study]\nknown_review_cap = 9\n",
        )
        .unwrap();

        let config = Config::load(dir.path());
        assert_eq!(config.study.known_review_cap, 9);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "[study\nnot toml").unwrap();

        let config = Config::load(dir.path());
        assert_eq!(config.study.known_review_cap, DEFAULT_KNOWN_REVIEW_CAP);
    }
}
