//! Settings file loading.
//!
//! ```toml
//! [pipeline]
//! min_terms = 4
//! granularity = "whole-document"   # or "per-paragraph"
//! use_lexicon = true
//! min_word_len = 3
//! max_word_len = 64
//! blacklist = ["a", "an", "the"]
//!
//! [pipeline.markers]
//! start = ["*** START OF "]
//! end = ["*** END OF "]
//!
//! [paths]
//! lexicon = "lexicon"
//! output = "cleanbooks"
//! dictionary = "words.txt"
//! ```

use rootword::PipelineConfig;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name looked up in the working directory when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "rootword.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything a `rootword` invocation can be configured with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pipeline: PipelineConfig,
    pub paths: PathSettings,
}

/// Where the lexicon, outputs and dictionary live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub lexicon: PathBuf,
    pub output: PathBuf,
    pub dictionary: Option<PathBuf>,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            lexicon: PathBuf::from("lexicon"),
            output: PathBuf::from("cleanbooks"),
            dictionary: None,
        }
    }
}

impl Settings {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
