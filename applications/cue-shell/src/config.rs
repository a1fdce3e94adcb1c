/// Shell configuration
use crate::error::{Result, ShellError};
use cue_playlist::PlaylistConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cue.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub playlist: PlaylistConfig,

    /// Initial tracks, in canonical order
    #[serde(default)]
    pub tracks: Vec<String>,

    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl ShellConfig {
    /// Load configuration from file and environment
    ///
    /// `path` defaults to `cue.toml` when that file exists. Environment
    /// variables prefixed with `CUE_` override file values, e.g.
    /// `CUE_PLAYLIST_REPEAT=all` or `CUE_TRACKS=a,b,c`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        if path.is_some() || config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CUE")
                .separator("_")
                .list_separator(",")
                .with_list_parse_key("tracks")
                .try_parsing(true),
        );

        Self::build(settings)
    }

    /// Parse configuration from TOML text only
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml));
        Self::build(settings)
    }

    fn build(settings: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config = settings
            .build()
            .map_err(|e| ShellError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ShellError::Config(e.to_string()))
    }
}

fn default_prompt() -> String {
    "cue> ".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            playlist: PlaylistConfig::default(),
            tracks: Vec::new(),
            prompt: default_prompt(),
        }
    }
}
