use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::passes::{DataSource, DotfilePaths, FixtureSource, LiveSource, DEFAULT_API_BASE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub web: WebConfig,
    pub satellites: Vec<u32>,
    pub source: SourceConfig,
    pub dotfiles: DotfilePaths,
    pub page: PageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig::default(),
            // ISS, TianGong, HST
            satellites: vec![25544, 48274, 20580],
            source: SourceConfig::default(),
            dotfiles: DotfilePaths::default(),
            page: PageConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8081".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMode {
    #[default]
    Offline,
    Live,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub mode: SourceMode,
    pub fixture_dir: PathBuf,
    pub api_base: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::Offline,
            fixture_dir: PathBuf::from("fixtures"),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub heading: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Satellite Watcher".to_string(),
            heading: "Satellite Watcher".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Like `from_file`, but a missing file yields the defaults.
    pub fn from_file_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            log::info!("No config at {}, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn data_source(&self) -> DataSource {
        match self.source.mode {
            SourceMode::Offline => {
                DataSource::Fixture(FixtureSource::new(self.source.fixture_dir.clone()))
            }
            SourceMode::Live => DataSource::Live(LiveSource::new(
                self.source.api_base.clone(),
                self.dotfiles.clone(),
            )),
        }
    }
}
