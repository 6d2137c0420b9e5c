use crate::error::{SweepError, SweepResult};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Glob patterns; matching paths are never reported or descended into.
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    #[serde(default = "default_old_download_days")]
    pub old_download_days: u32,
    #[serde(default = "default_docker_min_size")]
    pub docker_min_size_bytes: u64,
}

fn default_old_download_days() -> u32 {
    30
}

fn default_docker_min_size() -> u64 {
    100 * 1024 * 1024
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excluded_paths: Vec::new(),
            old_download_days: default_old_download_days(),
            docker_min_size_bytes: default_docker_min_size(),
        }
    }
}

impl ScanConfig {
    pub fn exclude_patterns(&self) -> SweepResult<Vec<Pattern>> {
        self.excluded_paths
            .iter()
            .map(|raw| {
                Pattern::new(raw).map_err(|source| SweepError::ExcludePattern {
                    pattern: raw.clone(),
                    source,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_tick_rate() -> u64 {
    100
}

fn default_page_size() -> usize {
    10
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> SweepResult<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config = Self::from_toml(&content)?;
            config.scan.exclude_patterns()?;
            Ok(config)
        } else {
            let config = Config::default();
            if let Err(e) = config.save() {
                tracing::warn!(path = %config_path.display(), "could not write default config: {e}");
            }
            Ok(config)
        }
    }

    pub fn from_toml(content: &str) -> SweepResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> SweepResult<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("homesweep")
            .join("config.toml")
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("homesweep")
    }
}
