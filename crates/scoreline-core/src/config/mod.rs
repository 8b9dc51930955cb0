mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ScorelineError;
use defaults::*;

/// Top-level scoreline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoreline: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub learning: LearningConfig,
    #[serde(default)]
    pub memo: MemoConfig,
}

/// General process settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file path, relative to `data_dir` unless absolute. Empty = stderr only.
    #[serde(default)]
    pub log_file: String,
}

impl GeneralConfig {
    /// Expand `~/`, and place relative paths under `data_dir`.
    pub fn resolve(&self, path: &str) -> String {
        let expanded = shellexpand(path);
        if Path::new(&expanded).is_absolute() {
            return expanded;
        }
        Path::new(&shellexpand(&self.data_dir))
            .join(expanded)
            .to_string_lossy()
            .into_owned()
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            log_file: String::new(),
        }
    }
}

/// Durable storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// "sqlite" or "memory".
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    #[serde(default = "default_db_path")]
    pub db_path: String,
    /// Namespace for mapping keys inside the store.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            db_path: default_db_path(),
            key_prefix: default_key_prefix(),
        }
    }
}

/// Longest accepted eviction recency window, in days.
pub const MAX_RECENCY_WINDOW_DAYS: i64 = 3650;

/// Learned mapping store bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Hard cap: the store never holds more mappings than this; crossing it
    /// runs an eviction pass.
    #[serde(default = "default_max_mappings")]
    pub max_mappings: usize,
    /// Soft cap: an eviction pass trims the store back to this size.
    #[serde(default = "default_cleanup_threshold")]
    pub cleanup_threshold: usize,
    /// Mappings used within this many days score double during eviction.
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_mappings: default_max_mappings(),
            cleanup_threshold: default_cleanup_threshold(),
            recency_window_days: default_recency_window_days(),
        }
    }
}

/// Background learner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Timer-driven drain interval.
    #[serde(default = "default_learning_interval")]
    pub interval_secs: u64,
    /// Records taken per drain.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Queue length that forces a drain before the next tick.
    #[serde(default = "default_high_water_mark")]
    pub high_water_mark: usize,
    /// Queue length beyond which new records are dropped.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: default_learning_interval(),
            batch_size: default_batch_size(),
            high_water_mark: default_high_water_mark(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

/// Render-pass memo settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoConfig {
    #[serde(default = "default_memo_entries")]
    pub max_entries: usize,
    /// Entries older than this are ignored even inside one pass.
    #[serde(default = "default_memo_ttl")]
    pub ttl_secs: u64,
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            max_entries: default_memo_entries(),
            ttl_secs: default_memo_ttl(),
        }
    }
}

impl Config {
    /// Reject settings the cache cannot honor.
    pub fn validate(&self) -> Result<(), ScorelineError> {
        if self.cache.max_mappings == 0 {
            return Err(ScorelineError::Config(
                "cache.max_mappings must be greater than 0".to_string(),
            ));
        }
        if self.cache.cleanup_threshold == 0 {
            return Err(ScorelineError::Config(
                "cache.cleanup_threshold must be greater than 0".to_string(),
            ));
        }
        if self.cache.cleanup_threshold > self.cache.max_mappings {
            return Err(ScorelineError::Config(format!(
                "cache.cleanup_threshold ({}) must not exceed cache.max_mappings ({})",
                self.cache.cleanup_threshold, self.cache.max_mappings
            )));
        }
        if !(1..=MAX_RECENCY_WINDOW_DAYS).contains(&self.cache.recency_window_days) {
            return Err(ScorelineError::Config(format!(
                "cache.recency_window_days must be between 1 and {MAX_RECENCY_WINDOW_DAYS}, got {}",
                self.cache.recency_window_days
            )));
        }
        if self.learning.batch_size == 0 {
            return Err(ScorelineError::Config(
                "learning.batch_size must be greater than 0".to_string(),
            ));
        }
        if self.learning.interval_secs == 0 {
            return Err(ScorelineError::Config(
                "learning.interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.learning.queue_capacity < self.learning.high_water_mark {
            return Err(ScorelineError::Config(format!(
                "learning.queue_capacity ({}) must be at least learning.high_water_mark ({})",
                self.learning.queue_capacity, self.learning.high_water_mark
            )));
        }
        match self.storage.backend.as_str() {
            "sqlite" | "memory" => {}
            other => {
                return Err(ScorelineError::Config(format!(
                    "unsupported storage backend: {other}"
                )))
            }
        }
        if self.storage.key_prefix.is_empty() || self.storage.key_prefix.contains(':') {
            return Err(ScorelineError::Config(
                "storage.key_prefix must be non-empty and must not contain ':'".to_string(),
            ));
        }
        Ok(())
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, ScorelineError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ScorelineError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| ScorelineError::Config(format!("failed to parse config: {}", e)))?;

    config.validate()?;
    Ok(config)
}
