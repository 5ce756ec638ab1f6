use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Whale radar configuration
///
/// Every field has a default equal to the reference dashboard, so an empty
/// file (or no file) reproduces it exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Seconds between stats summaries in the headless runner
    #[serde(default = "default_heartbeat_interval")]
    pub heartbeat_interval_secs: u64,
    /// Print each new transaction as a JSON line on stdout
    #[serde(default)]
    pub emit_json: bool,
}

/// Stream timing and sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_pulse_duration_ms")]
    pub pulse_duration_ms: u64,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
    /// Fixed RNG seed for reproducible streams; entropy when absent
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_heartbeat_interval() -> u64 {
    60
}

fn default_tick_interval_ms() -> u64 {
    3000
}

fn default_pulse_duration_ms() -> u64 {
    1000
}

fn default_capacity() -> usize {
    50
}

fn default_seed_count() -> usize {
    15
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            pulse_duration_ms: default_pulse_duration_ms(),
            capacity: default_capacity(),
            seed_count: default_seed_count(),
            rng_seed: None,
        }
    }
}

impl FeedConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn pulse_duration(&self) -> Duration {
        Duration::from_millis(self.pulse_duration_ms)
    }
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            log_level: default_log_level(),
            heartbeat_interval_secs: default_heartbeat_interval(),
            emit_json: false,
        }
    }
}

impl RadarConfig {
    /// Load configuration from YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        Self::from_yaml(&yaml_content)
    }

    /// Load from YAML, or fall back to defaults when the file does not exist
    pub fn load_or_default(config_path: impl AsRef<Path>) -> Result<Self> {
        let path = config_path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            let mut config = Self::default();
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        let mut config: RadarConfig = if yaml.trim().is_empty() {
            RadarConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("RADAR_LOG_LEVEL") {
            info!("Overriding log level from environment variable");
            self.log_level = level;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.feed.capacity == 0 {
            return Err(ConfigError::ValidationError(
                "feed.capacity must be greater than 0".to_string(),
            ));
        }

        if self.feed.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationError(
                "feed.tick_interval_ms must be greater than 0".to_string(),
            ));
        }

        if self.feed.pulse_duration_ms == 0 {
            return Err(ConfigError::ValidationError(
                "feed.pulse_duration_ms must be greater than 0".to_string(),
            ));
        }

        if self.heartbeat_interval_secs == 0 {
            return Err(ConfigError::ValidationError(
                "heartbeat_interval_secs must be greater than 0".to_string(),
            ));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }

    /// Log configuration summary
    pub fn log(&self) {
        info!("Configuration loaded:");
        info!("  Tick interval: {} ms", self.feed.tick_interval_ms);
        info!("  Pulse duration: {} ms", self.feed.pulse_duration_ms);
        info!("  Buffer capacity: {}", self.feed.capacity);
        info!("  Seed count: {}", self.feed.seed_count);
        match self.feed.rng_seed {
            Some(seed) => info!("  RNG seed: {}", seed),
            None => info!("  RNG seed: entropy"),
        }
        info!("  Heartbeat: {} s", self.heartbeat_interval_secs);
        info!("  Log level: {}", self.log_level);
        info!("  JSON output: {}", self.emit_json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference() {
        let config = RadarConfig::default();
        assert_eq!(config.feed.tick_interval(), Duration::from_millis(3000));
        assert_eq!(config.feed.pulse_duration(), Duration::from_millis(1000));
        assert_eq!(config.feed.capacity, 50);
        assert_eq!(config.feed.seed_count, 15);
        assert!(config.feed.rng_seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: RadarConfig = serde_yaml::from_str("feed:\n  capacity: 20\n").unwrap();
        assert_eq!(config.feed.capacity, 20);
        assert_eq!(config.feed.seed_count, 15);
        assert_eq!(config.feed.tick_interval_ms, 3000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let mut config = RadarConfig::default();
        config.feed.capacity = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_zero_tick() {
        let mut config = RadarConfig::default();
        config.feed.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut config = RadarConfig::default();
        config.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }
}
