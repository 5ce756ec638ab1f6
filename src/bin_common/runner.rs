//! Binary runner utilities
//!
//! Provides a standardized way to run binaries with proper
//! logging, heartbeat, and graceful shutdown.

use tracing::info;
use whale_radar::RadarConfig;

/// Configuration for running a binary application
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Name of the binary (for logging)
    pub name: String,
    /// Heartbeat interval in seconds
    pub heartbeat_interval_secs: u64,
    /// Print each transaction as a JSON line
    pub emit_json: bool,
}

impl RunConfig {
    /// Create a new run configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            heartbeat_interval_secs: 60,
            emit_json: false,
        }
    }

    /// Take heartbeat and output settings from a radar config
    pub fn from_radar_config(name: impl Into<String>, config: &RadarConfig) -> Self {
        Self::new(name)
            .with_heartbeat(config.heartbeat_interval_secs)
            .with_json(config.emit_json)
    }

    /// Set heartbeat interval
    pub fn with_heartbeat(mut self, secs: u64) -> Self {
        self.heartbeat_interval_secs = secs;
        self
    }

    /// Enable or disable JSON lines
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.emit_json = enabled;
        self
    }
}

/// Trait for binary applications
///
/// Implement this trait to get the standard banner and shutdown logging
/// around a main loop.
#[allow(async_fn_in_trait)]
pub trait BinaryRunner {
    /// Run the application main loop
    async fn run(&mut self) -> anyhow::Result<()>;

    /// Get the run configuration
    fn config(&self) -> &RunConfig;

    /// Summary line logged on shutdown
    fn summary(&self) -> Option<String> {
        None
    }

    /// Print startup banner
    fn print_banner(&self) {
        let config = self.config();
        info!("");
        info!("========================================");
        info!("Starting {}", config.name);
        info!("Press Ctrl+C to stop");
        info!("========================================");
        info!("");
    }

    /// Print shutdown banner
    fn print_shutdown(&self, stats: Option<&str>) {
        let config = self.config();
        info!("");
        info!("========================================");
        info!("{} stopped gracefully", config.name);
        if let Some(stats) = stats {
            info!("{}", stats);
        }
        info!("========================================");
    }

    /// Execute the binary with proper initialization and cleanup
    async fn execute(&mut self) -> anyhow::Result<()> {
        self.print_banner();
        let result = self.run().await;
        let summary = self.summary();
        self.print_shutdown(summary.as_deref());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_config_builder() {
        let config = RunConfig::new("test-binary")
            .with_heartbeat(120)
            .with_json(true);

        assert_eq!(config.name, "test-binary");
        assert_eq!(config.heartbeat_interval_secs, 120);
        assert!(config.emit_json);
    }

    #[test]
    fn test_from_radar_config() {
        let mut radar = RadarConfig::default();
        radar.heartbeat_interval_secs = 15;
        radar.emit_json = true;

        let config = RunConfig::from_radar_config("radar", &radar);
        assert_eq!(config.heartbeat_interval_secs, 15);
        assert!(config.emit_json);
    }
}
