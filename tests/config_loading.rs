//! Integration test: Configuration utilities
//!
//! Tests the bin_common configuration loading functionality.

use std::env;
use whale_radar_dashboard::bin_common::{load_config_from_env, ConfigType};
use whale_radar_dashboard::whale_radar::RadarConfig;

#[test]
fn test_radar_config_default_path() {
    // Clear env var to test default
    env::remove_var("RADAR_CONFIG_PATH");

    let config_path = load_config_from_env(ConfigType::Radar);
    assert_eq!(config_path.to_str().unwrap(), "config/radar_config.yaml");
}

#[test]
fn test_custom_config() {
    let custom = ConfigType::Custom("custom/path.yaml".to_string());
    let config_path = load_config_from_env(custom);

    assert_eq!(config_path.to_str().unwrap(), "custom/path.yaml");
}

#[test]
fn test_config_type_env_var_names() {
    assert_eq!(ConfigType::Radar.env_var_name(), "RADAR_CONFIG_PATH");
}

#[test]
fn test_shipped_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/radar_config.yaml");
    let config = RadarConfig::load(path).unwrap();

    assert_eq!(config.feed.tick_interval_ms, 3000);
    assert_eq!(config.feed.pulse_duration_ms, 1000);
    assert_eq!(config.feed.capacity, 50);
    assert_eq!(config.feed.seed_count, 15);
}
