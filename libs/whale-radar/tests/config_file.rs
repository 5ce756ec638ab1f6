//! Integration test: loading radar configuration from disk

use std::io::Write;

use tempfile::NamedTempFile;
use whale_radar::{ConfigError, RadarConfig};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
feed:
  tick_interval_ms: 500
  pulse_duration_ms: 250
  capacity: 30
  seed_count: 5
  rng_seed: 1234
heartbeat_interval_secs: 10
emit_json: true
"#,
    );

    let config = RadarConfig::load(file.path()).unwrap();
    assert_eq!(config.feed.tick_interval_ms, 500);
    assert_eq!(config.feed.pulse_duration_ms, 250);
    assert_eq!(config.feed.capacity, 30);
    assert_eq!(config.feed.seed_count, 5);
    assert_eq!(config.feed.rng_seed, Some(1234));
    assert_eq!(config.heartbeat_interval_secs, 10);
    assert!(config.emit_json);
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = RadarConfig::load(file.path()).unwrap();
    assert_eq!(config.feed.capacity, 50);
    assert_eq!(config.feed.tick_interval_ms, 3000);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    assert!(matches!(RadarConfig::load(&path), Err(ConfigError::FileError(_))));

    let config = RadarConfig::load_or_default(&path).unwrap();
    assert_eq!(config.feed.seed_count, 15);
    assert!(!config.emit_json);
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config("feed:\n  capacity: 0\n");
    assert!(matches!(
        RadarConfig::load(file.path()),
        Err(ConfigError::ValidationError(_))
    ));

    let file = write_config("feed: [not, a, map]\n");
    assert!(matches!(
        RadarConfig::load(file.path()),
        Err(ConfigError::YamlError(_))
    ));
}
