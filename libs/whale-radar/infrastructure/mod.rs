//! Infrastructure Layer
//!
//! Configuration loading and logging setup.

pub mod config;
pub mod logging;

pub use config::{ConfigError, FeedConfig, RadarConfig};
pub use logging::{init_tracing, init_tracing_with_level};
