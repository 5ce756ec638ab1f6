//! Whale Radar Dashboard - Main Library
//!
//! Binary-facing crate for the simulated whale transaction dashboard.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (CLI, runners)
//! - **whale_radar**: Feed, stats and visualizer (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use whale_radar_dashboard::bin_common::{load_config_from_env, ConfigType};
//! use whale_radar_dashboard::whale_radar::FeedService;
//! ```

// Re-export workspace libraries for convenience
pub use whale_radar;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables
    //!
    //! Provides shared functionality for the presentation layer (binaries).

    pub mod cli;
    pub mod runner;

    pub use cli::{has_flag, load_config_from_env, parse_args, ConfigType};
    pub use runner::{BinaryRunner, RunConfig};
}
