//! Radar Visualizer
//!
//! Terminal dashboard over the live feed: radar, whale summary, filtered
//! transaction feed and exchange flows. Read-only with respect to the stream.

pub mod app;
pub mod ui;

pub use app::App;
