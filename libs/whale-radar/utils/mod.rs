//! Common utilities for whale radar binaries

mod heartbeat;
mod shutdown;

pub use heartbeat::Heartbeat;
pub use shutdown::ShutdownManager;
