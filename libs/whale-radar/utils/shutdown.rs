//! Graceful shutdown management

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::Notify;
use tracing::info;

/// Running flag plus a wake-up for tasks parked on `wait`
#[derive(Debug)]
struct Inner {
    running: AtomicBool,
    notify: Notify,
}

/// Manages graceful shutdown for the headless runner
#[derive(Debug, Clone)]
pub struct ShutdownManager {
    inner: Arc<Inner>,
}

impl ShutdownManager {
    /// Create a new shutdown manager in running state
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                running: AtomicBool::new(true),
                notify: Notify::new(),
            }),
        }
    }

    /// Spawn a Ctrl+C signal handler that triggers shutdown
    pub fn spawn_signal_handler(&self) {
        let manager = self.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("");
                info!("Received shutdown signal (Ctrl+C)");
                info!("Shutting down gracefully...");
                manager.trigger();
            }
        });
    }

    /// Request shutdown and wake every waiter
    pub fn trigger(&self) {
        self.inner.running.store(false, Ordering::Release);
        self.inner.notify.notify_waiters();
    }

    /// Check if the process should continue running
    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::Acquire)
    }

    /// Resolve once shutdown has been requested
    pub async fn wait(&self) {
        loop {
            // Register before checking the flag so a trigger in between is not lost
            let notified = self.inner.notify.notified();
            if !self.is_running() {
                return;
            }
            notified.await;
        }
    }
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}
