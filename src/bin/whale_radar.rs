//! Whale Radar - headless feed runner
//!
//! Runs the simulated whale feed without a terminal UI: every new
//! transaction is logged (or printed as a JSON line) and a stats summary is
//! logged on each heartbeat.

use anyhow::Result;
use tracing::{debug, info, warn};
use whale_radar_dashboard::bin_common::{
    has_flag, load_config_from_env, parse_args, BinaryRunner, ConfigType, RunConfig,
};
use whale_radar_dashboard::whale_radar::application::format::{
    format_amount, format_net_flow, format_usd, format_volume,
};
use whale_radar_dashboard::whale_radar::{
    init_tracing_with_level, DashboardSnapshot, FeedHandle, FeedService, Heartbeat, RadarConfig,
    ShutdownManager, Transaction, TxId,
};

struct RadarRunner {
    run_config: RunConfig,
    feed: Option<FeedHandle>,
    shutdown: ShutdownManager,
    heartbeat: Heartbeat,
    seeded: bool,
    last_head: Option<TxId>,
    observed: u64,
}

impl RadarRunner {
    fn new(run_config: RunConfig, feed: FeedHandle, shutdown: ShutdownManager) -> Self {
        let heartbeat = Heartbeat::from_secs(run_config.heartbeat_interval_secs);
        Self {
            run_config,
            feed: Some(feed),
            shutdown,
            heartbeat,
            seeded: false,
            last_head: None,
            observed: 0,
        }
    }

    fn on_update(&mut self, snapshot: &DashboardSnapshot) -> Result<()> {
        if !self.seeded {
            info!(
                "Seeded {} transactions (version {})",
                snapshot.transactions.len(),
                snapshot.version
            );
            self.seeded = true;
            self.last_head = snapshot.head().map(|t| t.id());
        } else {
            let fresh = self.unreported(snapshot);
            if fresh.is_empty() {
                debug!(
                    "Snapshot v{}: pulse {}",
                    snapshot.version,
                    if snapshot.pulse_active { "on" } else { "off" }
                );
            }
            // Oldest first so output follows generation order
            for tx in fresh.into_iter().rev() {
                self.observed += 1;
                self.report(tx)?;
                self.last_head = Some(tx.id());
            }
        }

        if self.heartbeat.poll() {
            log_stats(snapshot);
        }
        Ok(())
    }

    /// Transactions newer than the last reported one, newest first
    fn unreported<'a>(&self, snapshot: &'a DashboardSnapshot) -> Vec<&'a Transaction> {
        snapshot
            .transactions
            .iter()
            .take_while(|tx| self.last_head.map_or(true, |last| tx.id() > last))
            .collect()
    }

    fn report(&self, tx: &Transaction) -> Result<()> {
        if self.run_config.emit_json {
            println!("{}", serde_json::to_string(tx)?);
            return Ok(());
        }

        let route = match (tx.exchange(), tx.direction()) {
            (Some(exchange), Some(direction)) => format!(" {} {}", direction, exchange),
            _ => String::new(),
        };
        info!(
            "{} {:<7} {} {} {} ({}){}",
            tx.id(),
            tx.kind().label(),
            tx.wallet(),
            format_amount(tx.amount()),
            tx.token(),
            format_usd(tx.usd_value()),
            route
        );
        Ok(())
    }
}

impl BinaryRunner for RadarRunner {
    async fn run(&mut self) -> Result<()> {
        let Some(feed) = self.feed.take() else {
            anyhow::bail!("feed already stopped");
        };
        let mut updates = feed.subscribe();
        let shutdown = self.shutdown.clone();

        // The seeded snapshot is already published
        self.on_update(&feed.snapshot())?;
        let _ = updates.borrow_and_update();

        loop {
            tokio::select! {
                _ = shutdown.wait() => break,
                changed = updates.changed() => {
                    if changed.is_err() {
                        warn!("Feed task ended unexpectedly");
                        break;
                    }
                    let snapshot = feed.snapshot();
                    self.on_update(&snapshot)?;
                }
            }
        }

        let last = feed.snapshot();
        feed.shutdown().await;
        log_stats(&last);
        Ok(())
    }

    fn config(&self) -> &RunConfig {
        &self.run_config
    }

    fn summary(&self) -> Option<String> {
        Some(format!("Observed {} new transactions", self.observed))
    }
}

fn log_stats(snapshot: &DashboardSnapshot) {
    let stats = &snapshot.stats;
    info!(
        "Stats: {} txs | volume {} | buys {} | sells {} | unusual {} | buy pressure {:.0}%",
        snapshot.transactions.len(),
        format_volume(stats.total_volume),
        stats.buy_count,
        stats.sell_count,
        stats.unusual_count,
        stats.buy_pressure
    );
    for flow in &stats.flows {
        info!(
            "  {:<8} in {} | out {} | net {}",
            flow.exchange,
            format_usd(flow.inflow),
            format_usd(flow.outflow),
            format_net_flow(flow.net)
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load config first (before logging is initialized)
    let config_path = load_config_from_env(ConfigType::Radar);
    let mut config = RadarConfig::load_or_default(&config_path)?;
    if has_flag(&parse_args(), "--json") {
        config.emit_json = true;
    }

    // Initialize logging with configured level
    init_tracing_with_level(&config.log_level);
    info!("Config path: {}", config_path.display());
    config.log();

    let shutdown = ShutdownManager::new();
    shutdown.spawn_signal_handler();

    let feed = FeedService::from_config(&config.feed).spawn();
    let run_config = RunConfig::from_radar_config("Whale Radar", &config);

    let mut runner = RadarRunner::new(run_config, feed, shutdown);
    runner.execute().await
}
