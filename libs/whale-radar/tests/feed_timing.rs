//! Feed service timing tests
//!
//! Run on a paused tokio clock so tick and pulse timers fire deterministically.

mod common;

use std::time::Duration;

use common::{fixtures, ScriptedSource};
use whale_radar::domain::TxKind;
use whale_radar::infrastructure::FeedConfig;
use whale_radar::FeedService;

/// Sleep just past `ms` from now so any timer due at `ms` has fired
async fn advance_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn seeded_snapshot_is_published_before_first_tick() {
    let handle = FeedService::from_config(&fixtures::feed_config()).spawn();

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.transactions.len(), 15);
    assert!(!snapshot.pulse_active);

    // Nothing happens before the first period elapses
    advance_ms(2_990).await;
    assert_eq!(handle.snapshot().version, 1);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn tick_prepends_and_pulses() {
    let handle = FeedService::from_config(&fixtures::feed_config()).spawn();
    let seeded = handle.snapshot();

    advance_ms(3_010).await;
    let after_tick = handle.snapshot();
    crate::verbose_println!("after tick: version {}", after_tick.version);

    assert_eq!(after_tick.version, 2);
    assert_eq!(after_tick.transactions.len(), 16);
    assert!(after_tick.pulse_active);
    // Old head is now second
    assert_eq!(after_tick.transactions[1].id(), seeded.transactions[0].id());
    assert!(after_tick.transactions[0].id() > seeded.transactions[0].id());

    // Pulse clears 1000ms after the tick, buffer unchanged
    advance_ms(1_000).await;
    let cleared = handle.snapshot();
    assert_eq!(cleared.version, 3);
    assert!(!cleared.pulse_active);
    assert_eq!(cleared.transactions.len(), 16);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn retrigger_before_clear_keeps_pulse_active() {
    // Tick faster than the pulse clears
    let config = FeedConfig {
        tick_interval_ms: 500,
        pulse_duration_ms: 1_000,
        ..fixtures::feed_config()
    };
    let handle = FeedService::from_config(&config).spawn();

    advance_ms(510).await;
    assert!(handle.snapshot().pulse_active);
    advance_ms(500).await;
    assert!(handle.snapshot().pulse_active);
    advance_ms(500).await;
    assert!(handle.snapshot().pulse_active);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn buffer_saturates_at_capacity() {
    let config = FeedConfig {
        capacity: 20,
        ..fixtures::feed_config()
    };
    let handle = FeedService::from_config(&config).spawn();
    // Stay clear of tick instants
    advance_ms(10).await;

    for expected in 16..=20 {
        advance_ms(3_000).await;
        assert_eq!(handle.snapshot().transactions.len(), expected);
    }

    for _ in 0..5 {
        advance_ms(3_000).await;
        assert_eq!(handle.snapshot().transactions.len(), 20);
    }

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn stats_track_the_published_buffer() {
    let config = FeedConfig {
        seed_count: 0,
        ..fixtures::feed_config()
    };
    let handle = FeedService::new(ScriptedSource::buys(), &config).spawn();

    let empty = handle.snapshot();
    assert!(empty.transactions.is_empty());
    assert_eq!(empty.stats.buy_pressure, 50.0);

    advance_ms(3_010).await;
    advance_ms(3_000).await;

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.transactions.len(), 2);
    assert_eq!(snapshot.stats.buy_count, 2);
    assert_eq!(snapshot.stats.buy_pressure, 100.0);
    assert_eq!(snapshot.stats.total_volume, 2.0 * 100.0 * 3200.0);
    assert!(snapshot.transactions.iter().all(|t| t.kind() == TxKind::Buy));

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_every_version() {
    let handle = FeedService::from_config(&fixtures::feed_config()).spawn();
    let mut updates = handle.subscribe();
    assert_eq!(*updates.borrow_and_update(), 1);

    updates.changed().await.unwrap();
    assert_eq!(*updates.borrow_and_update(), 2);
    assert!(handle.snapshot().pulse_active);

    updates.changed().await.unwrap();
    assert_eq!(*updates.borrow_and_update(), 3);
    assert!(!handle.snapshot().pulse_active);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_updates() {
    let handle = FeedService::from_config(&fixtures::feed_config()).spawn();
    let shared = handle.shared();

    advance_ms(3_010).await;
    let version = shared.read().version;

    handle.shutdown().await;
    advance_ms(30_000).await;
    assert_eq!(shared.read().version, version);
}

#[tokio::test(start_paused = true)]
async fn dropping_handle_aborts_feed() {
    let handle = FeedService::from_config(&fixtures::feed_config()).spawn();
    let shared = handle.shared();
    drop(handle);

    advance_ms(30_000).await;
    assert_eq!(shared.read().version, 1);
}
