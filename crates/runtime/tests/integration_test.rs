//! End-to-end runtime tests: real worker, real timers, in-memory store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast::error::RecvError;
use tokio::time::timeout;

use mailstorm_content::MessageCatalog;
use mailstorm_core::{Action, MatchConfig, Phase};
use mailstorm_runtime::{
    InMemoryLeaderboard, LeaderboardStore, MatchEvent, Runtime, RuntimeConfig, RuntimeError,
    RuntimeHandle,
};

const EVENT_WAIT: Duration = Duration::from_secs(10);

fn short_config(total_time: f64) -> RuntimeConfig {
    RuntimeConfig {
        match_config: MatchConfig {
            total_time,
            tick_seconds: 0.01,
        },
        ..RuntimeConfig::default()
    }
}

async fn build_runtime(total_time: f64, store: Arc<InMemoryLeaderboard>) -> Runtime {
    let catalog = MessageCatalog::embedded().unwrap();
    Runtime::builder()
        .config(short_config(total_time))
        .messages(catalog.deal(catalog.len()))
        .leaderboard(store)
        .build()
        .await
        .unwrap()
}

/// Waits for the first event matching `want`, skipping the rest.
async fn wait_for<T>(
    handle: &RuntimeHandle,
    want: impl Fn(&MatchEvent) -> Option<T>,
) -> T {
    let mut rx = handle.subscribe();
    timeout(EVENT_WAIT, async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if let Some(out) = want(&event) {
                        return out;
                    }
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => panic!("event stream closed"),
            }
        }
    })
    .await
    .expect("timed out waiting for event")
}

#[tokio::test]
async fn start_delivers_and_applies_actions() {
    let store = Arc::new(InMemoryLeaderboard::new());
    let runtime = build_runtime(60.0, store).await;
    let handle = runtime.handle();

    handle.start().await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state.phase, Phase::Playing);

    wait_for(&handle, |event| match event {
        MatchEvent::MessageDelivered { id } => Some(id.clone()),
        _ => None,
    })
    .await;

    handle.submit_action(Action::Handle).await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state.history.len(), 1);
    assert_eq!(snapshot.state.history[0].action, Action::Handle);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn actions_before_start_are_silent_no_ops() {
    let store = Arc::new(InMemoryLeaderboard::new());
    let runtime = build_runtime(60.0, store).await;
    let handle = runtime.handle();

    // Still in the start phase: swallowed, not an error.
    handle.submit_action(Action::Ignore).await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state.phase, Phase::Start);
    assert!(snapshot.state.history.is_empty());

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn match_runs_to_the_end_and_records_a_score() {
    let store = Arc::new(InMemoryLeaderboard::new());
    let runtime = build_runtime(2.0, Arc::clone(&store)).await;
    let handle = runtime.handle();

    handle.start().await.unwrap();
    let (score, reason) = wait_for(&handle, |event| match event {
        MatchEvent::MatchEnded { score, reason, .. } => Some((*score, reason.clone())),
        _ => None,
    })
    .await;

    assert!(!reason.is_empty());

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state.phase, Phase::End);
    assert_eq!(snapshot.score, Some(score));
    assert!(snapshot.reflection.is_some());
    assert_eq!(snapshot.leaderboard.len(), 1);
    assert_eq!(snapshot.leaderboard[0].score, score);

    drop(handle);
    runtime.shutdown().await.unwrap();

    // The save is fire-and-forget on the blocking pool; give it a moment.
    for _ in 0..50 {
        if store.load().unwrap().len() == 1 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(store.load().unwrap().len(), 1);
}

#[tokio::test]
async fn restart_after_end_starts_fresh() {
    let store = Arc::new(InMemoryLeaderboard::new());
    let runtime = build_runtime(2.0, store).await;
    let handle = runtime.handle();

    handle.start().await.unwrap();
    wait_for(&handle, |event| {
        matches!(event, MatchEvent::MatchEnded { .. }).then_some(())
    })
    .await;

    handle.restart().await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state.phase, Phase::Playing);
    assert!(snapshot.state.history.is_empty());
    assert!(snapshot.state.end_reason.is_none());
    // The previous match's result is gone from the snapshot.
    assert_eq!(snapshot.score, None);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn builder_rejects_bad_configurations() {
    let catalog = MessageCatalog::embedded().unwrap();

    let err = Runtime::builder()
        .config(short_config(0.0))
        .messages(catalog.deal(10))
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, RuntimeError::InvalidDuration { .. }));

    // A five-minute match needs 115 messages; two will not do.
    let err = Runtime::builder()
        .messages(catalog.deal(2))
        .build()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::CatalogTooSmall {
            available: 2,
            required: 115,
        }
    ));

    let err = Runtime::builder().build().await.unwrap_err();
    assert!(matches!(err, RuntimeError::MessagesNotSet));
}
