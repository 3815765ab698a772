use std::time::Duration;
use tokio::time::{self, timeout};

use super::*;

#[tokio::test(start_paused = true)]
async fn fires_after_duration() {
    let mut deadline = Deadline::start(Duration::from_secs(10));
    assert!(!deadline.is_expired());

    let early = timeout(Duration::from_secs(9), deadline.expired()).await;
    assert!(early.is_err());
    assert!(!deadline.is_expired());

    let on_time = timeout(Duration::from_secs(2), deadline.expired()).await;
    assert!(on_time.is_ok());
    assert!(deadline.is_expired());
}

#[tokio::test(start_paused = true)]
async fn stays_expired() {
    let mut deadline = Deadline::start(Duration::from_secs(1));
    deadline.expired().await;
    time::advance(Duration::from_secs(60)).await;
    assert!(deadline.is_expired());
    let again = timeout(Duration::from_millis(1), deadline.expired()).await;
    assert!(again.is_ok());
}

#[tokio::test(start_paused = true)]
async fn is_expired_without_waiting() {
    let mut deadline = Deadline::start(Duration::from_secs(5));
    time::sleep(Duration::from_secs(6)).await;
    assert!(deadline.is_expired());
}

#[tokio::test(start_paused = true)]
async fn timer_finishes_after_firing() {
    let mut deadline = Deadline::start(Duration::from_secs(1));
    deadline.expired().await;
    tokio::task::yield_now().await;
    assert!(deadline.timer.is_finished());
}

#[tokio::test(start_paused = true)]
async fn stopping_early_is_harmless() {
    let deadline = Deadline::start(Duration::from_secs(5));
    assert!(!deadline.timer.is_finished());
    deadline.stop();
    // Nothing is left to observe the expiry; running the clock past it must not block or panic.
    time::sleep(Duration::from_secs(10)).await;
}
