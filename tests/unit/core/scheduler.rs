//! Unit tests for the tick scheduler

use trendwatch::core::scheduler::TickScheduler;
use trendwatch::error::SchedulerError;

#[test]
fn test_zero_cadence_is_rejected() {
    let err = TickScheduler::from_interval("momentum", 0).unwrap_err();
    assert!(matches!(err, SchedulerError::Disabled));
}

#[test]
fn test_sub_minute_and_minute_cadences_build() {
    assert!(TickScheduler::from_interval("momentum", 10).is_ok());
    assert!(TickScheduler::from_interval("trend", 60).is_ok());
    assert!(TickScheduler::from_interval("trend", 300).is_ok());
}

#[tokio::test]
async fn test_scheduler_is_idle_until_started() {
    let scheduler = TickScheduler::from_interval("momentum", 10).expect("scheduler");
    assert!(!scheduler.is_running().await);
}

#[tokio::test]
async fn test_stop_clears_the_running_task() {
    let scheduler = TickScheduler::from_interval("momentum", 10).expect("scheduler");
    scheduler.start(|| async {}).await;
    assert!(scheduler.is_running().await);
    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}
