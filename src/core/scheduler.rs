//! Cron-backed ticker driving one polling cadence.

use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;

use cron::Schedule;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::SchedulerError;

/// Fires a tick callback on a fixed cadence. Each tick is dispatched on its
/// own task, so a slow tick never delays the cadence; ticks of the same
/// cadence may therefore overlap and must be idempotent.
#[derive(Debug)]
pub struct TickScheduler {
    label: &'static str,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl TickScheduler {
    /// Build a scheduler firing every `interval_seconds`. Sub-minute cadences
    /// map to second-based cron expressions, anything else to minute-based.
    pub fn from_interval(label: &'static str, interval_seconds: u64) -> Result<Self, SchedulerError> {
        if interval_seconds == 0 {
            return Err(SchedulerError::Disabled);
        }

        // Cron format: second minute hour day month weekday
        let cron_expr = if interval_seconds >= 60 {
            format!("0 */{} * * * *", interval_seconds / 60)
        } else {
            format!("*/{} * * * * *", interval_seconds)
        };

        let schedule = Schedule::from_str(&cron_expr).map_err(|e| SchedulerError::InvalidCron {
            expr: cron_expr.clone(),
            source: e,
        })?;

        info!(
            label = label,
            interval = interval_seconds,
            cron = %cron_expr,
            "scheduler created"
        );

        Ok(Self {
            label,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start ticking. The callback produces one future per tick.
    pub async fn start<F, Fut>(&self, tick: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let label = self.label;
        let schedule = self.schedule.clone();
        let handle_arc = self.handle.clone();

        let handle = tokio::spawn(async move {
            info!(label = label, "scheduler started");

            loop {
                let mut upcoming = schedule.upcoming(chrono::Utc);
                if let Some(next_tick) = upcoming.next() {
                    let now = chrono::Utc::now();
                    if next_tick > now {
                        let duration = (next_tick - now).to_std().unwrap_or_default();
                        tokio::time::sleep(duration).await;
                    }
                } else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                }

                debug!(label = label, "tick");
                tokio::spawn(tick());
            }
        });

        let mut h = handle_arc.write().await;
        *h = Some(handle);
    }

    /// Stop the scheduler. In-flight ticks are short-lived and left to finish.
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!(label = self.label, "scheduler stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
