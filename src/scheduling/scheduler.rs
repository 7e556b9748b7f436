use std::{sync::Arc, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use super::matcher::ScheduleMatcher;
use crate::{clock::Clock, notification::ReminderNotifier, storage::ReminderStorage};

const STOP_TIMEOUT: Duration = Duration::from_secs(5);
// tokio intervals panic on a zero period
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchingShutdown {
    Finished,
    Aborted,
}

pub struct MatchingHandle {
    task_handle: JoinHandle<()>,
    cancellation_token: CancellationToken,
    delivery_cancellation_token: CancellationToken,
}

impl MatchingHandle {
    fn new(
        task_handle: JoinHandle<()>,
        cancellation_token: CancellationToken,
        delivery_cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            task_handle,
            cancellation_token,
            delivery_cancellation_token,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.task_handle.is_finished()
    }

    /// Cancels the loop and waits up to `timeout` for the current pass and its
    /// deliveries. Whatever is still running after that is aborted.
    pub async fn stop(mut self, timeout: Duration) -> MatchingShutdown {
        self.cancellation_token.cancel();
        if time::timeout(timeout, &mut self.task_handle).await.is_ok() {
            return MatchingShutdown::Finished;
        }

        log::warn!("Matching task did not stop within {:?}, aborting", timeout);
        self.delivery_cancellation_token.cancel();
        self.task_handle.abort();
        let _ = (&mut self.task_handle).await;
        MatchingShutdown::Aborted
    }
}

impl ScheduleMatcher {
    /// Spawns the matching loop. The first pass runs immediately.
    pub fn start(self, interval: Duration) -> MatchingHandle {
        let cancellation_token = CancellationToken::new();
        let task_cancellation_token = cancellation_token.child_token();
        let delivery_cancellation_token = self.delivery_cancellation_token();

        let task_handle = tokio::spawn(async move {
            self.run_periodically(interval, task_cancellation_token).await;
        });

        MatchingHandle::new(task_handle, cancellation_token, delivery_cancellation_token)
    }

    async fn run_periodically(&self, interval: Duration, cancellation_token: CancellationToken) {
        let interval = interval.max(MIN_INTERVAL);
        let mut ticks = time::interval(interval);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        log::info!("Matching reminders every {:?}", interval);

        loop {
            tokio::select! {
                _ = cancellation_token.cancelled() => {
                    log::info!("Matching task was cancelled");
                    break;
                },
                _ = ticks.tick() => {
                    let fired = self.run_tick().await;
                    log::debug!("Matching pass finished. [fired = {}]", fired);
                }
            }
        }

        self.settle_deliveries().await;
    }
}

pub fn start_matching(
    interval: Duration,
    storage: Arc<dyn ReminderStorage>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn ReminderNotifier>,
) -> MatchingHandle {
    ScheduleMatcher::new(storage, clock, notifier).start(interval)
}

pub async fn stop_matching(handle: MatchingHandle) -> MatchingShutdown {
    handle.stop(STOP_TIMEOUT).await
}
