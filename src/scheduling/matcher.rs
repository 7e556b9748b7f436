use std::{sync::Arc, time::Duration};

use chrono::{Datelike, NaiveDateTime, Weekday};
use tokio::time;
use tokio_util::{sync::CancellationToken, task::TaskTracker};

use crate::{
    clock::Clock,
    notification::ReminderNotifier,
    reminder::{Reminder, ReminderTime, weekday_name},
    storage::ReminderStorage,
};

const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// "Now" as seen by a single matching pass, truncated to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchTick {
    pub at: NaiveDateTime,
    pub day: Weekday,
    pub time: ReminderTime,
}

impl MatchTick {
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            at,
            day: at.weekday(),
            time: ReminderTime::new(at.time()),
        }
    }

    pub fn matches(&self, reminder: &Reminder) -> bool {
        reminder.day == self.day && reminder.time == self.time
    }

    pub fn due<'a>(&self, reminders: &'a [Reminder]) -> Vec<&'a Reminder> {
        reminders.iter().filter(|r| self.matches(r)).collect()
    }
}

pub struct ScheduleMatcher {
    storage: Arc<dyn ReminderStorage>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn ReminderNotifier>,
    read_timeout: Duration,
    deliveries: TaskTracker,
    delivery_cancellation_token: CancellationToken,
}

impl ScheduleMatcher {
    pub fn new(
        storage: Arc<dyn ReminderStorage>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn ReminderNotifier>,
    ) -> Self {
        Self {
            storage,
            clock,
            notifier,
            read_timeout: READ_TIMEOUT,
            deliveries: TaskTracker::new(),
            delivery_cancellation_token: CancellationToken::new(),
        }
    }

    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Runs one matching pass and returns how many reminders were due.
    /// Notifications are spawned and not awaited.
    pub async fn run_tick(&self) -> usize {
        let tick = MatchTick::new(self.clock.now());

        let reminders = match time::timeout(self.read_timeout, self.storage.get_all()).await {
            Ok(Ok(reminders)) => reminders,
            Ok(Err(error)) => {
                log::warn!(
                    "Could not read reminders, skipping tick. [day = {}, time = {}, error = {}]",
                    weekday_name(tick.day),
                    tick.time,
                    error
                );
                return 0;
            }
            Err(_) => {
                log::warn!(
                    "Reading reminders timed out after {:?}, skipping tick. [day = {}, time = {}]",
                    self.read_timeout,
                    weekday_name(tick.day),
                    tick.time
                );
                return 0;
            }
        };

        let due = tick.due(&reminders);
        for reminder in &due {
            log::info!(
                "Reminder is due. [reminder_id = {}, day = {}, time = {}]",
                reminder.id,
                weekday_name(reminder.day),
                reminder.time
            );
            self.deliver(reminder);
        }

        due.len()
    }

    /// Waits until every delivery spawned so far has finished.
    pub async fn settle_deliveries(&self) {
        self.deliveries.close();
        self.deliveries.wait().await;
        self.deliveries.reopen();
    }

    pub(super) fn delivery_cancellation_token(&self) -> CancellationToken {
        self.delivery_cancellation_token.clone()
    }

    fn deliver(&self, reminder: &Reminder) {
        let notifier = Arc::clone(&self.notifier);
        let cancellation_token = self.delivery_cancellation_token.clone();
        let reminder_id = reminder.id;
        let activity = reminder.activity.clone();

        self.deliveries.spawn(async move {
            tokio::select! {
                _ = cancellation_token.cancelled() => {
                    log::warn!("Delivery was abandoned. [reminder_id = {}]", reminder_id);
                }
                result = notifier.notify(&activity) => {
                    if let Err(error) = result {
                        log::warn!(
                            "Could not deliver reminder. [reminder_id = {}, error = {}]",
                            reminder_id,
                            error
                        );
                    }
                }
            }
        });
    }
}
