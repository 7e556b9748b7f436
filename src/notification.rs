use std::sync::Arc;

use async_trait::async_trait;

#[async_trait]
pub trait ReminderNotifier: Send + Sync {
    async fn notify(&self, activity: &str) -> anyhow::Result<()>;
}

pub fn reminder_phrase(activity: &str) -> String {
    format!("Waktunya {}!", activity)
}

pub struct LogNotifier;

#[async_trait]
impl ReminderNotifier for LogNotifier {
    async fn notify(&self, activity: &str) -> anyhow::Result<()> {
        log::info!("🔔 REMINDER: {}", activity);
        Ok(())
    }
}

pub struct NotifierGroup(Vec<Arc<dyn ReminderNotifier>>);

impl NotifierGroup {
    pub fn new(notifiers: Vec<Arc<dyn ReminderNotifier>>) -> Self {
        Self(notifiers)
    }
}

#[async_trait]
impl ReminderNotifier for NotifierGroup {
    async fn notify(&self, activity: &str) -> anyhow::Result<()> {
        let mut failed = 0;
        for notifier in &self.0 {
            if let Err(error) = notifier.notify(activity).await {
                log::warn!("Notifier failed. [activity = {}, error = {}]", activity, error);
                failed += 1;
            }
        }

        if failed > 0 {
            anyhow::bail!("{} of {} notifiers failed", failed, self.0.len());
        }
        Ok(())
    }
}
