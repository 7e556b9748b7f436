use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::reminder::{NewReminder, Reminder, ReminderId};

#[async_trait]
pub trait ReminderStorage: Send + Sync {
    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder>;
    /// Returns `false` when no reminder with `id` existed.
    async fn delete(&self, id: ReminderId) -> anyhow::Result<bool>;
    async fn get_all(&self) -> anyhow::Result<Vec<Reminder>>;
}

struct InMemoryReminderStore {
    next_id: ReminderId,
    reminders: BTreeMap<ReminderId, Reminder>,
}

pub struct InMemoryReminderStorage {
    store: RwLock<InMemoryReminderStore>,
}

impl InMemoryReminderStorage {
    pub fn new() -> Self {
        InMemoryReminderStorage {
            store: RwLock::new(InMemoryReminderStore {
                next_id: 1,
                reminders: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryReminderStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReminderStorage for InMemoryReminderStorage {
    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        let reminder = reminder.into_reminder(id);

        store.reminders.insert(id, reminder.clone());
        store.next_id += 1;

        log::info!("Stored reminder. [reminder_id = {}]", id);
        Ok(reminder)
    }

    async fn delete(&self, id: ReminderId) -> anyhow::Result<bool> {
        let mut store = self.store.write().await;
        Ok(store.reminders.remove(&id).is_some())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let store = self.store.read().await;
        Ok(store.reminders.values().cloned().collect())
    }
}
