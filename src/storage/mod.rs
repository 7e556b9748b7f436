mod reminder_storage;
mod sqlite_storage;

use std::sync::Arc;

pub use reminder_storage::{InMemoryReminderStorage, ReminderStorage};
pub use sqlite_storage::SqliteReminderStorage;

use crate::appsettings::StorageSettings;

pub async fn from_settings(settings: &StorageSettings) -> anyhow::Result<Arc<dyn ReminderStorage>> {
    match &settings.database_url {
        Some(database_url) => {
            log::info!("Using SQLite reminder storage. [database_url = {}]", database_url);
            Ok(Arc::new(SqliteReminderStorage::connect(database_url).await?))
        }
        None => {
            log::warn!("No database configured, reminders will be kept in memory only");
            Ok(Arc::new(InMemoryReminderStorage::new()))
        }
    }
}
