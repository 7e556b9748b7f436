mod model;

use std::str::FromStr;

use async_trait::async_trait;
use model::ReminderStorageModel;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::ReminderStorage;
use crate::reminder::{NewReminder, Reminder, ReminderId, weekday_name};

const CREATE_REMINDERS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS reminders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    day TEXT NOT NULL,
    time TEXT NOT NULL,
    activity TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

pub struct SqliteReminderStorage {
    pool: SqlitePool,
}

impl SqliteReminderStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // a single long-lived connection keeps `sqlite::memory:` databases alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let storage = Self::new(pool);
        storage.migrate().await?;
        Ok(storage)
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::query(CREATE_REMINDERS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ReminderStorage for SqliteReminderStorage {
    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder> {
        let NewReminder {
            day,
            time,
            activity,
        } = reminder;

        let created_reminder = sqlx::query_as::<_, ReminderStorageModel>(
            "INSERT INTO reminders (day, time, activity)
VALUES (?, ?, ?) RETURNING id, day, time, activity",
        )
        .bind(weekday_name(day))
        .bind(time.to_string())
        .bind(activity)
        .fetch_one(&self.pool)
        .await?;

        let created_reminder = Reminder::try_from(created_reminder)?;
        log::info!("Stored reminder. [reminder_id = {}]", created_reminder.id);

        Ok(created_reminder)
    }

    async fn delete(&self, id: ReminderId) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM reminders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, ReminderStorageModel>(
            "SELECT id, day, time, activity FROM reminders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let reminders = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                Reminder::try_from(row)
                    .inspect_err(|error| {
                        log::warn!("Skipping unreadable reminder row. [reminder_id = {}, error = {}]", id, error)
                    })
                    .ok()
            })
            .collect();

        Ok(reminders)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::reminder::ReminderTime;

    async fn storage() -> SqliteReminderStorage {
        SqliteReminderStorage::connect("sqlite::memory:").await.unwrap()
    }

    fn new_reminder(day: Weekday, hour: u32, minute: u32, activity: &str) -> NewReminder {
        NewReminder::new(day, ReminderTime::from_hm(hour, minute).unwrap(), activity).unwrap()
    }

    #[tokio::test]
    pub async fn inserted_reminders_are_listed_back() {
        let storage = storage().await;

        let standup = storage
            .insert(new_reminder(Weekday::Mon, 9, 0, "standup"))
            .await
            .unwrap();
        let gym = storage
            .insert(new_reminder(Weekday::Thu, 18, 30, "olahraga"))
            .await
            .unwrap();

        assert_ne!(standup.id, gym.id);
        assert_eq!(gym.time.to_string(), "18:30");
        assert_eq!(storage.get_all().await.unwrap(), vec![standup, gym]);
    }

    #[tokio::test]
    pub async fn delete_reports_whether_row_existed() {
        let storage = storage().await;
        let reminder = storage
            .insert(new_reminder(Weekday::Sun, 21, 0, "tidur"))
            .await
            .unwrap();

        assert!(storage.delete(reminder.id).await.unwrap());
        assert!(!storage.delete(reminder.id).await.unwrap());
        assert!(storage.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    pub async fn unreadable_rows_are_skipped() {
        let storage = storage().await;
        sqlx::query("INSERT INTO reminders (day, time, activity) VALUES ('Someday', '9', 'x')")
            .execute(&storage.pool)
            .await
            .unwrap();
        let reminder = storage
            .insert(new_reminder(Weekday::Wed, 7, 0, "belajar"))
            .await
            .unwrap();

        assert_eq!(storage.get_all().await.unwrap(), vec![reminder]);
    }

    #[tokio::test]
    pub async fn migrate_is_idempotent() {
        let storage = storage().await;

        storage.migrate().await.unwrap();
    }
}
