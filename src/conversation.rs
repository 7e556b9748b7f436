//! Chat-facing flow: text in, stored reminder and a reply out.

use crate::{
    clock::Clock,
    error::ReminderError,
    parser,
    reminder::{NewReminder, Reminder, weekday_name},
    storage::ReminderStorage,
};

pub const EXAMPLE_MESSAGE: &str = "Ingetin aku besok jam 9 meeting dengan tim";

/// Parses `text` and stores it if complete. Nothing is stored otherwise.
pub async fn remember(
    text: &str,
    storage: &dyn ReminderStorage,
    clock: &dyn Clock,
) -> Result<Reminder, ReminderError> {
    let parsed = parser::parse_with_clock(text, clock);
    let new_reminder = NewReminder::try_from(parsed)?;

    Ok(storage.insert(new_reminder).await?)
}

/// Reminders ordered Monday to Sunday, then by time.
pub async fn list(storage: &dyn ReminderStorage) -> anyhow::Result<Vec<Reminder>> {
    let mut reminders = storage.get_all().await?;
    reminders.sort_by_key(|r| (r.day.num_days_from_monday(), r.time, r.id));
    Ok(reminders)
}

pub fn confirmation_message(reminder: &Reminder) -> String {
    format!(
        "Siap! Aku ingetin kamu setiap {} jam {} untuk {}. (id {})",
        weekday_name(reminder.day),
        reminder.time,
        reminder.activity,
        reminder.id
    )
}

pub fn not_understood_message(error: &ReminderError) -> String {
    let hint = match error {
        ReminderError::Incomplete(missing) => {
            let missing = missing
                .iter()
                .map(|field| match *field {
                    "day" => "hari",
                    "time" => "jam",
                    _ => "kegiatan",
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("Aku belum nangkep {}.", missing)
        }
        ReminderError::InvalidDay(day) => format!("Hari \"{}\" nggak aku kenal.", day),
        ReminderError::InvalidTime(time) => format!("Jam \"{}\" nggak valid.", time),
        ReminderError::Storage(_) => "Pengingatnya gagal disimpan.".to_string(),
    };

    format!(
        "Maaf, aku belum paham. {} Coba lagi ya, contoh: \"{}\"",
        hint, EXAMPLE_MESSAGE
    )
}

pub fn list_message(reminders: &[Reminder]) -> String {
    if reminders.is_empty() {
        return "Belum ada pengingat.".to_string();
    }

    reminders
        .iter()
        .map(|r| format!("{}. {} {} - {}", r.id, weekday_name(r.day), r.time, r.activity))
        .collect::<Vec<_>>()
        .join("\n")
}
