use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("Reminder is missing: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error("Unknown weekday {0:?}")]
    InvalidDay(String),

    #[error("Invalid time of day {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
