use crate::{
    error::ReminderError,
    reminder::{Reminder, ReminderTime, parse_weekday},
};

#[derive(sqlx::FromRow)]
pub struct ReminderStorageModel {
    pub id: i64,
    pub day: String,
    pub time: String,
    pub activity: String,
}

impl TryFrom<ReminderStorageModel> for Reminder {
    type Error = ReminderError;

    fn try_from(value: ReminderStorageModel) -> Result<Self, Self::Error> {
        let day = parse_weekday(&value.day).ok_or(ReminderError::InvalidDay(value.day))?;
        let time = value.time.parse::<ReminderTime>()?;

        Ok(Self {
            id: value.id,
            day,
            time,
            activity: value.activity,
        })
    }
}
