pub mod appsettings;
pub mod clock;
pub mod conversation;
pub mod error;
pub mod notification;
pub mod parser;
pub mod reminder;
pub mod scheduling;
pub mod storage;
pub mod telegram;

pub use error::ReminderError;
pub use parser::{parse, parse_with_clock};
pub use reminder::{NewReminder, ParseResult, Reminder, ReminderId, ReminderTime};
pub use scheduling::{MatchingHandle, MatchingShutdown, ScheduleMatcher, start_matching, stop_matching};
