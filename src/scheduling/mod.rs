mod matcher;
mod scheduler;

pub use matcher::{MatchTick, ScheduleMatcher};
pub use scheduler::{MatchingHandle, MatchingShutdown, start_matching, stop_matching};
