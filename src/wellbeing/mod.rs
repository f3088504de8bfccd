//! Self-care tools: mood check-ins and the session timer.

pub mod mood;
pub mod session_timer;

pub use mood::{MoodJournal, CHART_DAYS};
pub use session_timer::{format_countdown, SessionTimer, TimerStatus};
