//! Settings screen: account actions and locally stored preferences.

pub mod account;
pub mod emergency;
pub mod reminder;
pub mod session_length;

pub use account::AccountSettings;
pub use emergency::{
    crisis_dial_target, load_emergency_number, normalize_phone_number, save_emergency_number,
};
pub use reminder::{
    default_reminder_time, format_reminder_time, parse_reminder_time, DailyReminder,
};
pub use session_length::{
    format_session_length, load_session_length, parse_session_minutes, save_session_length,
    DEFAULT_SESSION_MINUTES, MAX_SESSION_MINUTES,
};
