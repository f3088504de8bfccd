//! Daily reminder preference.
//!
//! Only the preference is kept here; scheduling the notification belongs to
//! the host platform.

use chrono::{NaiveTime, Timelike};
use tracing::warn;

use crate::error::ValidationError;
use crate::storage;
use crate::traits::{KeyValueStore, StorageError};

/// Hour and minute used until the user picks a time.
pub const DEFAULT_REMINDER_HM: (u32, u32) = (21, 0);

pub fn default_reminder_time() -> NaiveTime {
    let (hour, minute) = DEFAULT_REMINDER_HM;
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Parse a 24-hour `HH:MM` time.
pub fn parse_reminder_time(value: &str) -> Result<NaiveTime, ValidationError> {
    let invalid = || ValidationError::InvalidTime(value.to_string());
    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

/// Format as zero-padded `HH:MM`.
pub fn format_reminder_time(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyReminder {
    pub enabled: bool,
    pub time: NaiveTime,
}

impl Default for DailyReminder {
    fn default() -> Self {
        Self {
            enabled: false,
            time: default_reminder_time(),
        }
    }
}

impl DailyReminder {
    /// Load the stored preference. Missing or malformed values keep the defaults.
    pub async fn load(store: &dyn KeyValueStore) -> Self {
        let mut reminder = Self::default();

        match store.get_item(storage::DAILY_REMINDER_ENABLED).await {
            Ok(Some(value)) => reminder.enabled = value == "true",
            Ok(None) => {}
            Err(e) => warn!("Error loading reminder flag: {}", e),
        }

        match store.get_item(storage::DAILY_REMINDER_TIME).await {
            Ok(Some(value)) => match parse_reminder_time(&value) {
                Ok(time) => reminder.time = time,
                Err(e) => warn!("Ignoring stored reminder time: {}", e),
            },
            Ok(None) => {}
            Err(e) => warn!("Error loading reminder time: {}", e),
        }

        reminder
    }

    pub async fn set_enabled(
        &mut self,
        store: &dyn KeyValueStore,
        enabled: bool,
    ) -> Result<(), StorageError> {
        self.enabled = enabled;
        let value = if enabled { "true" } else { "false" };
        store.set_item(storage::DAILY_REMINDER_ENABLED, value).await
    }

    pub async fn set_time(
        &mut self,
        store: &dyn KeyValueStore,
        time: NaiveTime,
    ) -> Result<(), StorageError> {
        let time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
        self.time = time;
        store
            .set_item(storage::DAILY_REMINDER_TIME, &format_reminder_time(time))
            .await
    }

    pub fn time_label(&self) -> String {
        format_reminder_time(self.time)
    }
}
