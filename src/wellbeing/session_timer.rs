//! Countdown for a self-care session.

use crate::settings::{save_session_length, MAX_SESSION_MINUTES};
use crate::traits::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Complete,
}

impl TimerStatus {
    /// Caption shown above the countdown, empty while idle.
    pub fn label(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "",
            TimerStatus::Running => "Time Remaining",
            TimerStatus::Paused => "Paused",
            TimerStatus::Complete => "Session Complete",
        }
    }
}

/// A one-second-resolution countdown. The caller drives it with [`tick`].
///
/// [`tick`]: SessionTimer::tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTimer {
    minutes: u32,
    remaining: Option<u32>,
    counting: bool,
}

impl SessionTimer {
    /// Duration is clamped to between one minute and one day.
    pub fn new(minutes: u32) -> Self {
        Self {
            minutes: minutes.clamp(1, MAX_SESSION_MINUTES),
            remaining: None,
            counting: false,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn set_minutes(&mut self, minutes: u32) {
        self.minutes = minutes.clamp(1, MAX_SESSION_MINUTES);
    }

    fn full_secs(&self) -> u32 {
        self.minutes.saturating_mul(60)
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining
    }

    pub fn status(&self) -> TimerStatus {
        match (self.remaining, self.counting) {
            (None, _) => TimerStatus::Idle,
            (Some(_), true) => TimerStatus::Running,
            (Some(0), false) => TimerStatus::Complete,
            (Some(_), false) => TimerStatus::Paused,
        }
    }

    /// Persist the duration and start counting from the full length.
    ///
    /// Nothing starts if the duration cannot be stored.
    pub async fn start(&mut self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        save_session_length(store, self.minutes).await?;
        self.remaining = Some(self.full_secs());
        self.counting = true;
        Ok(())
    }

    /// Advance one second. Returns `true` exactly once, on completion.
    pub fn tick(&mut self) -> bool {
        if !self.counting {
            return false;
        }
        match self.remaining {
            Some(secs) if secs > 1 => {
                self.remaining = Some(secs - 1);
                false
            }
            Some(_) => {
                self.remaining = Some(0);
                self.counting = false;
                true
            }
            None => false,
        }
    }

    /// Pause or resume. Does nothing when idle or finished.
    pub fn toggle_pause(&mut self) {
        if matches!(self.remaining, Some(secs) if secs > 0) {
            self.counting = !self.counting;
        }
    }

    /// Stop and show the full duration again.
    pub fn reset(&mut self) {
        self.counting = false;
        self.remaining = Some(self.full_secs());
    }

    /// Remaining time, or the full duration when idle.
    pub fn countdown_label(&self) -> String {
        format_countdown(self.remaining.unwrap_or_else(|| self.full_secs()))
    }
}

/// `MM:SS`, or `HH:MM:SS` from one hour up.
pub fn format_countdown(total_secs: u32) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStorage;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(65), "01:05");
        assert_eq!(format_countdown(3600), "01:00:00");
        assert_eq!(format_countdown(5432), "01:30:32");
    }

    #[test]
    fn test_minimum_one_minute() {
        let mut timer = SessionTimer::new(0);
        assert_eq!(timer.minutes(), 1);
        timer.set_minutes(0);
        assert_eq!(timer.minutes(), 1);
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.countdown_label(), "01:00");
    }

    #[test]
    fn test_maximum_one_day() {
        let mut timer = SessionTimer::new(80_000_000);
        assert_eq!(timer.minutes(), 1440);
        assert_eq!(timer.countdown_label(), "24:00:00");

        timer.set_minutes(u32::MAX);
        assert_eq!(timer.minutes(), 1440);
    }

    #[tokio::test]
    async fn test_oversized_stored_length_falls_back_to_default() {
        let store = InMemoryStorage::with_entries(&[("session_length_minutes", "80000000")]);
        let timer = SessionTimer::new(crate::settings::load_session_length(&store).await);
        assert_eq!(timer.countdown_label(), "10:00");
    }

    #[tokio::test]
    async fn test_runs_to_completion_once() {
        let store = InMemoryStorage::new();
        let mut timer = SessionTimer::new(1);
        assert!(!timer.tick());

        timer.start(&store).await.unwrap();
        assert_eq!(store.snapshot("session_length_minutes").as_deref(), Some("1"));
        assert_eq!(timer.status(), TimerStatus::Running);

        let completions = (0..100).filter(|_| timer.tick()).count();
        assert_eq!(completions, 1);
        assert_eq!(timer.remaining_secs(), Some(0));
        assert_eq!(timer.status(), TimerStatus::Complete);
        assert_eq!(timer.status().label(), "Session Complete");

        timer.toggle_pause();
        assert_eq!(timer.status(), TimerStatus::Complete);
    }

    #[tokio::test]
    async fn test_pause_resume_reset() {
        let store = InMemoryStorage::new();
        let mut timer = SessionTimer::new(2);
        timer.toggle_pause();
        assert_eq!(timer.status(), TimerStatus::Idle);

        timer.start(&store).await.unwrap();
        timer.tick();
        timer.toggle_pause();
        assert_eq!(timer.status(), TimerStatus::Paused);
        assert!(!timer.tick());
        assert_eq!(timer.remaining_secs(), Some(119));

        timer.toggle_pause();
        timer.tick();
        assert_eq!(timer.countdown_label(), "01:58");

        timer.reset();
        assert_eq!(timer.status(), TimerStatus::Paused);
        assert_eq!(timer.remaining_secs(), Some(120));
    }

    #[tokio::test]
    async fn test_start_fails_without_storage() {
        let store = InMemoryStorage::new();
        store.set_write_should_fail(true);
        let mut timer = SessionTimer::new(5);
        assert!(timer.start(&store).await.is_err());
        assert_eq!(timer.status(), TimerStatus::Idle);
    }
}
