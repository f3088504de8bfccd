//! Daily mood check-ins and the weekly chart.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{MindnestResult, ValidationError};
use crate::models::{ChartPoint, Mood, MoodEntry, MoodReason};
use crate::storage;
use crate::traits::KeyValueStore;

/// Days shown on the mood chart.
pub const CHART_DAYS: u64 = 7;

/// The user's check-ins, newest first, at most one per day.
pub struct MoodJournal {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<MoodEntry>,
}

impl std::fmt::Debug for MoodJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoodJournal")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl MoodJournal {
    /// Load stored check-ins. A missing, unreadable or malformed value is empty.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = match storage::load_json::<Vec<MoodEntry>>(store.as_ref(), storage::MOOD_CHECKINS)
            .await
        {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                warn!("Error loading mood check-ins: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} mood check-ins", entries.len());
        Self { store, entries }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn entry_for(&self, day: NaiveDate) -> Option<&MoodEntry> {
        self.entries.iter().find(|e| e.date_key == day)
    }

    /// Record today's check-in using the local calendar day.
    pub async fn check_in(
        &mut self,
        mood: Option<Mood>,
        reason: Option<MoodReason>,
        note: &str,
        now: DateTime<Utc>,
    ) -> MindnestResult<MoodEntry> {
        self.check_in_at(mood, reason, note, now, &Local).await
    }

    /// Record a check-in for the day `now` falls on in `tz`.
    ///
    /// Replaces any entry for the same day and puts the new one first. The
    /// in-memory list is updated even when persisting fails.
    pub async fn check_in_at<Tz: TimeZone>(
        &mut self,
        mood: Option<Mood>,
        reason: Option<MoodReason>,
        note: &str,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> MindnestResult<MoodEntry> {
        let mood = mood.ok_or(ValidationError::MissingMood)?;
        let reason = reason.ok_or(ValidationError::MissingReason)?;

        let date_key = now.with_timezone(tz).date_naive();
        let note = note.trim();
        let entry = MoodEntry {
            id: format!("{}-{}", date_key, now.timestamp_millis()),
            date: now,
            date_key,
            mood,
            reason,
            note: (!note.is_empty()).then(|| note.to_string()),
        };

        self.entries.retain(|e| e.date_key != date_key);
        self.entries.insert(0, entry.clone());
        storage::save_json(self.store.as_ref(), storage::MOOD_CHECKINS, &self.entries).await?;
        Ok(entry)
    }

    /// One point per day for the week ending `today`, oldest first.
    pub fn weekly_chart(&self, today: NaiveDate) -> Vec<ChartPoint> {
        (0..CHART_DAYS)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(back)))
            .map(|day| ChartPoint {
                date_key: day,
                label: day.day().to_string(),
                score: self.entry_for(day).map(|e| e.mood.score()).unwrap_or(0),
            })
            .collect()
    }
}
