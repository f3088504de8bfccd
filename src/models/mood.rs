use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::language::Language;

/// How the user feels, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Angry,
    Anxious,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::Angry,
        Mood::Anxious,
    ];

    /// Chart score, 5 for happy down to 1 for anxious.
    pub fn score(&self) -> u8 {
        match self {
            Mood::Happy => 5,
            Mood::Neutral => 4,
            Mood::Sad => 3,
            Mood::Angry => 2,
            Mood::Anxious => 1,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Sad => "😞",
            Mood::Angry => "😡",
            Mood::Anxious => "😰",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Mood::Happy, Language::En) => "Great",
            (Mood::Neutral, Language::En) => "Okay",
            (Mood::Sad, Language::En) => "Sad",
            (Mood::Angry, Language::En) => "Angry",
            (Mood::Anxious, Language::En) => "Anxious",
            (Mood::Happy, Language::Th) => "ดีมาก",
            (Mood::Neutral, Language::Th) => "เฉย ๆ",
            (Mood::Sad, Language::Th) => "เศร้า",
            (Mood::Angry, Language::Th) => "โกรธ",
            (Mood::Anxious, Language::Th) => "กังวล",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the mood is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodReason {
    Work,
    Family,
    Love,
    Health,
    Unknown,
}

impl MoodReason {
    pub const ALL: [MoodReason; 5] = [
        MoodReason::Work,
        MoodReason::Family,
        MoodReason::Love,
        MoodReason::Health,
        MoodReason::Unknown,
    ];

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (MoodReason::Work, Language::En) => "Work",
            (MoodReason::Family, Language::En) => "Family",
            (MoodReason::Love, Language::En) => "Love",
            (MoodReason::Health, Language::En) => "Health",
            (MoodReason::Unknown, Language::En) => "Not sure",
            (MoodReason::Work, Language::Th) => "งาน",
            (MoodReason::Family, Language::Th) => "ครอบครัว",
            (MoodReason::Love, Language::Th) => "ความรัก",
            (MoodReason::Health, Language::Th) => "สุขภาพ",
            (MoodReason::Unknown, Language::Th) => "ไม่รู้",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodReason::Work => "work",
            MoodReason::Family => "family",
            MoodReason::Love => "love",
            MoodReason::Health => "health",
            MoodReason::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        MoodReason::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for MoodReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A saved daily check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    /// `<date_key>-<millis>`
    pub id: String,
    /// When the check-in was saved
    pub date: DateTime<Utc>,
    /// Calendar day the check-in counts for
    pub date_key: NaiveDate,
    pub mood: Mood,
    pub reason: MoodReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One bar of the weekly mood chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub date_key: NaiveDate,
    /// Day of month
    pub label: String,
    /// 0 when there is no entry for the day
    pub score: u8,
}
