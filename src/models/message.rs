use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::severity::{self, Severity};
use super::{deserialize_id, deserialize_null_default, deserialize_optional_id};

/// A coping technique suggested with an assistant reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Technique {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub content: String,
    /// Ordered steps
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub category: String,
}

/// A crisis hotline or support service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceItem {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub available_hours: Option<String>,
}

impl ResourceItem {
    /// Whether the service advertises round-the-clock availability.
    pub fn is_always_available(&self) -> bool {
        self.available_hours
            .as_deref()
            .map(|hours| {
                let hours = hours.to_lowercase();
                hours.contains("24/7") || hours.contains("24 ชั่วโมง")
            })
            .unwrap_or(false)
    }
}

/// One entry in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub text: String,
    #[serde(rename = "isUser", default)]
    pub is_user: bool,
    /// Creation instant. Server history does not carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Display time, e.g. `09:41 PM`
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub techniques: Vec<Technique>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub crisis_resources: Vec<ResourceItem>,
    #[serde(default, with = "severity::optional")]
    pub severity: Option<Severity>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub quotes: Vec<String>,
}

/// Format the display time of a message, `hh:mm AM`.
pub fn display_time<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%I:%M %p").to_string()
}

impl ChatMessage {
    fn local(id: String, text: String, is_user: bool, now: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            is_user,
            created_at: Some(now),
            timestamp: display_time(&now, &Local),
            techniques: Vec::new(),
            crisis_resources: Vec::new(),
            severity: None,
            quotes: Vec::new(),
        }
    }

    /// A message typed by the user.
    pub fn user(id: impl Into<String>, text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::local(id.into(), text.into(), true, now)
    }

    /// A plain assistant message with no annotations.
    pub fn assistant(id: impl Into<String>, text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::local(id.into(), text.into(), false, now)
    }

    /// Calendar day of the message in `tz`, if it is dated.
    pub fn date_key_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        self.created_at.map(|at| at.with_timezone(tz).date_naive())
    }

    /// Calendar day of the message in the local timezone.
    pub fn date_key(&self) -> Option<NaiveDate> {
        self.date_key_in(&Local)
    }

    /// Whether crisis resources should be shown with this message.
    pub fn shows_crisis_resources(&self) -> bool {
        !self.is_user
            && self.severity.map_or(false, |s| s.shows_crisis_resources())
            && !self.crisis_resources.is_empty()
    }
}
