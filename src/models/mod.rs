mod display;
mod language;
mod message;
mod mood;
mod severity;
mod user;

pub use display::{
    date_label, project_display_items, project_display_items_in, DisplayItem,
};
pub use language::Language;
pub use message::{display_time, ChatMessage, ResourceItem, Technique};
pub use mood::{ChartPoint, Mood, MoodEntry, MoodReason};
pub use severity::Severity;
pub(crate) use severity::optional as severity_optional;
pub use user::UserProfile;

use serde::{Deserialize, Deserializer};

/// Helper to deserialize id as either string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Like [`deserialize_id`] but tolerates `null`.
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "deserialize_id")] String);

    Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|w| w.0))
}

/// Treat an explicit `null` like a missing field.
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
