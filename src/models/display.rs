//! Projection of the message sequence into display rows with date separators.

use chrono::{Datelike, Local, NaiveDate, TimeZone};

use super::language::Language;
use super::message::ChatMessage;

const THAI_MONTHS: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.", "ธ.ค.",
];

/// Offset between the Gregorian and Buddhist-era year.
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// A row in the chat list.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    DateSeparator { key: NaiveDate, label: String },
    Message(ChatMessage),
}

impl DisplayItem {
    pub fn is_separator(&self) -> bool {
        matches!(self, DisplayItem::DateSeparator { .. })
    }
}

/// Localized label for a calendar day relative to `today`.
pub fn date_label(day: NaiveDate, today: NaiveDate, language: Language) -> String {
    let yesterday = today.pred_opt();
    match language {
        Language::En => {
            if day == today {
                "Today".to_string()
            } else if Some(day) == yesterday {
                "Yesterday".to_string()
            } else {
                day.format("%-d %b %Y").to_string()
            }
        }
        Language::Th => {
            if day == today {
                "วันนี้".to_string()
            } else if Some(day) == yesterday {
                "เมื่อวาน".to_string()
            } else {
                format!(
                    "{} {} {}",
                    day.day(),
                    THAI_MONTHS[day.month0() as usize],
                    day.year() + BUDDHIST_ERA_OFFSET
                )
            }
        }
    }
}

/// Project messages into display rows, using day boundaries in `tz`.
///
/// A separator precedes a dated message whenever its day differs from the
/// last emitted separator. Undated messages stay in the current group.
pub fn project_display_items_in<Tz: TimeZone>(
    messages: &[ChatMessage],
    language: Language,
    today: NaiveDate,
    tz: &Tz,
) -> Vec<DisplayItem> {
    let mut items = Vec::with_capacity(messages.len() + 4);
    let mut current: Option<NaiveDate> = None;

    for message in messages {
        if let Some(key) = message.date_key_in(tz) {
            if current != Some(key) {
                items.push(DisplayItem::DateSeparator {
                    key,
                    label: date_label(key, today, language),
                });
                current = Some(key);
            }
        }
        items.push(DisplayItem::Message(message.clone()));
    }

    items
}

/// Project messages into display rows using the local timezone.
pub fn project_display_items(
    messages: &[ChatMessage],
    language: Language,
    today: NaiveDate,
) -> Vec<DisplayItem> {
    project_display_items_in(messages, language, today, &Local)
}
