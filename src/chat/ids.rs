use chrono::{DateTime, Utc};

/// Issues millisecond-timestamp message ids that never repeat within a
/// session, even when two messages are created in the same millisecond.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> String {
        let candidate = now.timestamp_millis();
        self.last = candidate.max(self.last + 1);
        self.last.to_string()
    }

    /// Never issue an id at or below a numeric id already in use.
    pub fn observe(&mut self, id: &str) {
        if let Ok(value) = id.parse::<i64>() {
            self.last = self.last.max(value);
        }
    }
}
