//! Severity classification attached to assistant replies.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How serious the server judged the user's message to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Moderate,
    High,
    Crisis,
}

impl Severity {
    /// Parse a wire tag.
    ///
    /// Matching is case-insensitive. An empty tag means "no severity",
    /// `normal` is an alias of `Low`, and any other unknown tag falls back
    /// to `Moderate`, the server's own default classification.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }
        Some(match tag.to_ascii_uppercase().as_str() {
            "LOW" | "NORMAL" => Severity::Low,
            "MODERATE" => Severity::Moderate,
            "HIGH" => Severity::High,
            "CRISIS" => Severity::Crisis,
            _ => Severity::Moderate,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Moderate => "MODERATE",
            Severity::High => "HIGH",
            Severity::Crisis => "CRISIS",
        }
    }

    /// Whether crisis resources should be shown alongside the reply.
    pub fn shows_crisis_resources(&self) -> bool {
        matches!(self, Severity::High | Severity::Crisis)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde adapter for `Option<Severity>` fields carried as plain strings.
pub(crate) mod optional {
    use super::*;

    pub fn serialize<S>(value: &Option<Severity>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.map(|s| s.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Severity>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Severity::parse))
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Severity::parse("HIGH"), Some(Severity::High));
        assert_eq!(Severity::parse("crisis"), Some(Severity::Crisis));
        assert_eq!(Severity::parse("Low"), Some(Severity::Low));
        assert_eq!(Severity::parse("normal"), Some(Severity::Low));
        assert_eq!(Severity::parse(""), None);
        assert_eq!(Severity::parse("   "), None);
        assert_eq!(Severity::parse("weird"), Some(Severity::Moderate));
    }

    #[test]
    fn test_shows_crisis_resources() {
        assert!(!Severity::Low.shows_crisis_resources());
        assert!(!Severity::Moderate.shows_crisis_resources());
        assert!(Severity::High.shows_crisis_resources());
        assert!(Severity::Crisis.shows_crisis_resources());
    }

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(default, with = "optional")]
        severity: Option<Severity>,
    }

    #[test]
    fn test_optional_adapter() {
        let w: Wrapper = serde_json::from_str(r#"{"severity":"MODERATE"}"#).unwrap();
        assert_eq!(w.severity, Some(Severity::Moderate));
        let w: Wrapper = serde_json::from_str(r#"{"severity":null}"#).unwrap();
        assert_eq!(w.severity, None);
        let w: Wrapper = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(w.severity, None);
        let w: Wrapper = serde_json::from_str(r#"{"severity":""}"#).unwrap();
        assert_eq!(serde_json::to_string(&w).unwrap(), r#"{"severity":""}"#);
    }
}
