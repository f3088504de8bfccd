use serde::{Deserialize, Serialize};
use std::fmt;

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
}

impl Language {
    /// Stored and wire code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
        }
    }

    /// Parse an exact code. Anything outside the enumerated set is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "th" => Some(Language::Th),
            _ => None,
        }
    }

    /// The other language.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Th,
            Language::Th => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
