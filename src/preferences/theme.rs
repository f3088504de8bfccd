use serde::{Deserialize, Serialize};
use std::fmt;

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeScheme {
    #[default]
    Light,
    Dark,
}

impl ThemeScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeScheme::Light => "light",
            ThemeScheme::Dark => "dark",
        }
    }

    /// Parse an exact stored value.
    pub fn from_str_exact(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeScheme::Light),
            "dark" => Some(ThemeScheme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeScheme::Light => ThemeScheme::Dark,
            ThemeScheme::Dark => ThemeScheme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeScheme::Dark)
    }
}

impl fmt::Display for ThemeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
