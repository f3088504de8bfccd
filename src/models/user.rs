use serde::{Deserialize, Serialize};

use super::deserialize_null_default;

/// Name and email of the logged-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub email: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Name to greet the user with, or `fallback` when none is known.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        let name = self.name.trim();
        if name.is_empty() {
            fallback
        } else {
            name
        }
    }
}
