//! Profile editing.

use tracing::warn;

use crate::api::ApiClient;
use crate::error::{require_filled, MindnestResult, ResultExt};
use crate::models::UserProfile;
use crate::storage;

/// Where a loaded profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    Remote,
    Stored,
}

#[derive(Debug, Clone)]
pub struct ProfileEditor {
    api: ApiClient,
}

impl ProfileEditor {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the profile, falling back to the stored name and email.
    pub async fn load(&self) -> (UserProfile, ProfileSource) {
        match self.api.fetch_profile().await {
            Ok(profile) => return (profile, ProfileSource::Remote),
            Err(e) => warn!("Error loading profile, using stored values: {}", e),
        }

        let store = self.api.store().as_ref();
        let name = storage::load_string(store, storage::USER_NAME)
            .await
            .log_warn("read stored name")
            .flatten();
        let email = storage::load_string(store, storage::USER_EMAIL)
            .await
            .log_warn("read stored email")
            .flatten();
        (
            UserProfile::new(name.unwrap_or_default(), email.unwrap_or_default()),
            ProfileSource::Stored,
        )
    }

    /// Send the trimmed values and store them locally.
    pub async fn save(&self, name: &str, email: &str) -> MindnestResult<UserProfile> {
        require_filled(&[name, email])?;
        let profile = UserProfile::new(name.trim(), email.trim());
        self.api.update_profile(&profile).await?;

        let store = self.api.store().as_ref();
        store.set_item(storage::USER_NAME, &profile.name).await?;
        store.set_item(storage::USER_EMAIL, &profile.email).await?;
        Ok(profile)
    }
}

/// Whether the edited values differ from the loaded profile.
pub fn has_unsaved_changes(original: &UserProfile, name: &str, email: &str) -> bool {
    original.name.trim() != name.trim() || original.email.trim() != email.trim()
}
