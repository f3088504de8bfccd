//! Account actions from the settings screen.

use tracing::info;

use crate::api::{ApiClient, MessageResponse};
use crate::error::{check_new_password, require_filled, MindnestResult, ValidationError};
use crate::storage;

/// Password change, history deletion and account deletion.
#[derive(Debug, Clone)]
pub struct AccountSettings {
    api: ApiClient,
}

impl AccountSettings {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Change the password of the stored user.
    ///
    /// Fields are validated before the user id is read, so a logged-out
    /// user with an empty form still sees `MissingFields`.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
        confirm: &str,
    ) -> MindnestResult<MessageResponse> {
        require_filled(&[old_password, new_password, confirm])?;
        check_new_password(new_password, confirm)?;

        let user_id = storage::load_string(self.api.store().as_ref(), storage::USER_ID)
            .await?
            .ok_or(ValidationError::NotLoggedIn)?;
        self.api
            .change_password(&user_id, old_password, new_password)
            .await
    }

    /// Delete the server-side history, then the local cache.
    pub async fn delete_history(&self) -> MindnestResult<MessageResponse> {
        let response = self.api.delete_history().await?;
        self.api.store().remove_item(storage::CHAT_HISTORY).await?;
        info!("Chat history deleted");
        Ok(response)
    }

    /// Delete the account, then forget the stored identity.
    pub async fn delete_account(&self) -> MindnestResult<MessageResponse> {
        let response = self.api.delete_account().await?;
        self.api.store().multi_remove(&storage::USER_KEYS).await?;
        info!("Account deleted");
        Ok(response)
    }
}
