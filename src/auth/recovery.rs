//! Two-step password reset through security questions.

use crate::api::types::MessageResponse;
use crate::api::{ApiClient, SecurityQuestions};
use crate::error::{MindnestResult, ValidationError};

/// Forgot-password flow.
///
/// Step 1 looks the account up by email and fetches its questions; step 2
/// answers them and sets a new password.
#[derive(Debug, Clone)]
pub struct PasswordRecovery {
    api: ApiClient,
    email: String,
    questions: Option<SecurityQuestions>,
}

impl PasswordRecovery {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            email: String::new(),
            questions: None,
        }
    }

    /// 1 before the account is found, 2 after.
    pub fn step(&self) -> u8 {
        if self.questions.is_some() {
            2
        } else {
            1
        }
    }

    pub fn questions(&self) -> Option<&SecurityQuestions> {
        self.questions.as_ref()
    }

    /// Fetch the account's questions and move to step 2.
    pub async fn find_account(&mut self, email: &str) -> MindnestResult<&SecurityQuestions> {
        if email.trim().is_empty() {
            return Err(ValidationError::MissingFields.into());
        }
        let questions = self.api.security_questions(email).await?;
        self.email = email.to_string();
        Ok(self.questions.insert(questions))
    }

    /// Answer the questions and set the new password.
    pub async fn reset(
        &self,
        answer_1: &str,
        answer_2: &str,
        new_password: &str,
    ) -> MindnestResult<MessageResponse> {
        if self.questions.is_none()
            || answer_1.trim().is_empty()
            || answer_2.trim().is_empty()
            || new_password.is_empty()
        {
            return Err(ValidationError::MissingFields.into());
        }
        self.api
            .reset_password(&self.email, answer_1, answer_2, new_password)
            .await
    }

    /// Return to step 1, e.g. to try another email.
    pub fn back(&mut self) {
        self.questions = None;
    }
}
