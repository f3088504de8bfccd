//! Three-step signup form.

use crate::api::types::RegisterResponse;
use crate::api::{ApiClient, RegisterRequest};
use crate::error::{check_new_password, require_filled, MindnestResult, ValidationError};
use crate::models::Language;

/// Questions offered for account recovery.
pub const SECURITY_QUESTIONS: [&str; 5] = [
    "What is your mother's maiden name?",
    "What was the name of your first pet?",
    "What was the name of your first school?",
    "What is your favorite food?",
    "What city were you born in?",
];

/// Number of steps in the form.
pub const SIGNUP_STEPS: u8 = 3;

/// Signup form state.
///
/// Step 1 collects the name, step 2 the credentials and step 3 the two
/// security questions.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub question_1: String,
    pub answer_1: String,
    pub question_2: String,
    pub answer_2: String,
    step: u8,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            step: 1,
            ..Default::default()
        }
    }

    /// Current step, 1-based.
    pub fn step(&self) -> u8 {
        self.step.max(1)
    }

    /// Validate the fields of the current step.
    pub fn validate_step(&self) -> Result<(), ValidationError> {
        match self.step() {
            1 => require_filled(&[self.first_name.as_str(), self.last_name.as_str()]),
            2 => {
                if self.email.trim().is_empty()
                    || self.password.is_empty()
                    || self.confirm.is_empty()
                {
                    return Err(ValidationError::MissingFields);
                }
                check_new_password(&self.password, &self.confirm)
            }
            _ => {
                if self.question_1.is_empty()
                    || self.answer_1.is_empty()
                    || self.question_2.is_empty()
                    || self.answer_2.is_empty()
                {
                    return Err(ValidationError::MissingFields);
                }
                Ok(())
            }
        }
    }

    /// Validate the current step and advance. Returns the new step.
    pub fn next(&mut self) -> Result<u8, ValidationError> {
        self.validate_step()?;
        if self.step() < SIGNUP_STEPS {
            self.step = self.step() + 1;
        }
        Ok(self.step())
    }

    /// Go back one step, never below the first.
    pub fn back(&mut self) -> u8 {
        self.step = self.step().saturating_sub(1).max(1);
        self.step
    }

    /// Full name as sent to the server.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    fn request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.full_name(),
            email: self.email.clone(),
            password: self.password.clone(),
            security_question_1: self.question_1.clone(),
            security_answer_1: self.answer_1.clone(),
            security_question_2: self.question_2.clone(),
            security_answer_2: self.answer_2.clone(),
        }
    }

    /// Validate the last step and register the account.
    pub async fn submit(&self, api: &ApiClient) -> MindnestResult<RegisterResponse> {
        if self.step() != SIGNUP_STEPS {
            return Err(ValidationError::MissingFields.into());
        }
        self.validate_step()?;
        api.register(&self.request()).await
    }
}

/// Localized welcome shown after a successful signup.
pub fn welcome_message(language: Language) -> &'static str {
    match language {
        Language::En => "Welcome to MindNest!",
        Language::Th => "ยินดีต้อนรับสู่ MindNest!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStorage, MockHttpClient, MockResponse};
    use serde_json::json;
    use std::sync::Arc;

    fn filled() -> SignupForm {
        let mut form = SignupForm::new();
        form.first_name = " Mali ".to_string();
        form.last_name = "Suk".to_string();
        form.email = "m@x.th".to_string();
        form.password = "secret1".to_string();
        form.confirm = "secret1".to_string();
        form.question_1 = SECURITY_QUESTIONS[0].to_string();
        form.answer_1 = "Somsri".to_string();
        form.question_2 = SECURITY_QUESTIONS[1].to_string();
        form.answer_2 = "Lucky".to_string();
        form
    }

    #[test]
    fn test_step_validation() {
        let mut form = SignupForm::new();
        assert_eq!(form.step(), 1);
        assert_eq!(form.next(), Err(ValidationError::MissingFields));

        form.first_name = "A".to_string();
        form.last_name = "B".to_string();
        assert_eq!(form.next(), Ok(2));

        form.email = "a@b.c".to_string();
        form.password = "abc".to_string();
        form.confirm = "abd".to_string();
        assert_eq!(form.next(), Err(ValidationError::PasswordMismatch));
        form.confirm = "abc".to_string();
        assert_eq!(form.next(), Err(ValidationError::PasswordTooShort { min: 6 }));
        form.password = "abcdef".to_string();
        form.confirm = "abcdef".to_string();
        assert_eq!(form.next(), Ok(3));
        assert_eq!(form.next(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_back_never_below_one() {
        let mut form = SignupForm::new();
        assert_eq!(form.back(), 1);
        let mut form = filled();
        form.next().unwrap();
        form.next().unwrap();
        assert_eq!(form.back(), 2);
        assert_eq!(form.back(), 1);
        assert_eq!(form.back(), 1);
    }

    #[tokio::test]
    async fn test_submit_posts_register() {
        let http = Arc::new(MockHttpClient::new());
        http.set_default_response(MockResponse::json(
            200,
            json!({"message": "User registered successfully", "user_id": "u9"}),
        ));
        let api = ApiClient::new(http.clone(), Arc::new(InMemoryStorage::new()), "http://api.test");

        let mut form = filled();
        assert!(form.submit(&api).await.is_err());
        form.next().unwrap();
        form.next().unwrap();
        let response = form.submit(&api).await.unwrap();
        assert_eq!(response.user_id.as_deref(), Some("u9"));

        let request = &http.get_requests()[0];
        assert_eq!(request.url, "http://api.test/auth/register");
        let body = request.json_body().unwrap();
        assert_eq!(body["name"], "Mali Suk");
        assert_eq!(body["security_answer_2"], "Lucky");
    }
}
