//! Request and response bodies of the backend REST API.

use serde::{Deserialize, Serialize};

use crate::models::{
    deserialize_null_default, deserialize_optional_id, ResourceItem, Severity, Technique,
};

/// `POST /chat` request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// `POST /chat` response: the assistant reply and its annotations.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChatReply {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub response: String,
    #[serde(default, with = "crate::models::severity_optional")]
    pub severity: Option<Severity>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub techniques: Vec<Technique>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub crisis_resources: Vec<ResourceItem>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub quotes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub security_question_1: String,
    pub security_answer_1: String,
    pub security_question_2: String,
    pub security_answer_2: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub user_id: &'a str,
    pub old_password: &'a str,
    pub new_password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailRequest<'a> {
    pub email: &'a str,
}

/// The two security questions chosen at signup.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SecurityQuestions {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub question_1: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub question_2: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
    pub security_answer_1: &'a str,
    pub security_answer_2: &'a str,
    pub new_password: &'a str,
}

/// Generic `{"message": "..."}` acknowledgement.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
