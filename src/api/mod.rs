//! Backend REST API.
//!
//! [`ApiClient`] wraps every endpoint the app uses behind typed methods;
//! [`types`] holds the request and response bodies.

mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{ChatReply, LoginResponse, MessageResponse, RegisterRequest, SecurityQuestions};
