use serde::{Deserialize, Serialize};

use crate::models::Inquiry;

// -- Auth --

/// Fields are optional so absent ones surface as validation errors
/// rather than a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

// -- Form submission --

#[derive(Debug, Default, Deserialize)]
pub struct SubmitFormRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub user_message: Option<String>,
    pub budget: Option<String>,
    pub employment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitFormResponse {
    pub message: String,
    pub data: Inquiry,
}

// -- Errors --

/// One violated validation rule. Rules are checked exhaustively, so a
/// response may carry several of these at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
