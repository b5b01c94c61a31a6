use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form submission. Immutable once created: there is
/// no update or delete path anywhere in the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub user_message: Option<String>,
    pub budget: Option<String>,
    pub employment: Option<String>,
}

/// A validated, normalized submission before the store assigns an id
/// and stamps `created_at`. Optional fields are `None` when the form
/// omitted them entirely.
#[derive(Debug, Clone)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub user_message: Option<String>,
    pub budget: Option<String>,
    pub employment: Option<String>,
}
