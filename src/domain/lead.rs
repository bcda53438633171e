// src/domain/lead.rs

use crate::errors::ServerError;
use crate::forms::FormData;
use serde::Serialize;

pub const DEFAULT_REASON: &str = "general";
pub const DEFAULT_SOURCE: &str = "contact-page";
const MAX_MESSAGE_CHARS: usize = 5000;

/// Reasons offered on the contact form. Anything else is stored as given.
pub const REASONS: &[(&str, &str)] = &[
    ("general", "General question"),
    ("pricing", "Help pricing my rental"),
    ("management", "Property management"),
    ("turnover", "Move-in / turnover prep"),
];

/// A contact or lead form submission, in the shape the mail relay expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub reason: String,
    pub message: String,
    pub source: String,
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty()
        || !e.contains('@')
        || e.starts_with('@')
        || e.ends_with('@')
        || e.contains(char::is_whitespace)
    {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    Ok(e)
}

/// Like `normalize_email` but for optional fields: bad input is dropped.
pub fn optional_email(email: Option<&str>) -> Option<String> {
    email.and_then(|e| normalize_email(e).ok())
}

impl LeadMessage {
    pub fn from_form(form: &FormData) -> Result<Self, ServerError> {
        let name = form
            .text("name")
            .ok_or_else(|| ServerError::BadRequest("name is required".into()))?;

        let email = normalize_email(form.get("email").unwrap_or_default())?;

        let mut message = form.text("message").unwrap_or_default();
        if message.chars().count() > MAX_MESSAGE_CHARS {
            message = message.chars().take(MAX_MESSAGE_CHARS).collect();
        }

        Ok(Self {
            name,
            email,
            phone: form.text("phone"),
            reason: form
                .text("reason")
                .unwrap_or_else(|| DEFAULT_REASON.to_string()),
            message,
            source: form
                .text("source")
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        })
    }
}
