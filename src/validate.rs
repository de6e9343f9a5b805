//! Structural validation for intake request shapes
//!
//! Each request shape gets an explicit parse function returning either the
//! validated value or the first offending field. No schema library, no
//! reflection; fields are pulled out by name.

use std::collections::HashMap;

use crate::types::{FeedbackSubmission, QuoteRequest, Reaction};

/// A field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Parse and validate a `POST /api/feedback` JSON body
pub fn parse_feedback(body: &[u8]) -> Result<FeedbackSubmission, FieldError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| FieldError::new("body", format!("invalid JSON: {e}")))?;
    let Some(object) = value.as_object() else {
        return Err(FieldError::new("body", "expected a JSON object"));
    };

    let reaction = match object.get("reaction") {
        None | Some(serde_json::Value::Null) => {
            return Err(FieldError::new("reaction", "field is required"));
        }
        Some(serde_json::Value::String(symbol)) => Reaction::from_symbol(symbol)
            .ok_or_else(|| FieldError::new("reaction", format!("unknown reaction '{symbol}'")))?,
        Some(_) => return Err(FieldError::new("reaction", "must be a string")),
    };

    let comment = match object.get("comment") {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text.clone()),
        Some(_) => return Err(FieldError::new("comment", "must be a string")),
    };

    Ok(FeedbackSubmission { reaction, comment })
}

/// Parse and validate a `POST /quote` form-encoded body
pub fn parse_quote_form(body: &[u8]) -> Result<QuoteRequest, FieldError> {
    let mut fields: HashMap<String, String> =
        url::form_urlencoded::parse(body).into_owned().collect();

    let name = require(&mut fields, "name")?;
    let email = require(&mut fields, "email")?;
    if !is_valid_email(&email) {
        return Err(FieldError::new(
            "email",
            format!("'{email}' is not a valid email address"),
        ));
    }
    let phone = require(&mut fields, "phone")?;
    let service_type = require(&mut fields, "service_type")?;
    let message = fields
        .remove("message")
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    Ok(QuoteRequest {
        name,
        email,
        phone,
        service_type,
        message,
    })
}

fn require(
    fields: &mut HashMap<String, String>,
    field: &'static str,
) -> Result<String, FieldError> {
    match fields.remove(field) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(FieldError::new(field, "field is required")),
    }
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is the mail server's problem.
pub fn is_valid_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = address.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
