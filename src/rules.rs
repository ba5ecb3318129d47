//! Field classification and validation rules
//!
//! Pure predicates per logical field kind. Classification is driven by
//! the field identifier with a fixed precedence (name, email, phone,
//! message), falling back to the control type and finally to `Generic`.

use crate::state::{Control, Field};
use thiserror::Error;

/// User-visible message for the aggregate submit-failure notification
pub const AGGREGATE_INVALID_MESSAGE: &str = "Please fill in all required fields correctly";

/// User-visible message when the external submission fails or times out
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please try again later.";

/// Logical kind of a form field, driving which pattern applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Message,
    Checkbox,
    Generic,
}

impl FieldKind {
    /// Fixed user-visible message for a pattern mismatch of this kind
    fn pattern_message(&self) -> &'static str {
        match self {
            FieldKind::Name => "Please enter a valid name (2-50 characters)",
            FieldKind::Email => "Please enter a valid email address",
            FieldKind::Phone => "Please enter a valid phone number",
            FieldKind::Message => "Message must be at least 10 characters",
            // Checkbox and Generic kinds never produce pattern failures
            FieldKind::Checkbox | FieldKind::Generic => "Invalid value",
        }
    }
}

/// Per-field validation failures with their fixed user-visible messages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required,
    #[error("{}", .0.pattern_message())]
    Pattern(FieldKind),
    #[error("Please accept the privacy policy")]
    Consent,
}

/// Classify a field by identifier, then control type.
///
/// Precedence for identifiers matching several heuristics is fixed:
/// Name, then Email, then Phone, then Message, then Generic.
pub fn classify(field: &Field) -> FieldKind {
    if field.control == Control::Checkbox {
        return FieldKind::Checkbox;
    }

    let id = field.identifier.to_ascii_lowercase();
    if id.contains("name") {
        FieldKind::Name
    } else if id.contains("email") {
        FieldKind::Email
    } else if id.contains("phone") || field.control == Control::Tel {
        FieldKind::Phone
    } else if id.contains("message") || field.is_multiline() {
        FieldKind::Message
    } else {
        FieldKind::Generic
    }
}

/// Validate a single field against the rule for its kind.
///
/// Required-but-empty fields fail with `Required` before any pattern is
/// consulted; empty optional fields always pass.
pub fn validate(field: &Field) -> Result<(), ValidationError> {
    let kind = classify(field);

    if kind == FieldKind::Checkbox {
        if field.required && !field.is_checked() {
            return Err(ValidationError::Consent);
        }
        return Ok(());
    }

    let value = field.as_text().trim();

    if value.is_empty() {
        if field.required {
            return Err(ValidationError::Required);
        }
        return Ok(());
    }

    let matches = match kind {
        FieldKind::Name => is_valid_name(value),
        FieldKind::Email => is_valid_email(value),
        FieldKind::Phone => is_valid_phone(value),
        FieldKind::Message => value.chars().count() >= 10,
        FieldKind::Checkbox | FieldKind::Generic => true,
    };

    if matches {
        Ok(())
    } else {
        Err(ValidationError::Pattern(kind))
    }
}

/// 2-50 characters: letters (including Latin-1 accented letters),
/// spaces, hyphens, apostrophes
fn is_valid_name(value: &str) -> bool {
    let len = value.chars().count();
    if !(2..=50).contains(&len) {
        return false;
    }
    value.chars().all(|c| {
        c.is_ascii_alphabetic() || ('\u{00C0}'..='\u{00FF}').contains(&c) || matches!(c, ' ' | '-' | '\'')
    })
}

/// A single `@` with non-empty, whitespace-free local and domain parts,
/// and at least one dot in the domain
fn is_valid_email(value: &str) -> bool {
    let mut parts = value.splitn(3, '@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !local.chars().any(char::is_whitespace)
        && !domain.chars().any(char::is_whitespace)
        && domain.contains('.')
}

/// 10-20 characters drawn from digits, spaces, `+`, `-`, parentheses
fn is_valid_phone(value: &str) -> bool {
    let len = value.chars().count();
    (10..=20).contains(&len)
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
}
