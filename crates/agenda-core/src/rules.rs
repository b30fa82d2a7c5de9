use crate::payload::ContactPayload;
use validator::ValidateEmail;

pub const MSG_INVALID_EMAIL: &str = "invalid email.";
pub const MSG_INVALID_PHONE: &str = "invalid phone number.";
pub const MSG_NAME_REQUIRED: &str = "name is a required field.";
pub const MSG_CONTACT_METHOD_REQUIRED: &str =
    "you must fill in at least one contact method.";

const PHONE_MIN_CHARS: usize = 7;
const PHONE_MAX_CHARS: usize = 15;

/// Run the full validation pipeline over a sanitized payload.
///
/// Every rule runs unconditionally so a single pass surfaces all problems
/// at once; the returned messages are in pipeline order.
pub fn validate(payload: &ContactPayload) -> Vec<String> {
    let mut errors = Vec::new();

    if !payload.email.is_empty() && !payload.email.validate_email() {
        errors.push(MSG_INVALID_EMAIL.to_string());
    }

    if !payload.phone.is_empty() && !is_valid_phone(&payload.phone) {
        errors.push(MSG_INVALID_PHONE.to_string());
    }

    if payload.name.is_empty() {
        errors.push(MSG_NAME_REQUIRED.to_string());
    }

    if payload.email.is_empty() && payload.phone.is_empty() {
        errors.push(MSG_CONTACT_METHOD_REQUIRED.to_string());
    }

    errors
}

/// 7 to 15 characters drawn from digits, spaces, `+`, `-`, `(` and `)`.
pub fn is_valid_phone(value: &str) -> bool {
    let chars = value.chars().count();
    if !(PHONE_MIN_CHARS..=PHONE_MAX_CHARS).contains(&chars) {
        return false;
    }
    value
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, ' ' | '+' | '-' | '(' | ')'))
}
