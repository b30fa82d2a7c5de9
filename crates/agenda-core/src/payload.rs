use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The sanitized form of an incoming contact payload.
///
/// Every field defaults to the empty string; a payload that is not a JSON
/// object sanitizes to the all-empty payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
}

/// Map an arbitrary JSON value onto the four known contact fields.
///
/// A field that is absent or carries a non-string value becomes the empty
/// string; unrecognized fields are dropped. Idempotent.
pub fn sanitize(payload: &Value) -> ContactPayload {
    ContactPayload {
        name: string_field(payload, "name"),
        surname: string_field(payload, "surname"),
        email: string_field(payload, "email"),
        phone: string_field(payload, "phone"),
    }
}

fn string_field(payload: &Value, key: &str) -> String {
    match payload.get(key) {
        Some(Value::String(value)) => value.clone(),
        _ => String::new(),
    }
}
