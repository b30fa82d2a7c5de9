pub mod domain;
pub mod payload;
pub mod rules;

pub use domain::{parse_contact_id, Contact, ContactId};
pub use payload::{sanitize, ContactPayload};
pub use rules::{is_valid_phone, validate};
