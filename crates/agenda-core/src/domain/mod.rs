pub mod contact;
pub mod ids;

pub use contact::Contact;
pub use ids::{parse_contact_id, ContactId};
