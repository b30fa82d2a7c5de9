//! The contact model: sanitize, validate, then at most one store call.
//!
//! Validation failures are data, never `Err`; the `Err` path is reserved
//! for SQLite/IO failures, which propagate to the caller untouched.

use crate::error::Result;
use crate::repo::ContactNew;
use crate::Store;
use agenda_core::{parse_contact_id, sanitize, validate, Contact, ContactPayload};
use serde_json::Value;

/// Result of one validation/persistence attempt.
///
/// `record` is `None` when validation failed, the identifier was
/// malformed, or no record matched a well-formed identifier; callers
/// cannot distinguish the last two from the value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactOutcome {
    pub errors: Vec<String>,
    pub record: Option<Contact>,
}

impl ContactOutcome {
    fn rejected(errors: Vec<String>) -> Self {
        Self {
            errors,
            record: None,
        }
    }

    fn persisted(record: Option<Contact>) -> Self {
        Self {
            errors: Vec::new(),
            record,
        }
    }
}

/// Stateless service over the store; holds no state between operations.
pub struct ContactModel<'a> {
    store: &'a Store,
}

impl<'a> ContactModel<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Sanitize and validate the payload, then insert a new record.
    /// No store call is made when validation fails.
    pub fn register(&self, payload: &Value) -> Result<ContactOutcome> {
        let input = sanitize(payload);
        let errors = validate(&input);
        if !errors.is_empty() {
            return Ok(ContactOutcome::rejected(errors));
        }
        let record = self.store.contacts().create(now_ms(), contact_new(input))?;
        Ok(ContactOutcome::persisted(Some(record)))
    }

    /// Replace an existing record's fields in place.
    ///
    /// A malformed id is a silent no-op; a well-formed id with no matching
    /// record yields an outcome with no errors and no record.
    pub fn edit(&self, id: &str, payload: &Value) -> Result<ContactOutcome> {
        let id = match parse_contact_id(id) {
            Some(id) => id,
            None => return Ok(ContactOutcome::default()),
        };
        let input = sanitize(payload);
        let errors = validate(&input);
        if !errors.is_empty() {
            return Ok(ContactOutcome::rejected(errors));
        }
        let record = self.store.contacts().update(id, contact_new(input))?;
        Ok(ContactOutcome::persisted(record))
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Contact>> {
        let id = match parse_contact_id(id) {
            Some(id) => id,
            None => return Ok(None),
        };
        self.store.contacts().get(id)
    }

    pub fn find_all(&self) -> Result<Vec<Contact>> {
        self.store.contacts().list_all()
    }

    pub fn delete_by_id(&self, id: &str) -> Result<Option<Contact>> {
        let id = match parse_contact_id(id) {
            Some(id) => id,
            None => return Ok(None),
        };
        self.store.contacts().delete(id)
    }
}

fn contact_new(payload: ContactPayload) -> ContactNew {
    ContactNew {
        name: payload.name,
        surname: payload.surname,
        email: payload.email,
        phone: payload.phone,
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
