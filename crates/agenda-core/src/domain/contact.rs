use crate::domain::ids::ContactId;
use serde::{Deserialize, Serialize};

/// A persisted contact as returned by the store.
///
/// `name` is always non-empty, and at least one of `email`/`phone` is
/// non-empty; both are enforced by the validation pipeline before any
/// record reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    /// Unix timestamp in milliseconds, set once at creation.
    pub created_at: i64,
}
