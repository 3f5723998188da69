//! Contact entity: a submitted name / email / phone inquiry.

use serde::Serialize;

/// A persisted contact. `id` is assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: String,
}

/// A validated contact that has not been stored yet.
///
/// All three fields are non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}
