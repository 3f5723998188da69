//! In-memory contact store, interchangeable with the SQLite one.

use crate::domain::{Contact, NewContact};
use crate::error::AppError;
use crate::infra::ContactStore;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: Vec<Contact>,
}

#[derive(Default)]
pub struct MemoryContactStore {
    inner: Mutex<Inner>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ContactStore for MemoryContactStore {
    fn find_by_email(&self, email: &str) -> Result<Option<Contact>, AppError> {
        Ok(self.lock().rows.iter().find(|c| c.email == email).cloned())
    }

    fn insert(&self, contact: &NewContact) -> Result<Contact, AppError> {
        let mut inner = self.lock();
        if inner.rows.iter().any(|c| c.email == contact.email) {
            return Err(AppError::duplicate_email());
        }
        inner.next_id += 1;
        let stored = Contact {
            id: inner.next_id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            created_at: Utc::now().to_rfc3339(),
        };
        inner.rows.push(stored.clone());
        Ok(stored)
    }

    fn count(&self) -> Result<u64, AppError> {
        Ok(self.lock().rows.len() as u64)
    }
}
