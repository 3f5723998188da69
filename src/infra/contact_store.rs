//! Persistence store contract for contacts and its SQLite implementation.

use crate::domain::{Contact, NewContact};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

/// Lookup-by-email and insert over durable contact storage.
///
/// Implementations must reject an insert whose email is already stored with
/// `AppError::Conflict`, atomically with the write.
pub trait ContactStore: Send + Sync {
    /// Exact-match lookup.
    fn find_by_email(&self, email: &str) -> Result<Option<Contact>, AppError>;

    /// Store a new contact and return it with its assigned id.
    fn insert(&self, contact: &NewContact) -> Result<Contact, AppError>;

    fn count(&self) -> Result<u64, AppError>;
}

pub struct SqliteContactStore {
    pool: DbPool,
}

impl SqliteContactStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl ContactStore for SqliteContactStore {
    fn find_by_email(&self, email: &str) -> Result<Option<Contact>, AppError> {
        let conn = get_connection(&self.pool);
        let contact = conn
            .query_row(
                "SELECT id, name, email, phone, created_at FROM contacts WHERE email = ?1",
                [email],
                row_to_contact,
            )
            .optional()?;
        Ok(contact)
    }

    fn insert(&self, contact: &NewContact) -> Result<Contact, AppError> {
        let now = Utc::now().to_rfc3339();
        let conn = get_connection(&self.pool);
        // a UNIQUE violation on contacts.email converts to Conflict
        conn.execute(
            "INSERT INTO contacts (name, email, phone, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![contact.name, contact.email, contact.phone, &now],
        )?;
        let id = conn.last_insert_rowid();

        Ok(Contact {
            id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            created_at: now,
        })
    }

    fn count(&self) -> Result<u64, AppError> {
        let conn = get_connection(&self.pool);
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |r| r.get(0))?;
        Ok(n as u64)
    }
}
