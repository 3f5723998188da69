//! Contact intake use case.

use crate::domain::NewContact;
use crate::error::AppError;
use crate::infra::ContactStore;
use serde::{Deserialize, Serialize};

/// Intake request as received. Absent and `null` fields are both `None`.
#[derive(Debug, Default, Deserialize)]
pub struct ContactCreateReq {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ContactCreatedDto {
    pub id: i64,
    pub name: String,
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("Missing {field}")))
}

impl ContactCreateReq {
    /// Checks phone, then name, then email; the first missing one wins.
    pub fn validate(self) -> Result<NewContact, AppError> {
        let phone = required(self.phone, "phone")?;
        let name = required(self.name, "name")?;
        let email = required(self.email, "email")?;
        Ok(NewContact { name, email, phone })
    }
}

/// Validate, reject duplicate emails, then insert exactly one row.
///
/// Nothing is written on any failure path.
pub fn contact_create(
    store: &dyn ContactStore,
    req: ContactCreateReq,
) -> Result<ContactCreatedDto, AppError> {
    let new_contact = req.validate()?;

    if store.find_by_email(&new_contact.email)?.is_some() {
        return Err(AppError::duplicate_email());
    }

    let contact = store.insert(&new_contact)?;
    log::info!("contact created id={}", contact.id);

    Ok(ContactCreatedDto {
        id: contact.id,
        name: contact.name,
    })
}
