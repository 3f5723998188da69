//! Application use cases.

mod contact;

pub use contact::{contact_create, ContactCreateReq, ContactCreatedDto};
