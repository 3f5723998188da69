//! Domain entities.

pub mod contact;

pub use contact::{Contact, NewContact};
