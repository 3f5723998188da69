//! Infrastructure: SQLite connection, migrations, contact stores.

pub mod contact_store;
pub mod db;
pub mod memory_store;

pub use contact_store::{ContactStore, SqliteContactStore};
pub(crate) use db::get_connection;
pub use db::{init_db, DbPool};
pub use memory_store::MemoryContactStore;
