//! SQLite connection and migrations.

use crate::config::DbLocation;
use crate::error::AppError;
use rusqlite::Connection;
use std::sync::{Mutex, MutexGuard};

pub struct DbPool(pub Mutex<Connection>);

const MIGRATIONS: &[(i32, &str)] = &[(1, include_str!("../../migrations/0001_init.sql"))];

/// Open the database, run migrations, return the shared pool.
pub fn init_db(location: &DbLocation) -> Result<DbPool, AppError> {
    let mut conn = match location {
        DbLocation::Memory => Connection::open_in_memory()?,
        DbLocation::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| AppError::Db(e.to_string()))?;
            }
            Connection::open(path)?
        }
    };
    run_migrations(&mut conn)?;
    Ok(DbPool(Mutex::new(conn)))
}

/// Migrated in-memory database for tests.
pub fn init_test_db() -> DbPool {
    match init_db(&DbLocation::Memory) {
        Ok(pool) => pool,
        Err(e) => panic!("failed to initialize test database: {e}"),
    }
}

/// Returns the versions that were applied by this call.
pub fn run_migrations(conn: &mut Connection) -> Result<Vec<i32>, AppError> {
    let tx = conn.transaction()?;

    // Ensure schema_migrations exists (first run)
    tx.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL DEFAULT (datetime('now')))",
        [],
    )?;

    let applied: Vec<i32> = tx
        .prepare("SELECT version FROM schema_migrations ORDER BY version")?
        .query_map([], |r| r.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut newly_applied = Vec::new();
    for (version, sql) in MIGRATIONS {
        if applied.contains(version) {
            continue;
        }
        // Skip the INSERT into schema_migrations in the script - we do it ourselves
        let statements = sql
            .split(';')
            .map(strip_comments)
            .filter(|s| !s.is_empty() && !s.contains("INSERT INTO schema_migrations"));
        for stmt in statements {
            tx.execute(&stmt, [])?;
        }
        tx.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, datetime('now'))",
            [version],
        )?;
        log::info!("migration applied version={}", version);
        newly_applied.push(*version);
    }

    tx.commit()?;
    Ok(newly_applied)
}

fn strip_comments(stmt: &str) -> String {
    stmt.lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Lock the shared connection. A poisoned lock is recovered since the
/// connection itself stays usable.
pub fn get_connection(pool: &DbPool) -> MutexGuard<'_, Connection> {
    pool.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
