//! Schema migrations for the key-value database.
//!
//! # Invariants
//! - Versions are strictly increasing, starting at 1.
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - All pending steps commit in one transaction or not at all.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// (version, sql) pairs in apply order.
const STEPS: &[(u32, &str)] = &[(1, include_str!("0001_init.sql"))];

/// Returns the newest schema version this build understands.
pub fn latest_version() -> u32 {
    STEPS.last().map_or(0, |(version, _)| *version)
}

/// Brings `conn` up to [`latest_version`].
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file was written by a newer build.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let to = latest_version();

    if from > to {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }
    if from == to {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in STEPS.iter().filter(|(version, _)| *version > from) {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from={from} to={to}");
    Ok(())
}
