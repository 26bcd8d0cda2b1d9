//! Schema versioning for the key-value store.
//!
//! The backing database keeps its own schema version in the metadata table
//! so a future layout change can be applied to existing files in place. The
//! contact payload itself is not versioned; only the SQL layout is.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::SCHEMA_STATEMENTS;

/// The current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// Key under which the schema version is stored in the metadata table.
const VERSION_KEY: &str = "schema_version";

/// Create the base schema and apply any pending migrations.
///
/// # Errors
///
/// Returns an error if schema creation or migration fails.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    for statement in SCHEMA_STATEMENTS {
        conn.execute(statement, [])?;
    }

    let version = schema_version(conn)?;
    if version < CURRENT_VERSION {
        migrate(conn, version)?;
    }

    Ok(())
}

/// Read the schema version recorded in the database, 0 for a fresh file.
fn schema_version(conn: &Connection) -> Result<i32> {
    let result: std::result::Result<String, rusqlite::Error> = conn.query_row(
        "SELECT value FROM metadata WHERE key = ?1",
        [VERSION_KEY],
        |row| row.get(0),
    );

    match result {
        Ok(value) => value
            .parse()
            .map_err(|_| Error::migration(format!("invalid schema version: {value}"))),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => Err(e.into()),
    }
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
        (VERSION_KEY, version.to_string()),
    )?;
    Ok(())
}

/// Step through migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(conn: &Connection, from_version: i32) -> Result<()> {
    let mut current = from_version;

    while current < CURRENT_VERSION {
        current += 1;
        apply_migration(conn, current)?;
    }

    set_schema_version(conn, CURRENT_VERSION)
}

fn apply_migration(conn: &Connection, version: i32) -> Result<()> {
    match version {
        // Version 1 is the base schema already created by SCHEMA_STATEMENTS.
        1 => set_schema_version(conn, 1),
        _ => Err(Error::migration(format!(
            "unknown migration version: {version}"
        ))),
    }
}
