use rusqlite::Connection;

use crate::error::BookResult;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> BookResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS records (
            name TEXT PRIMARY KEY NOT NULL,
            birthday TEXT,
            position INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS phones (
            record_name TEXT NOT NULL REFERENCES records(name) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            number TEXT NOT NULL,
            PRIMARY KEY (record_name, position)
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Create an initialized in-memory connection for tests. Panics if SQLite cannot open one.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
