use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

/// Idempotent schema setup, safe to re-run on every startup.
/// AUTOINCREMENT keeps inquiry ids strictly increasing even if the
/// newest row is ever removed out-of-band.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS inquiries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at   TEXT NOT NULL,
            name         TEXT NOT NULL,
            email        TEXT NOT NULL,
            phone        TEXT,
            user_message TEXT,
            budget       TEXT,
            employment   TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_inquiries_created
            ON inquiries(created_at DESC, id DESC);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
