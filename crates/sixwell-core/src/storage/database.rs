//! SQLite-based state persistence.
//!
//! The tracker engine itself never touches disk. This module is the
//! durability collaborator: the CLI serializes the whole tracker into the
//! key-value store after each accepted check-in and restores it at startup,
//! and every accepted check-in is also appended to a journal table for
//! inspection via `sixwell-cli log`.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

use super::data_dir;

/// One journal row: an accepted check-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRow {
    pub id: i64,
    pub dimension: Dimension,
    /// Calendar day the check-in was credited to.
    pub day: NaiveDate,
    /// Wall-clock instant the check-in was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// SQLite database holding the persisted tracker and the check-in journal.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/sixwell/sixwell.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("sixwell.db");
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS checkins (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                dimension   TEXT NOT NULL,
                day         TEXT NOT NULL,
                recorded_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_checkins_day ON checkins(day);
            CREATE INDEX IF NOT EXISTS idx_checkins_dimension ON checkins(dimension);",
        )?;
        Ok(())
    }

    /// Append an accepted check-in to the journal.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn record_check_in(
        &self,
        dimension: Dimension,
        day: NaiveDate,
        recorded_at: DateTime<Utc>,
    ) -> Result<i64, rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO checkins (dimension, day, recorded_at) VALUES (?1, ?2, ?3)",
            params![
                dimension.key(),
                day.to_string(),
                recorded_at.to_rfc3339()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Most recent journal rows, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn recent_check_ins(&self, limit: u32) -> Result<Vec<CheckInRow>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, dimension, day, recorded_at FROM checkins
             ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], |row| {
            let dimension: String = row.get(1)?;
            let day: String = row.get(2)?;
            let recorded_at: String = row.get(3)?;
            Ok((row.get::<_, i64>(0)?, dimension, day, recorded_at))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, dimension, day, recorded_at) = row?;
            // Rows written by us always parse; skip any that don't rather
            // than failing the whole listing.
            let parsed = dimension.parse::<Dimension>().ok().and_then(|dimension| {
                let day = day.parse::<NaiveDate>().ok()?;
                let recorded_at = DateTime::parse_from_rfc3339(&recorded_at)
                    .ok()?
                    .with_timezone(&Utc);
                Some(CheckInRow {
                    id,
                    dimension,
                    day,
                    recorded_at,
                })
            });
            if let Some(row) = parsed {
                out.push(row);
            }
        }
        Ok(out)
    }

    /// Get a value from the kv store.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a key from the kv store.
    pub fn kv_delete(&self, key: &str) -> Result<(), rusqlite::Error> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}
