// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the PestAway booking platform.
//!
//! This crate stores contact-form submissions in an embedded `SQLite`
//! database. Submissions are write-once: there is no update or delete
//! path, by design. The store supports an in-memory database for
//! development and tests and a file-backed database for deployment.
//!
//! The store is internally synchronized (the `SQLite` connection sits
//! behind a mutex), so it can be shared across request handlers behind a
//! plain `Arc`.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use pestaway_domain::ContactSubmission;
use rusqlite::{Connection, params};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info};

/// Schema installed on store construction.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS contact_submissions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    subject TEXT,
    message TEXT NOT NULL,
    submitted_at TEXT NOT NULL
);
";

/// A persisted contact submission together with its row identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    /// The identifier assigned by the database.
    pub id: i64,
    /// The submission as stored.
    pub submission: ContactSubmission,
}

/// Intermediate row shape read back from the database.
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
    subject: Option<String>,
    message: String,
    submitted_at: String,
}

/// Embedded `SQLite` store for contact submissions.
pub struct SqliteStore {
    /// The underlying database connection, synchronized for shared use.
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Creates a store backed by an in-memory database.
    ///
    /// Each store owns its own private database; state does not survive
    /// the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be installed.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open_in_memory()
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        Self::initialize(conn)
    }

    /// Creates a store backed by a database file, creating the file if
    /// needed.
    ///
    /// # Arguments
    ///
    /// * `path` - The database file path
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be installed.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open(path)
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        Self::initialize(conn)
    }

    /// Installs the schema and wraps the connection.
    fn initialize(conn: Connection) -> Result<Self, PersistenceError> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        info!("Contact submission store initialized");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquires the connection.
    fn connection(&self) -> Result<MutexGuard<'_, Connection>, PersistenceError> {
        self.conn
            .lock()
            .map_err(|_| PersistenceError::DatabaseError(String::from("connection mutex poisoned")))
    }

    /// Persists a contact submission, returning its generated identifier.
    ///
    /// Submissions are immutable once written; this is the only write
    /// operation the store offers.
    ///
    /// # Arguments
    ///
    /// * `submission` - The validated submission to persist
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted or the
    /// insert fails.
    pub fn insert_contact_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<i64, PersistenceError> {
        let submitted_at: String = submission
            .submitted_at
            .format(&Rfc3339)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

        let conn = self.connection()?;
        conn.execute(
            "INSERT INTO contact_submissions (name, email, phone, subject, message, submitted_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                submission.name,
                submission.email,
                submission.phone,
                submission.subject,
                submission.message,
                submitted_at
            ],
        )?;

        let id: i64 = conn.last_insert_rowid();
        debug!(id, "Persisted contact submission");
        Ok(id)
    }

    /// Reads back a contact submission by its identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier returned by `insert_contact_submission`
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SubmissionNotFound` if no row has the
    /// given identifier, or a database error otherwise.
    pub fn get_contact_submission(&self, id: i64) -> Result<ContactRecord, PersistenceError> {
        let conn = self.connection()?;
        let row = conn.query_row(
            "SELECT id, name, email, phone, subject, message, submitted_at
             FROM contact_submissions WHERE id = ?1",
            params![id],
            |row| {
                Ok(ContactRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    phone: row.get(3)?,
                    subject: row.get(4)?,
                    message: row.get(5)?,
                    submitted_at: row.get(6)?,
                })
            },
        );
        drop(conn);

        match row {
            Ok(row) => {
                let submitted_at: OffsetDateTime =
                    OffsetDateTime::parse(&row.submitted_at, &Rfc3339)
                        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
                Ok(ContactRecord {
                    id: row.id,
                    submission: ContactSubmission::new(
                        row.name,
                        row.email,
                        row.phone,
                        row.subject,
                        row.message,
                        submitted_at,
                    ),
                })
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Err(PersistenceError::SubmissionNotFound(id))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns how many contact submissions have been persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_contact_submissions(&self) -> Result<i64, PersistenceError> {
        let conn = self.connection()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM contact_submissions", [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }
}
