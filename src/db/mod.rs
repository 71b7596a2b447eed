// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Data access layer for the offline catalog.
//!
//! This module handles all interactions with the SQLite database backing
//! offline mode, including schema creation, seeding the catalog, and reading
//! and writing collection statuses. It uses cached statements for the
//! frequently executed queries.
//!
//! # Tables
//!
//! * `media` - Catalog entries, with the full record kept as JSON.
//! * `user_media_status` - One row per (user, media item) in a collection.

mod seed;

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use crate::model::{
    CollectionEntry, CollectionFilter, MediaDetail, MediaType, SearchResult, TrackedStatus,
    search::MAX_SUGGESTIONS,
};

/// Opens a connection to the SQLite database and configures it.
///
/// This function performs the following setup:
/// * **WAL Mode**: Enables Write-Ahead Logging.
/// * **Constraints**: Enforces foreign key integrity.
/// * **Schema**: Executes [`create_schema`] to ensure all tables exist.
/// * **Catalog**: Seeds the catalog if it is empty.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened, the PRAGMA
/// configuration fails, or the schema cannot be created.
pub(crate) fn init_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("Failed to open {}", path))?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    conn.execute_batch(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
    ",
    )?;

    conn.set_prepared_statement_cache_capacity(32);

    create_schema(&conn)?;
    seed::seed_catalog(&conn)?;

    Ok(conn)
}

/// Create the database schema.
///
/// The `user_media_status` table mirrors the backend: a row exists only
/// while the item is in the user's collection, and `(user_id, media_id)` is
/// unique so that writes are upserts.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS media (
            id TEXT PRIMARY KEY,
            type TEXT NOT NULL,
            title TEXT NOT NULL COLLATE NOCASE,
            release_date TEXT,
            detail TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_media_title ON media (title);

        CREATE TABLE IF NOT EXISTS user_media_status (
            user_id TEXT NOT NULL,
            media_id TEXT NOT NULL,
            status TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (user_id, media_id),
            FOREIGN KEY (media_id) REFERENCES media (id) ON DELETE CASCADE
        );

        COMMIT;",
    )
    .context("Failed to create schema")
}

/// Searches catalog titles for a case-insensitive substring, ordered by
/// title and capped at [`MAX_SUGGESTIONS`] rows.
pub(crate) fn search_media(conn: &Connection, query: &str) -> rusqlite::Result<Vec<SearchResult>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, title, release_date, type
         FROM media
         WHERE instr(lower(title), lower(?1)) > 0
         ORDER BY title
         LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![query, MAX_SUGGESTIONS as i64], |row| {
        let release_date: Option<String> = row.get(2)?;
        let media_type: String = row.get(3)?;
        Ok(SearchResult {
            id: row.get(0)?,
            title: row.get(1)?,
            year: release_date
                .map(|date| date.chars().take(4).collect())
                .unwrap_or_default(),
            category: media_type.to_lowercase(),
        })
    })?;

    rows.collect()
}

/// Fetches a catalog record by id.
pub(crate) fn fetch_media(conn: &Connection, media_id: &str) -> Result<Option<MediaDetail>> {
    let mut stmt = conn.prepare_cached("SELECT detail FROM media WHERE id = ?")?;
    let detail: Option<String> = stmt.query_row([media_id], |row| row.get(0)).optional()?;

    detail
        .map(|json| {
            serde_json::from_str(&json)
                .with_context(|| format!("Corrupt catalog record for {}", media_id))
        })
        .transpose()
}

pub(crate) fn fetch_status(
    conn: &Connection,
    user_id: &str,
    media_id: &str,
) -> rusqlite::Result<Option<TrackedStatus>> {
    let mut stmt = conn.prepare_cached(
        "SELECT status FROM user_media_status WHERE user_id = ?1 AND media_id = ?2",
    )?;
    let status: Option<String> = stmt
        .query_row(params![user_id, media_id], |row| row.get(0))
        .optional()?;

    Ok(status.as_deref().and_then(TrackedStatus::parse))
}

pub(crate) fn upsert_status(
    conn: &Connection,
    user_id: &str,
    media_id: &str,
    status: TrackedStatus,
) -> rusqlite::Result<()> {
    let sql = "
        INSERT INTO user_media_status (user_id, media_id, status)
        VALUES (?1, ?2, ?3)
        ON CONFLICT (user_id, media_id)
        DO UPDATE SET status = ?3, updated_at = CURRENT_TIMESTAMP";

    let mut stmt = conn.prepare_cached(sql)?;
    stmt.execute(params![user_id, media_id, status.wire_name()])?;

    Ok(())
}

/// Deletes a collection entry, returning whether one existed.
pub(crate) fn delete_status(conn: &Connection, user_id: &str, media_id: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn
        .prepare_cached("DELETE FROM user_media_status WHERE user_id = ?1 AND media_id = ?2")?;
    let deleted = stmt.execute(params![user_id, media_id])?;

    Ok(deleted > 0)
}

/// Lists one page of a user's collection, most recently updated first.
///
/// Rows whose stored status is not recognised are skipped.
pub(crate) fn list_collection(
    conn: &Connection,
    user_id: &str,
    filter: &CollectionFilter,
) -> rusqlite::Result<Vec<CollectionEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT s.media_id, s.status, m.type, m.title, s.updated_at
         FROM user_media_status s
         JOIN media m ON m.id = s.media_id
         WHERE s.user_id = ?1
           AND (?2 IS NULL OR s.status = ?2)
           AND (?3 IS NULL OR m.type = ?3)
         ORDER BY s.updated_at DESC, s.rowid DESC
         LIMIT ?4 OFFSET ?5",
    )?;

    let rows = stmt.query_map(
        params![
            user_id,
            filter.status.map(TrackedStatus::wire_name),
            filter.media_type.map(MediaType::wire_name),
            filter.size,
            filter.offset(),
        ],
        |row| {
            let status: String = row.get(1)?;
            let Some(status) = TrackedStatus::parse(&status) else {
                return Ok(None);
            };
            let media_type: Option<String> = row.get(2)?;

            Ok(Some(CollectionEntry {
                media_id: row.get(0)?,
                status,
                media_type: media_type.as_deref().and_then(MediaType::parse),
                title: row.get(3)?,
                updated_at: row.get(4)?,
            }))
        },
    )?;

    rows.filter_map(Result::transpose).collect()
}
