// Copyright (c) 2025 Tillbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::PathBuf;

use crate::models::{Record, Session};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.tillbook", "Tillbook", "tillbook"));

/// Store key holding the whole ledger as one JSON array.
pub const RECORDS_KEY: &str = "records";
/// Store key holding the active session blob.
pub const SESSION_KEY: &str = "loggedInUser";

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("tillbook.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open store at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS store(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM store WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn put(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO store(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn remove(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM store WHERE key=?1", params![key])?;
    Ok(())
}

/// Load the full ledger. An absent key is an empty ledger, not an error.
pub fn load_records(conn: &Connection) -> Result<Vec<Record>> {
    match get(conn, RECORDS_KEY)? {
        Some(blob) => serde_json::from_str(&blob)
            .with_context(|| format!("Malformed '{}' blob in store", RECORDS_KEY)),
        None => Ok(Vec::new()),
    }
}

/// Persist the full ledger as one blob, replacing the previous value.
pub fn save_records(conn: &Connection, records: &[Record]) -> Result<()> {
    let blob = serde_json::to_string(records)?;
    put(conn, RECORDS_KEY, &blob)
}

pub fn load_session(conn: &Connection) -> Result<Option<Session>> {
    match get(conn, SESSION_KEY)? {
        Some(blob) => {
            let session = serde_json::from_str(&blob)
                .with_context(|| format!("Malformed '{}' blob in store", SESSION_KEY))?;
            Ok(Some(session))
        }
        None => Ok(None),
    }
}

pub fn save_session(conn: &Connection, session: &Session) -> Result<()> {
    let blob = serde_json::to_string(session)?;
    put(conn, SESSION_KEY, &blob)
}

pub fn clear_session(conn: &Connection) -> Result<()> {
    remove(conn, SESSION_KEY)
}
