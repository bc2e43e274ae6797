//! JSON key-value store on top of the `kv_store` table.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::Any;

use crate::db::{get_connection, DbConnection, WriteHandle};
use crate::errors::IntoCore;
use tradejournal_core::errors::Result;

pub struct KeyValueStore {
    db: DbConnection,
    writer: WriteHandle,
}

impl KeyValueStore {
    pub fn new(db: DbConnection, writer: WriteHandle) -> Self {
        Self { db, writer }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let conn = get_connection(&self.db)?;
        read_json(&conn, key)
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).into_core()?;
        self.set_raw(key, json).await
    }

    async fn set_raw(&self, key: &str, json: String) -> Result<()> {
        let key = key.to_string();
        self.writer
            .exec(move |conn| write_raw(conn, &key, &json))
            .await
    }

    /// Returns whether the key existed.
    pub async fn remove(&self, key: &str) -> Result<bool> {
        let key = key.to_string();
        self.writer
            .exec(move |conn| {
                let removed = conn
                    .execute("DELETE FROM kv_store WHERE key = ?1", params![key])
                    .into_core()?;
                Ok(removed > 0)
            })
            .await
    }

    /// Read-modify-write of one key as a single writer job.
    ///
    /// `f` receives the current value (if any) and returns the value to store
    /// together with the caller's result. Nothing is written when `f` fails.
    pub async fn update<T, R, F>(&self, key: &str, f: F) -> Result<R>
    where
        T: Serialize + DeserializeOwned + 'static,
        R: Send + Any,
        F: FnOnce(Option<T>) -> Result<(T, R)> + Send + 'static,
    {
        let key = key.to_string();
        self.writer
            .exec(move |conn| {
                let current = read_json::<T>(conn, &key)?;
                let (next, output) = f(current)?;
                let json = serde_json::to_string(&next).into_core()?;
                write_raw(conn, &key, &json)?;
                Ok(output)
            })
            .await
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .into_core()?;

    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw).into_core()?)),
        None => Ok(None),
    }
}

pub(crate) fn write_raw(conn: &Connection, key: &str, json: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, json, Utc::now().to_rfc3339()],
    )
    .into_core()?;
    Ok(())
}
