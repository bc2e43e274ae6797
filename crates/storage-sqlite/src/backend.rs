//! Local stand-in for the remote backend.
//!
//! Each table is a JSON array of row objects stored under the table name in
//! the key-value store. Rows carry the remote service's wire field names.

use chrono::Utc;
use log::debug;
use serde_json::Value;
use uuid::Uuid;

use crate::db::{get_connection, DbConnection, WriteHandle};
use crate::errors::StorageError;
use crate::kv::{read_json, write_raw};
use tradejournal_core::errors::Result;

pub const TRADES_TABLE: &str = "trades";
pub const TRANSACTIONS_TABLE: &str = "transactions";
pub const LEARNING_RESOURCES_TABLE: &str = "learning_resources";

pub struct LocalBackend {
    db: DbConnection,
    writer: WriteHandle,
}

impl LocalBackend {
    pub fn new(db: DbConnection, writer: WriteHandle) -> Self {
        Self { db, writer }
    }

    /// Every row of `table`, in insertion order.
    pub fn select_all(&self, table: &str) -> Result<Vec<Value>> {
        let conn = get_connection(&self.db)?;
        Ok(read_json::<Vec<Value>>(&conn, table)?.unwrap_or_default())
    }

    /// Rows of `table` whose `column` holds the string `value`.
    pub fn select_eq(&self, table: &str, column: &str, value: &str) -> Result<Vec<Value>> {
        Ok(self
            .select_all(table)?
            .into_iter()
            .filter(|row| row.get(column).and_then(Value::as_str) == Some(value))
            .collect())
    }

    /// Appends `row` to `table` with a fresh id and creation timestamp.
    ///
    /// Returns the row as stored.
    pub async fn insert(&self, table: &str, row: Value) -> Result<Value> {
        let Value::Object(mut fields) = row else {
            return Err(StorageError::InvalidRow(format!(
                "rows inserted into '{}' must be JSON objects",
                table
            ))
            .into());
        };

        fields.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        fields.insert(
            "created_at".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        let stored = Value::Object(fields);

        let table = table.to_string();
        let row = stored.clone();
        self.writer
            .exec(move |conn| {
                let mut rows = read_json::<Vec<Value>>(conn, &table)?.unwrap_or_default();
                rows.push(row);
                let json = serde_json::to_string(&rows).map_err(StorageError::from)?;
                write_raw(conn, &table, &json)?;
                debug!("Inserted row into '{}' ({} rows)", table, rows.len());
                Ok(())
            })
            .await?;

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{open, spawn_writer};
    use serde_json::json;
    use tradejournal_core::errors::{Error, ValidationError};

    fn backend() -> (tempfile::TempDir, LocalBackend) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backend.db");
        let db = open(path.to_str().unwrap()).unwrap();
        let writer = spawn_writer(db.clone());
        (dir, LocalBackend::new(db, writer))
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_created_at() {
        let (_dir, backend) = backend();

        let stored = backend
            .insert(
                TRADES_TABLE,
                json!({ "user_id": "u1", "amount": 10.5, "type": "profit", "pair": "EUR/USD" }),
            )
            .await
            .unwrap();

        let id = stored["id"].as_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        let created_at = stored["created_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
        assert_eq!(backend.select_all(TRADES_TABLE).unwrap(), vec![stored]);
    }

    #[tokio::test]
    async fn test_select_eq_filters_on_column() {
        let (_dir, backend) = backend();
        for user in ["u1", "u2", "u1"] {
            backend
                .insert(TRANSACTIONS_TABLE, json!({ "user_id": user }))
                .await
                .unwrap();
        }

        assert_eq!(
            backend
                .select_eq(TRANSACTIONS_TABLE, "user_id", "u1")
                .unwrap()
                .len(),
            2
        );
        assert!(backend
            .select_eq(TRANSACTIONS_TABLE, "user_id", "nobody")
            .unwrap()
            .is_empty());
        assert!(backend.select_all(TRADES_TABLE).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_rejects_non_object_rows() {
        let (_dir, backend) = backend();
        let result = backend.insert(TRADES_TABLE, json!([1, 2, 3])).await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidRecord(_)))
        ));
    }
}
