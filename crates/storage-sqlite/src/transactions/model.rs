//! Backend row models for transactions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::StorageError;
use tradejournal_core::transactions::{NewTransaction, TransactionKind, TransactionRecord};

/// Transaction row as stored in the `transactions` table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewTransactionDB {
    pub user_id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: Option<String>,
}

impl From<NewTransaction> for NewTransactionDB {
    fn from(transaction: NewTransaction) -> Self {
        Self {
            user_id: transaction.owner_id,
            amount: transaction.amount,
            kind: transaction.kind.as_str().to_string(),
            notes: transaction.note,
        }
    }
}

impl TryFrom<TransactionDB> for TransactionRecord {
    type Error = StorageError;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        let kind: TransactionKind = db.kind.parse().map_err(|_| {
            StorageError::InvalidRow(format!("transaction {}: unknown type '{}'", db.id, db.kind))
        })?;
        if db.amount.is_sign_negative() {
            return Err(StorageError::InvalidRow(format!(
                "transaction {}: negative amount {}",
                db.id, db.amount
            )));
        }
        let created_at = DateTime::parse_from_rfc3339(&db.created_at)
            .map_err(|e| {
                StorageError::InvalidRow(format!("transaction {}: bad created_at: {}", db.id, e))
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id: db.id,
            owner_id: db.user_id,
            amount: db.amount,
            kind,
            note: db.notes,
            created_at,
        })
    }
}
