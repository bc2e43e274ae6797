use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

use super::model::{NewTransactionDB, TransactionDB};
use crate::backend::{LocalBackend, TRANSACTIONS_TABLE};
use crate::errors::{IntoCore, StorageError};
use tradejournal_core::errors::Result;
use tradejournal_core::transactions::{
    NewTransaction, TransactionRecord, TransactionRepositoryTrait,
};

pub struct TransactionRepository {
    backend: Arc<LocalBackend>,
}

impl TransactionRepository {
    pub fn new(backend: Arc<LocalBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<TransactionRecord>> {
        let rows = self
            .backend
            .select_eq(TRANSACTIONS_TABLE, "user_id", owner_id)?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                serde_json::from_value::<TransactionDB>(row)
                    .map_err(StorageError::from)
                    .and_then(TransactionRecord::try_from)
                    .map_err(|e| warn!("Skipping unreadable transaction row: {}", e))
                    .ok()
            })
            .collect())
    }

    async fn insert(&self, new_transaction: NewTransaction) -> Result<TransactionRecord> {
        let row = serde_json::to_value(NewTransactionDB::from(new_transaction)).into_core()?;
        let stored = self.backend.insert(TRANSACTIONS_TABLE, row).await?;
        let db: TransactionDB = serde_json::from_value(stored).into_core()?;
        Ok(TransactionRecord::try_from(db)?)
    }
}
