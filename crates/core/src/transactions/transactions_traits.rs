use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, TransactionRecord};
use async_trait::async_trait;

/// Trait for transaction repository operations
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<TransactionRecord>>;
    async fn insert(&self, new_transaction: NewTransaction) -> Result<TransactionRecord>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Returns the owner's transactions, newest first.
    fn get_transactions(&self, owner_id: &str) -> Result<Vec<TransactionRecord>>;
    async fn add_transaction(&self, new_transaction: NewTransaction) -> Result<TransactionRecord>;
}
