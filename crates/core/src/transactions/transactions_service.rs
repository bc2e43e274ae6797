use super::transactions_model::{NewTransaction, TransactionRecord};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self, owner_id: &str) -> Result<Vec<TransactionRecord>> {
        let mut transactions = self.repository.list_by_owner(owner_id)?;
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(transactions)
    }

    async fn add_transaction(&self, new_transaction: NewTransaction) -> Result<TransactionRecord> {
        new_transaction.validate()?;
        let transaction = self.repository.insert(new_transaction).await?;
        debug!(
            "Recorded {} {} of {}",
            transaction.kind, transaction.id, transaction.amount
        );
        Ok(transaction)
    }
}
