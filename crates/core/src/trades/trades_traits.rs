use crate::errors::Result;
use crate::trades::trades_model::{NewTrade, TradeRecord};
use async_trait::async_trait;

/// Trait for trade repository operations
#[async_trait]
pub trait TradeRepositoryTrait: Send + Sync {
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<TradeRecord>>;
    async fn insert(&self, new_trade: NewTrade) -> Result<TradeRecord>;
}

/// Trait for trade service operations
#[async_trait]
pub trait TradeServiceTrait: Send + Sync {
    /// Returns the owner's trades, newest first.
    fn get_trades(&self, owner_id: &str) -> Result<Vec<TradeRecord>>;
    async fn add_trade(&self, new_trade: NewTrade) -> Result<TradeRecord>;
}
