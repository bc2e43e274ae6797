use super::trades_model::{NewTrade, TradeRecord};
use super::trades_traits::{TradeRepositoryTrait, TradeServiceTrait};
use crate::errors::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct TradeService {
    repository: Arc<dyn TradeRepositoryTrait>,
}

impl TradeService {
    pub fn new(repository: Arc<dyn TradeRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TradeServiceTrait for TradeService {
    fn get_trades(&self, owner_id: &str) -> Result<Vec<TradeRecord>> {
        let mut trades = self.repository.list_by_owner(owner_id)?;
        trades.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!("Loaded {} trades for owner {}", trades.len(), owner_id);
        Ok(trades)
    }

    async fn add_trade(&self, new_trade: NewTrade) -> Result<TradeRecord> {
        new_trade.validate()?;
        let trade = self.repository.insert(new_trade).await?;
        debug!(
            "Logged {} trade {} on {} for {}",
            trade.outcome, trade.id, trade.instrument, trade.amount
        );
        Ok(trade)
    }
}
