use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

use super::model::{NewTradeDB, TradeDB};
use crate::backend::{LocalBackend, TRADES_TABLE};
use crate::errors::{IntoCore, StorageError};
use tradejournal_core::errors::Result;
use tradejournal_core::trades::{NewTrade, TradeRecord, TradeRepositoryTrait};

pub struct TradeRepository {
    backend: Arc<LocalBackend>,
}

impl TradeRepository {
    pub fn new(backend: Arc<LocalBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl TradeRepositoryTrait for TradeRepository {
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<TradeRecord>> {
        let rows = self.backend.select_eq(TRADES_TABLE, "user_id", owner_id)?;
        let mut trades = Vec::with_capacity(rows.len());
        for row in rows {
            let parsed = serde_json::from_value::<TradeDB>(row)
                .map_err(StorageError::from)
                .and_then(TradeRecord::try_from);
            match parsed {
                Ok(trade) => trades.push(trade),
                Err(e) => warn!("Skipping unreadable trade row: {}", e),
            }
        }
        Ok(trades)
    }

    async fn insert(&self, new_trade: NewTrade) -> Result<TradeRecord> {
        let row = serde_json::to_value(NewTradeDB::from(new_trade)).into_core()?;
        let stored = self.backend.insert(TRADES_TABLE, row).await?;
        let db: TradeDB = serde_json::from_value(stored).into_core()?;
        Ok(TradeRecord::try_from(db)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{open, spawn_writer};
    use rust_decimal_macros::dec;
    use serde_json::json;
    use tradejournal_core::trades::TradeOutcome;

    fn repository() -> (tempfile::TempDir, Arc<LocalBackend>, TradeRepository) {
        let dir = tempfile::tempdir().unwrap();
        let db = open(dir.path().join("trades.db").to_str().unwrap()).unwrap();
        let backend = Arc::new(LocalBackend::new(db.clone(), spawn_writer(db)));
        let repository = TradeRepository::new(backend.clone());
        (dir, backend, repository)
    }

    #[tokio::test]
    async fn test_insert_and_list_round_trip_wire_names() {
        let (_dir, backend, repository) = repository();

        let trade = repository
            .insert(NewTrade {
                owner_id: "user-1".to_string(),
                amount: dec!(120.50),
                outcome: TradeOutcome::Profit,
                instrument: "GBP/USD".to_string(),
                note: Some("breakout".to_string()),
            })
            .await
            .unwrap();

        let rows = backend.select_all(TRADES_TABLE).unwrap();
        assert_eq!(rows[0]["user_id"], json!("user-1"));
        assert_eq!(rows[0]["type"], json!("profit"));
        assert_eq!(rows[0]["pair"], json!("GBP/USD"));
        assert_eq!(rows[0]["notes"], json!("breakout"));

        let listed = repository.list_by_owner("user-1").unwrap();
        assert_eq!(listed, vec![trade]);
        assert!(repository.list_by_owner("user-2").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_rows_are_skipped() {
        let (_dir, backend, repository) = repository();
        backend
            .insert(
                TRADES_TABLE,
                json!({ "user_id": "user-1", "amount": 5.0, "type": "bonus", "pair": "EUR/USD" }),
            )
            .await
            .unwrap();
        repository
            .insert(NewTrade {
                owner_id: "user-1".to_string(),
                amount: dec!(20),
                outcome: TradeOutcome::Loss,
                instrument: "EUR/USD".to_string(),
                note: None,
            })
            .await
            .unwrap();

        let listed = repository.list_by_owner("user-1").unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].outcome, TradeOutcome::Loss);
    }
}
