//! Backend row models for trades.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::StorageError;
use tradejournal_core::trades::{NewTrade, TradeOutcome, TradeRecord};

/// Trade row as stored in the `trades` table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TradeDB {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
    pub pair: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
}

/// Trade row before the backend assigns `id` and `created_at`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewTradeDB {
    pub user_id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
    pub pair: String,
    pub notes: Option<String>,
}

impl From<NewTrade> for NewTradeDB {
    fn from(trade: NewTrade) -> Self {
        Self {
            user_id: trade.owner_id,
            amount: trade.amount,
            kind: trade.outcome.as_str().to_string(),
            pair: trade.instrument,
            notes: trade.note,
        }
    }
}

impl TryFrom<TradeDB> for TradeRecord {
    type Error = StorageError;

    fn try_from(db: TradeDB) -> Result<Self, Self::Error> {
        let outcome: TradeOutcome = db
            .kind
            .parse()
            .map_err(|_| StorageError::InvalidRow(format!("trade {}: unknown type '{}'", db.id, db.kind)))?;
        if db.amount.is_sign_negative() {
            return Err(StorageError::InvalidRow(format!(
                "trade {}: negative amount {}",
                db.id, db.amount
            )));
        }
        let created_at = DateTime::parse_from_rfc3339(&db.created_at)
            .map_err(|e| {
                StorageError::InvalidRow(format!("trade {}: bad created_at: {}", db.id, e))
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id: db.id,
            owner_id: db.user_id,
            amount: db.amount,
            outcome,
            instrument: db.pair,
            note: db.notes,
            created_at,
        })
    }
}
