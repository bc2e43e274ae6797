//! Trade domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Instrument labels offered when logging a trade.
pub const CURRENCY_PAIRS: [&str; 12] = [
    "EUR/USD", "GBP/USD", "USD/JPY", "USD/CHF", "AUD/USD", "USD/CAD", "NZD/USD", "EUR/GBP",
    "EUR/JPY", "GBP/JPY", "AUD/JPY", "CHF/JPY",
];

/// Whether a closed trade made or lost money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeOutcome {
    Profit,
    Loss,
}

impl TradeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeOutcome::Profit => "profit",
            TradeOutcome::Loss => "loss",
        }
    }
}

impl fmt::Display for TradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeOutcome {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "profit" => Ok(TradeOutcome::Profit),
            "loss" => Ok(TradeOutcome::Loss),
            other => Err(ValidationError::InvalidRecord(format!(
                "Unknown trade outcome '{}'",
                other
            ))),
        }
    }
}

/// Domain model representing a logged trade.
///
/// Trades are immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: String,
    pub owner_id: String,
    pub amount: Decimal,
    pub outcome: TradeOutcome,
    pub instrument: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TradeRecord {
    /// Amount signed by outcome: positive for profit, negative for loss.
    pub fn signed_amount(&self) -> Decimal {
        match self.outcome {
            TradeOutcome::Profit => self.amount,
            TradeOutcome::Loss => -self.amount,
        }
    }

    pub fn is_profit(&self) -> bool {
        self.outcome == TradeOutcome::Profit
    }
}

/// Input model for logging a new trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub owner_id: String,
    pub amount: Decimal,
    pub outcome: TradeOutcome,
    pub instrument: String,
    pub note: Option<String>,
}

impl NewTrade {
    /// Validates the trade before it reaches storage.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.owner_id.trim().is_empty() {
            return Err(ValidationError::MissingField("ownerId".to_string()));
        }
        if self.instrument.trim().is_empty() {
            return Err(ValidationError::MissingField("instrument".to_string()));
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidRecord(format!(
                "Trade amount must be greater than zero, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}
