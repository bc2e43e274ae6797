//! Cash transaction domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Direction of a cash movement in or out of the trading account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deposit" => Ok(TransactionKind::Deposit),
            "withdrawal" => Ok(TransactionKind::Withdrawal),
            other => Err(ValidationError::InvalidRecord(format!(
                "Unknown transaction kind '{}'",
                other
            ))),
        }
    }
}

/// Domain model representing a deposit or withdrawal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub owner_id: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Amount signed by direction: positive for deposits.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdrawal => -self.amount,
        }
    }
}

/// Input model for recording a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub owner_id: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub note: Option<String>,
}

impl NewTransaction {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.owner_id.trim().is_empty() {
            return Err(ValidationError::MissingField("ownerId".to_string()));
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidRecord(format!(
                "Transaction amount must be greater than zero, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}
