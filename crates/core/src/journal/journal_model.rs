use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::forecast::Forecast;
use crate::performance::{DailyRollup, MonthlyRollup};
use crate::trades::TradeRecord;
use crate::transactions::TransactionRecord;

/// Everything the dashboard shows for one owner.
///
/// Records are kept newest first. Derived collections are always replaced
/// wholesale, never patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalState {
    pub owner_id: String,
    pub trades: Vec<TradeRecord>,
    pub transactions: Vec<TransactionRecord>,
    pub balance: Decimal,
    pub daily_rollups: Vec<DailyRollup>,
    pub monthly_rollups: Vec<MonthlyRollup>,
    pub forecasts: Vec<Forecast>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JournalState {
    pub fn empty(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            ..Self::default()
        }
    }
}
