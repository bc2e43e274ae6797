use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::trades::{TradeOutcome, TradeRecord};

/// Profit and loss of all trades closed on one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRollup {
    /// Serialized as the `YYYY-MM-DD` bucket key.
    pub date: NaiveDate,
    pub profit: Decimal,
    pub loss: Decimal,
    pub net: Decimal,
    pub trade_count: u32,
}

impl DailyRollup {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            profit: Decimal::ZERO,
            loss: Decimal::ZERO,
            net: Decimal::ZERO,
            trade_count: 0,
        }
    }

    /// Folds one trade into the bucket, keeping `net == profit - loss`.
    pub fn record(&mut self, trade: &TradeRecord) {
        match trade.outcome {
            TradeOutcome::Profit => self.profit += trade.amount,
            TradeOutcome::Loss => self.loss += trade.amount,
        }
        self.net = self.profit - self.loss;
        self.trade_count += 1;
    }
}

/// Profit and loss of all trades closed in one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRollup {
    /// `YYYY-MM` bucket key.
    pub month: String,
    pub profit: Decimal,
    pub loss: Decimal,
    pub net: Decimal,
    pub trade_count: u32,
    /// Zero unless the rollup was built with cash flows.
    pub deposits: Decimal,
    /// Zero unless the rollup was built with cash flows.
    pub withdrawals: Decimal,
}

impl MonthlyRollup {
    pub fn empty(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            profit: Decimal::ZERO,
            loss: Decimal::ZERO,
            net: Decimal::ZERO,
            trade_count: 0,
            deposits: Decimal::ZERO,
            withdrawals: Decimal::ZERO,
        }
    }

    pub fn record(&mut self, trade: &TradeRecord) {
        match trade.outcome {
            TradeOutcome::Profit => self.profit += trade.amount,
            TradeOutcome::Loss => self.loss += trade.amount,
        }
        self.net = self.profit - self.loss;
        self.trade_count += 1;
    }
}

/// Dashboard figures derived from the rollups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    /// Most recent day with trades.
    pub latest_day: Option<DailyRollup>,
    /// Day with trades before `latest_day`.
    pub previous_day: Option<DailyRollup>,
    pub current_month: Option<MonthlyRollup>,
    pub previous_month: Option<MonthlyRollup>,
    /// Change of monthly net against the previous month, in percent.
    pub monthly_change_percent: Decimal,
    /// Share of profitable trades, in percent.
    pub win_rate_percent: Decimal,
    pub trade_count: usize,
}
