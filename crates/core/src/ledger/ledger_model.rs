use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifetime totals over an owner's trades and cash transactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    pub total_profit: Decimal,
    pub total_loss: Decimal,
    /// Always `total_profit - total_loss`.
    pub net_profit: Decimal,
    pub total_deposits: Decimal,
    pub total_withdrawals: Decimal,
    /// Always `total_deposits - total_withdrawals`.
    pub balance: Decimal,
}
