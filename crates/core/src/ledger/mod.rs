//! Ledger calculations over raw trade and transaction records.

mod ledger_calculator;
mod ledger_model;

pub use ledger_calculator::{compute_balance, compute_totals};
pub use ledger_model::LedgerTotals;
