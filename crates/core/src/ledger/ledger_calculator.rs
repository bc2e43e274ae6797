use rust_decimal::Decimal;

use super::ledger_model::LedgerTotals;
use crate::trades::{TradeOutcome, TradeRecord};
use crate::transactions::{TransactionKind, TransactionRecord};

/// Computes the cash balance as deposits minus withdrawals.
///
/// Always recomputed from the full transaction list; the result does not
/// depend on the order of `transactions`. Empty input yields zero.
pub fn compute_balance(transactions: &[TransactionRecord]) -> Decimal {
    transactions
        .iter()
        .map(TransactionRecord::signed_amount)
        .sum()
}

/// Computes lifetime profit, loss and cash-flow totals.
pub fn compute_totals(trades: &[TradeRecord], transactions: &[TransactionRecord]) -> LedgerTotals {
    let mut totals = LedgerTotals::default();

    for trade in trades {
        match trade.outcome {
            TradeOutcome::Profit => totals.total_profit += trade.amount,
            TradeOutcome::Loss => totals.total_loss += trade.amount,
        }
    }

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Deposit => totals.total_deposits += transaction.amount,
            TransactionKind::Withdrawal => totals.total_withdrawals += transaction.amount,
        }
    }

    totals.net_profit = totals.total_profit - totals.total_loss;
    totals.balance = totals.total_deposits - totals.total_withdrawals;
    totals
}
