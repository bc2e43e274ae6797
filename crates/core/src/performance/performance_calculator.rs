//! Daily and monthly rollups over the trade ledger.
//!
//! Every function here is a pure recomputation: inputs are never mutated and
//! the output only depends on the set of records, not their order.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, TimeZone};
use chrono_tz::Tz;
use rust_decimal::Decimal;

use super::performance_model::{DailyRollup, MonthlyRollup, PerformanceSummary};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::trades::TradeRecord;
use crate::transactions::{TransactionKind, TransactionRecord};
use crate::utils::time_utils::{journal_date_in, month_key};

/// Groups trades by local calendar day, most recent day first.
pub fn compute_daily_rollups(trades: &[TradeRecord]) -> Vec<DailyRollup> {
    compute_daily_rollups_in(trades, &Local)
}

/// Groups trades by calendar day in `tz`, most recent day first.
pub fn compute_daily_rollups_in<Z: TimeZone>(trades: &[TradeRecord], tz: &Z) -> Vec<DailyRollup> {
    let mut by_date: BTreeMap<NaiveDate, DailyRollup> = BTreeMap::new();

    for trade in trades {
        let date = journal_date_in(trade.created_at, tz);
        by_date
            .entry(date)
            .or_insert_with(|| DailyRollup::empty(date))
            .record(trade);
    }

    by_date.into_values().rev().collect()
}

/// Groups trades by local calendar month, most recent month first.
///
/// Deposits and withdrawals stay zero; see
/// [`compute_monthly_rollups_with_flows_in`] to populate them.
pub fn compute_monthly_rollups(trades: &[TradeRecord]) -> Vec<MonthlyRollup> {
    compute_monthly_rollups_in(trades, &Local)
}

/// Groups trades by calendar month in `tz`, most recent month first.
pub fn compute_monthly_rollups_in<Z: TimeZone>(
    trades: &[TradeRecord],
    tz: &Z,
) -> Vec<MonthlyRollup> {
    into_descending(group_trades_by_month(trades, tz))
}

/// Local-time variant of [`compute_monthly_rollups_with_flows_in`].
pub fn compute_monthly_rollups_with_flows(
    trades: &[TradeRecord],
    transactions: &[TransactionRecord],
) -> Vec<MonthlyRollup> {
    compute_monthly_rollups_with_flows_in(trades, transactions, &Local)
}

/// Monthly rollups that also carry the month's deposits and withdrawals.
///
/// Months with cash flows but no trades are included with zero trade figures.
pub fn compute_monthly_rollups_with_flows_in<Z: TimeZone>(
    trades: &[TradeRecord],
    transactions: &[TransactionRecord],
    tz: &Z,
) -> Vec<MonthlyRollup> {
    let mut by_month = group_trades_by_month(trades, tz);

    for transaction in transactions {
        let key = month_key(journal_date_in(transaction.created_at, tz));
        let rollup = by_month
            .entry(key.clone())
            .or_insert_with(|| MonthlyRollup::empty(key));
        match transaction.kind {
            TransactionKind::Deposit => rollup.deposits += transaction.amount,
            TransactionKind::Withdrawal => rollup.withdrawals += transaction.amount,
        }
    }

    into_descending(by_month)
}

/// Daily rollups and cash-flow aware monthly rollups, bucketed in `tz` or on
/// the device clock when no timezone is configured.
pub fn compute_rollups(
    trades: &[TradeRecord],
    transactions: &[TransactionRecord],
    tz: Option<Tz>,
) -> (Vec<DailyRollup>, Vec<MonthlyRollup>) {
    match tz {
        Some(tz) => (
            compute_daily_rollups_in(trades, &tz),
            compute_monthly_rollups_with_flows_in(trades, transactions, &tz),
        ),
        None => (
            compute_daily_rollups(trades),
            compute_monthly_rollups_with_flows(trades, transactions),
        ),
    }
}

/// Builds the dashboard figures from already sorted rollups.
///
/// Months without trades, such as deposit-only months from
/// [`compute_monthly_rollups_with_flows`], are not compared.
pub fn summarize_performance(
    daily: &[DailyRollup],
    monthly: &[MonthlyRollup],
    trades: &[TradeRecord],
) -> PerformanceSummary {
    let mut trading_months = monthly.iter().filter(|m| m.trade_count > 0);
    let current_month = trading_months.next();
    let previous_month = trading_months.next();

    let monthly_change_percent = match (current_month, previous_month) {
        (Some(current), Some(previous)) => monthly_change(current.net, previous.net),
        _ => Decimal::ZERO,
    };

    PerformanceSummary {
        latest_day: daily.first().cloned(),
        previous_day: daily.get(1).cloned(),
        current_month: current_month.cloned(),
        previous_month: previous_month.cloned(),
        monthly_change_percent,
        win_rate_percent: win_rate(trades),
        trade_count: trades.len(),
    }
}

/// Percentage of trades closed in profit; zero for an empty ledger.
pub fn win_rate(trades: &[TradeRecord]) -> Decimal {
    if trades.is_empty() {
        return Decimal::ZERO;
    }
    let wins = trades.iter().filter(|t| t.is_profit()).count();
    (Decimal::from(wins) / Decimal::from(trades.len()) * Decimal::ONE_HUNDRED)
        .round_dp(DISPLAY_DECIMAL_PRECISION)
}

fn monthly_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return Decimal::ZERO;
    }
    ((current - previous) / previous.abs() * Decimal::ONE_HUNDRED)
        .round_dp(DISPLAY_DECIMAL_PRECISION)
}

fn group_trades_by_month<Z: TimeZone>(
    trades: &[TradeRecord],
    tz: &Z,
) -> BTreeMap<String, MonthlyRollup> {
    let mut by_month: BTreeMap<String, MonthlyRollup> = BTreeMap::new();
    for trade in trades {
        let key = month_key(journal_date_in(trade.created_at, tz));
        by_month
            .entry(key.clone())
            .or_insert_with(|| MonthlyRollup::empty(key))
            .record(trade);
    }
    by_month
}

// Zero-padded keys sort chronologically.
fn into_descending(by_month: BTreeMap<String, MonthlyRollup>) -> Vec<MonthlyRollup> {
    by_month.into_values().rev().collect()
}
