use std::sync::Arc;

use chrono_tz::Tz;
use log::{debug, warn};

use super::journal_model::JournalState;
use super::journal_traits::JournalStateRepositoryTrait;
use crate::constants::DEFAULT_FORECAST_HORIZON;
use crate::errors::Result;
use crate::forecast::{generate_forecast_from, Forecast};
use crate::ledger::{compute_balance, compute_totals, LedgerTotals};
use crate::performance::{compute_rollups, summarize_performance, PerformanceSummary};
use crate::trades::{NewTrade, TradeRecord, TradeServiceTrait};
use crate::transactions::{NewTransaction, TransactionRecord, TransactionServiceTrait};
use crate::utils::time_utils::journal_today;

/// Owns the derived journal state of a single owner.
///
/// Every mutation recomputes the derived collections from the full record set
/// and persists the result. A failing operation leaves its message in
/// [`JournalState::error`]; the next successful one clears it.
pub struct JournalController {
    trade_service: Arc<dyn TradeServiceTrait>,
    transaction_service: Arc<dyn TransactionServiceTrait>,
    state_repository: Arc<dyn JournalStateRepositoryTrait>,
    timezone: Option<Tz>,
    forecast_horizon: usize,
    state: JournalState,
}

impl JournalController {
    pub fn new(
        owner_id: impl Into<String>,
        trade_service: Arc<dyn TradeServiceTrait>,
        transaction_service: Arc<dyn TransactionServiceTrait>,
        state_repository: Arc<dyn JournalStateRepositoryTrait>,
    ) -> Self {
        Self {
            trade_service,
            transaction_service,
            state_repository,
            timezone: None,
            forecast_horizon: DEFAULT_FORECAST_HORIZON,
            state: JournalState::empty(owner_id),
        }
    }

    /// Buckets dates in `timezone` instead of the device clock.
    pub fn with_timezone(mut self, timezone: Option<Tz>) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_forecast_horizon(mut self, days: usize) -> Self {
        self.forecast_horizon = days;
        self
    }

    pub fn state(&self) -> &JournalState {
        &self.state
    }

    pub fn owner_id(&self) -> &str {
        &self.state.owner_id
    }

    /// Replaces the in-memory state with the persisted one, if any.
    ///
    /// Returns whether a persisted state was found.
    pub fn restore(&mut self) -> Result<bool> {
        let loaded = self.state_repository.load_state(&self.state.owner_id);
        match self.track(loaded)? {
            Some(state) => {
                debug!(
                    "Restored journal for {} ({} trades, {} transactions)",
                    state.owner_id,
                    state.trades.len(),
                    state.transactions.len()
                );
                self.state = state;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reloads every record and recomputes the whole state.
    pub async fn load(&mut self) -> Result<()> {
        let result = self.reload().await;
        self.track(result)
    }

    async fn reload(&mut self) -> Result<()> {
        let owner_id = self.state.owner_id.clone();
        self.state.trades = self.trade_service.get_trades(&owner_id)?;
        self.state.transactions = self.transaction_service.get_transactions(&owner_id)?;
        self.recompute_rollups();
        if !self.state.daily_rollups.is_empty() {
            self.state.forecasts = self.draw_forecast(self.forecast_horizon)?;
        }
        self.persist().await
    }

    /// Logs a trade for this journal's owner.
    pub async fn add_trade(&mut self, mut new_trade: NewTrade) -> Result<TradeRecord> {
        new_trade.owner_id = self.state.owner_id.clone();
        let result = self.insert_trade(new_trade).await;
        self.track(result)
    }

    async fn insert_trade(&mut self, new_trade: NewTrade) -> Result<TradeRecord> {
        let trade = self.trade_service.add_trade(new_trade).await?;
        self.state.trades.insert(0, trade.clone());
        self.recompute_rollups();
        if !self.state.daily_rollups.is_empty() {
            self.state.forecasts = self.draw_forecast(self.forecast_horizon)?;
        }
        self.persist().await?;
        Ok(trade)
    }

    /// Records a deposit or withdrawal for this journal's owner.
    pub async fn add_transaction(
        &mut self,
        mut new_transaction: NewTransaction,
    ) -> Result<TransactionRecord> {
        new_transaction.owner_id = self.state.owner_id.clone();
        let result = self.insert_transaction(new_transaction).await;
        self.track(result)
    }

    async fn insert_transaction(
        &mut self,
        new_transaction: NewTransaction,
    ) -> Result<TransactionRecord> {
        let transaction = self
            .transaction_service
            .add_transaction(new_transaction)
            .await?;
        self.state.transactions.insert(0, transaction.clone());
        self.recompute_rollups();
        self.persist().await?;
        Ok(transaction)
    }

    /// Regenerates the forecast over `days` (or the configured horizon).
    ///
    /// Previous forecasts survive a failure.
    pub async fn refresh_forecast(&mut self, days: Option<usize>) -> Result<Vec<Forecast>> {
        let days = days.unwrap_or(self.forecast_horizon);
        let result = match self.draw_forecast(days) {
            Ok(forecasts) => {
                self.state.forecasts = forecasts.clone();
                self.persist().await.map(|_| forecasts)
            }
            Err(e) => Err(e),
        };
        self.track(result)
    }

    pub fn summary(&self) -> PerformanceSummary {
        summarize_performance(
            &self.state.daily_rollups,
            &self.state.monthly_rollups,
            &self.state.trades,
        )
    }

    pub fn totals(&self) -> LedgerTotals {
        compute_totals(&self.state.trades, &self.state.transactions)
    }

    fn recompute_rollups(&mut self) {
        let state = &mut self.state;
        state.balance = compute_balance(&state.transactions);
        (state.daily_rollups, state.monthly_rollups) =
            compute_rollups(&state.trades, &state.transactions, self.timezone);
    }

    fn draw_forecast(&self, days: usize) -> Result<Vec<Forecast>> {
        let today = journal_today(self.timezone);
        Ok(generate_forecast_from(
            &self.state.daily_rollups,
            days,
            today,
            &mut rand::thread_rng(),
        )?)
    }

    async fn persist(&self) -> Result<()> {
        self.state_repository.save_state(&self.state).await
    }

    fn track<T>(&mut self, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => self.state.error = None,
            Err(e) => {
                warn!("Journal operation failed for {}: {}", self.state.owner_id, e);
                self.state.error = Some(e.to_string());
            }
        }
        result
    }
}
