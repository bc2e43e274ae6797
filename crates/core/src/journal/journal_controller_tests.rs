use super::*;
use crate::constants::DEFAULT_FORECAST_HORIZON;
use crate::errors::{Error, Result};
use crate::forecast::{Forecast, ForecastError};
use crate::trades::{
    NewTrade, TradeOutcome, TradeRecord, TradeRepositoryTrait, TradeService,
};
use crate::transactions::{
    NewTransaction, TransactionKind, TransactionRecord, TransactionRepositoryTrait,
    TransactionService,
};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

fn stamp(index: usize) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap() + Duration::minutes(index as i64)
}

#[derive(Default)]
struct InMemoryTrades {
    trades: Mutex<Vec<TradeRecord>>,
}

#[async_trait]
impl TradeRepositoryTrait for InMemoryTrades {
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<TradeRecord>> {
        Ok(self
            .trades
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, new_trade: NewTrade) -> Result<TradeRecord> {
        let mut trades = self.trades.lock().unwrap();
        let trade = TradeRecord {
            id: format!("trade-{}", trades.len() + 1),
            owner_id: new_trade.owner_id,
            amount: new_trade.amount,
            outcome: new_trade.outcome,
            instrument: new_trade.instrument,
            note: new_trade.note,
            created_at: stamp(trades.len()),
        };
        trades.push(trade.clone());
        Ok(trade)
    }
}

#[derive(Default)]
struct InMemoryTransactions {
    transactions: Mutex<Vec<TransactionRecord>>,
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryTransactions {
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<TransactionRecord>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, new_transaction: NewTransaction) -> Result<TransactionRecord> {
        let mut transactions = self.transactions.lock().unwrap();
        let transaction = TransactionRecord {
            id: format!("tx-{}", transactions.len() + 1),
            owner_id: new_transaction.owner_id,
            amount: new_transaction.amount,
            kind: new_transaction.kind,
            note: new_transaction.note,
            created_at: stamp(transactions.len()),
        };
        transactions.push(transaction.clone());
        Ok(transaction)
    }
}

#[derive(Default)]
struct MockStateRepository {
    saved: Mutex<Vec<JournalState>>,
    persisted: Mutex<Option<JournalState>>,
}

#[async_trait]
impl JournalStateRepositoryTrait for MockStateRepository {
    fn load_state(&self, owner_id: &str) -> Result<Option<JournalState>> {
        Ok(self
            .persisted
            .lock()
            .unwrap()
            .clone()
            .filter(|state| state.owner_id == owner_id))
    }

    async fn save_state(&self, state: &JournalState) -> Result<()> {
        self.saved.lock().unwrap().push(state.clone());
        Ok(())
    }
}

struct Fixture {
    trades: Arc<InMemoryTrades>,
    transactions: Arc<InMemoryTransactions>,
    states: Arc<MockStateRepository>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            trades: Arc::new(InMemoryTrades::default()),
            transactions: Arc::new(InMemoryTransactions::default()),
            states: Arc::new(MockStateRepository::default()),
        }
    }

    fn controller(&self) -> JournalController {
        JournalController::new(
            "user-1",
            Arc::new(TradeService::new(self.trades.clone())),
            Arc::new(TransactionService::new(self.transactions.clone())),
            self.states.clone(),
        )
        .with_timezone(Some(chrono_tz::UTC))
    }

    async fn seed(&self) {
        let repo = self.trades.clone();
        repo.insert(new_trade(dec!(120.50), TradeOutcome::Profit)).await.unwrap();
        repo.insert(new_trade(dec!(45.75), TradeOutcome::Loss)).await.unwrap();

        let repo = self.transactions.clone();
        repo.insert(new_transaction(dec!(1000), TransactionKind::Deposit))
            .await
            .unwrap();
        repo.insert(new_transaction(dec!(250), TransactionKind::Withdrawal))
            .await
            .unwrap();
    }
}

fn new_trade(amount: rust_decimal::Decimal, outcome: TradeOutcome) -> NewTrade {
    NewTrade {
        owner_id: "user-1".to_string(),
        amount,
        outcome,
        instrument: "EUR/USD".to_string(),
        note: None,
    }
}

fn new_transaction(amount: rust_decimal::Decimal, kind: TransactionKind) -> NewTransaction {
    NewTransaction {
        owner_id: "user-1".to_string(),
        amount,
        kind,
        note: None,
    }
}

#[tokio::test]
async fn test_load_recomputes_everything_and_persists() {
    let fixture = Fixture::new();
    fixture.seed().await;
    let mut controller = fixture.controller();

    controller.load().await.unwrap();

    let state = controller.state();
    assert_eq!(state.trades.len(), 2);
    assert_eq!(state.trades[0].id, "trade-2");
    assert_eq!(state.balance, dec!(750));
    assert_eq!(state.daily_rollups.len(), 1);
    assert_eq!(
        state.daily_rollups[0].date,
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    );
    assert_eq!(state.daily_rollups[0].net, dec!(74.75));
    assert_eq!(state.monthly_rollups[0].deposits, dec!(1000));
    assert_eq!(state.monthly_rollups[0].withdrawals, dec!(250));
    assert_eq!(state.forecasts.len(), DEFAULT_FORECAST_HORIZON);
    assert!(state.error.is_none());
    assert_eq!(fixture.states.saved.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_load_without_trades_has_no_forecast() {
    let fixture = Fixture::new();
    let mut controller = fixture.controller();

    controller.load().await.unwrap();

    assert!(controller.state().forecasts.is_empty());
    assert!(controller.state().daily_rollups.is_empty());
    assert!(controller.state().error.is_none());
}

#[tokio::test]
async fn test_add_trade_prepends_and_records_for_owner() {
    let fixture = Fixture::new();
    fixture.seed().await;
    let mut controller = fixture.controller();
    controller.load().await.unwrap();

    let mut input = new_trade(dec!(30), TradeOutcome::Profit);
    input.owner_id = "someone-else".to_string();
    let trade = controller.add_trade(input).await.unwrap();

    assert_eq!(trade.owner_id, "user-1");
    assert_eq!(controller.state().trades[0].id, trade.id);
    assert_eq!(controller.state().daily_rollups[0].net, dec!(104.75));
    assert_eq!(controller.state().daily_rollups[0].trade_count, 3);
    assert_eq!(fixture.states.saved.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_failed_operation_sets_error_and_success_clears_it() {
    let fixture = Fixture::new();
    let mut controller = fixture.controller();

    let result = controller
        .add_trade(new_trade(dec!(0), TradeOutcome::Profit))
        .await;
    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(controller.state().error.is_some());
    assert!(controller.state().trades.is_empty());

    controller
        .add_transaction(new_transaction(dec!(500), TransactionKind::Deposit))
        .await
        .unwrap();
    assert!(controller.state().error.is_none());
    assert_eq!(controller.state().balance, dec!(500));
    assert_eq!(controller.totals().total_deposits, dec!(500));
}

#[tokio::test]
async fn test_refresh_forecast_keeps_previous_forecasts_on_insufficient_data() {
    let fixture = Fixture::new();
    let previous = Forecast {
        date: NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
        predicted_profit: dec!(12.00),
        confidence: dec!(0.50),
        factors: vec!["Stable market conditions".to_string()],
    };
    let mut persisted = JournalState::empty("user-1");
    persisted.forecasts = vec![previous.clone()];
    *fixture.states.persisted.lock().unwrap() = Some(persisted);

    let mut controller = fixture.controller();
    assert!(controller.restore().unwrap());

    let result = controller.refresh_forecast(None).await;
    assert!(matches!(
        result,
        Err(Error::Forecast(ForecastError::InsufficientData))
    ));
    assert_eq!(controller.state().forecasts, vec![previous]);
    assert_eq!(
        controller.state().error.as_deref(),
        Some("Forecast failed: Not enough data for prediction")
    );
}

#[tokio::test]
async fn test_refresh_forecast_honours_requested_horizon() {
    let fixture = Fixture::new();
    fixture.seed().await;
    let mut controller = fixture.controller().with_forecast_horizon(5);
    controller.load().await.unwrap();
    assert_eq!(controller.state().forecasts.len(), 5);

    let forecasts = controller.refresh_forecast(Some(3)).await.unwrap();
    assert_eq!(forecasts.len(), 3);
    assert_eq!(controller.state().forecasts, forecasts);
}

#[tokio::test]
async fn test_refresh_forecast_rejects_oversized_horizon() {
    let fixture = Fixture::new();
    fixture.seed().await;
    let mut controller = fixture.controller();
    controller.load().await.unwrap();
    let previous = controller.state().forecasts.clone();
    assert_eq!(previous.len(), DEFAULT_FORECAST_HORIZON);

    let result = controller.refresh_forecast(Some(usize::MAX)).await;
    assert!(matches!(
        result,
        Err(Error::Forecast(ForecastError::HorizonTooLong { .. }))
    ));
    assert_eq!(controller.state().forecasts, previous);
    assert!(controller.state().error.is_some());
}

#[tokio::test]
async fn test_restore_without_persisted_state() {
    let fixture = Fixture::new();
    let mut controller = fixture.controller();

    assert!(!controller.restore().unwrap());
    assert_eq!(controller.owner_id(), "user-1");
    assert!(controller.state().trades.is_empty());
}

#[tokio::test]
async fn test_summary_reflects_loaded_state() {
    let fixture = Fixture::new();
    fixture.seed().await;
    let mut controller = fixture.controller();
    controller.load().await.unwrap();

    let summary = controller.summary();
    assert_eq!(summary.trade_count, 2);
    assert_eq!(summary.win_rate_percent, dec!(50.00));
    assert_eq!(summary.latest_day.map(|d| d.net), Some(dec!(74.75)));
    assert!(summary.previous_day.is_none());

    let totals = controller.totals();
    assert_eq!(totals.net_profit, dec!(74.75));
    assert_eq!(totals.balance, dec!(750));
}
