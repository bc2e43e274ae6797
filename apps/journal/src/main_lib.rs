use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, NotificationMode};
use crate::scheduler::LoggingNotificationScheduler;
use tradejournal_core::{
    journal::{JournalController, JournalState},
    learning::{LearningService, LearningServiceTrait},
    ledger::LedgerTotals,
    performance::PerformanceSummary,
    reminders::{
        NoOpNotificationScheduler, NotificationScheduler, Reminder, ReminderService,
        ReminderServiceTrait,
    },
    trades::{TradeService, CURRENCY_PAIRS},
    transactions::TransactionService,
};
use tradejournal_storage_sqlite::{
    db::{self, write_actor},
    journal::JournalStateRepository,
    learning::LearningResourceRepository,
    reminders::ReminderRepository,
    trades::TradeRepository,
    transactions::TransactionRepository,
    KeyValueStore, LocalBackend,
};

pub struct AppState {
    pub journal: Mutex<JournalController>,
    pub reminder_service: Arc<dyn ReminderServiceTrait>,
    pub learning_service: Arc<dyn LearningServiceTrait>,
    pub db_path: String,
}

/// Everything one refresh cycle reports.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub journal: JournalState,
    pub summary: PerformanceSummary,
    pub totals: LedgerTotals,
    pub reminders: Vec<Reminder>,
    pub scheduled_notifications: usize,
    pub learning_categories: Vec<String>,
    pub currency_pairs: Vec<String>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TJ_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // The dashboard goes to stdout, so logs go to stderr.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let connection = db::open(&db_path)?;
    let writer = write_actor::spawn_writer(connection.clone());

    let backend = Arc::new(LocalBackend::new(connection.clone(), writer.clone()));
    let kv = Arc::new(KeyValueStore::new(connection, writer));

    let trade_service = Arc::new(TradeService::new(Arc::new(TradeRepository::new(
        backend.clone(),
    ))));
    let transaction_service = Arc::new(TransactionService::new(Arc::new(
        TransactionRepository::new(backend.clone()),
    )));
    let state_repository = Arc::new(JournalStateRepository::new(kv.clone()));

    let journal = JournalController::new(
        config.user_id.clone(),
        trade_service,
        transaction_service,
        state_repository,
    )
    .with_timezone(config.timezone)
    .with_forecast_horizon(config.forecast_days);

    let notification_scheduler: Arc<dyn NotificationScheduler> = match config.notifications {
        NotificationMode::Log => Arc::new(LoggingNotificationScheduler::default()),
        NotificationMode::Off => Arc::new(NoOpNotificationScheduler),
    };
    let reminder_service = Arc::new(ReminderService::new(
        Arc::new(ReminderRepository::new(kv)),
        notification_scheduler,
    ));

    let learning_service = Arc::new(LearningService::new(Arc::new(
        LearningResourceRepository::new(backend),
    )));

    Ok(Arc::new(AppState {
        journal: Mutex::new(journal),
        reminder_service,
        learning_service,
        db_path,
    }))
}

/// Restores, reloads and reschedules, then collects the dashboard.
pub async fn run_refresh_cycle(state: &AppState) -> anyhow::Result<Dashboard> {
    let mut journal = state.journal.lock().await;

    if journal.restore()? {
        tracing::debug!("Restored cached journal for {}", journal.owner_id());
    }
    journal.load().await?;

    let scheduled_notifications = match state.reminder_service.schedule_reminders().await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!("Reminder scheduling failed: {}", e);
            0
        }
    };

    tracing::info!(
        "Journal for {} refreshed from {}: {} trades, {} forecasts",
        journal.owner_id(),
        state.db_path,
        journal.state().trades.len(),
        journal.state().forecasts.len()
    );

    Ok(Dashboard {
        journal: journal.state().clone(),
        summary: journal.summary(),
        totals: journal.totals(),
        reminders: state.reminder_service.get_reminders()?,
        scheduled_notifications,
        learning_categories: state.learning_service.get_categories(),
        currency_pairs: CURRENCY_PAIRS.iter().map(|p| p.to_string()).collect(),
    })
}
