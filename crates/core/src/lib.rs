//! Trade Journal Core - Domain entities, calculators, services, and traits.
//!
//! This crate contains the performance aggregation and forecasting engine
//! together with the record services built around it. It is
//! storage-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod forecast;
pub mod journal;
pub mod learning;
pub mod ledger;
pub mod performance;
pub mod reminders;
pub mod trades;
pub mod transactions;
pub mod utils;

// Re-export the calculator entry points
pub use forecast::{generate_forecast, Forecast};
pub use ledger::compute_balance;
pub use performance::{compute_daily_rollups, compute_monthly_rollups, DailyRollup, MonthlyRollup};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
