//! Performance aggregation: daily and monthly rollups over the trade ledger.

mod performance_calculator;
pub mod performance_model;

pub use performance_calculator::*;
pub use performance_model::*;
