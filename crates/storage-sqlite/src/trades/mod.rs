//! Local backend storage for trades.

mod model;
mod repository;

pub use model::{NewTradeDB, TradeDB};
pub use repository::TradeRepository;
