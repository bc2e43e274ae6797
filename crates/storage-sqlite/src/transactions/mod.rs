//! Local backend storage for deposits and withdrawals.

mod model;
mod repository;

pub use model::{NewTransactionDB, TransactionDB};
pub use repository::TransactionRepository;
