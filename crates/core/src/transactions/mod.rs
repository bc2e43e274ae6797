//! Transactions module - deposits and withdrawals.

mod transactions_model;
mod transactions_service;
mod transactions_traits;

pub use transactions_model::{NewTransaction, TransactionKind, TransactionRecord};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
