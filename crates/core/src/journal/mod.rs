//! Journal controller - owns the dashboard state of one owner.

mod journal_controller;
mod journal_model;
mod journal_traits;

pub use journal_controller::JournalController;
pub use journal_model::JournalState;
pub use journal_traits::JournalStateRepositoryTrait;

#[cfg(test)]
mod journal_controller_tests;
