//! Key-value storage for reminders.

mod repository;

pub use repository::{ReminderRepository, REMINDERS_KEY};
