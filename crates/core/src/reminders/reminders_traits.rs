use crate::errors::Result;
use crate::reminders::reminders_model::{NewReminder, Reminder, ReminderUpdate};
use async_trait::async_trait;

/// Trait for reminder repository operations
#[async_trait]
pub trait ReminderRepositoryTrait: Send + Sync {
    /// Loads all reminders; a fresh store yields the default reminders.
    fn load_reminders(&self) -> Result<Vec<Reminder>>;
    async fn insert(&self, reminder: Reminder) -> Result<Reminder>;
    async fn update(&self, reminder: Reminder) -> Result<Reminder>;
    async fn delete(&self, reminder_id: &str) -> Result<usize>;
}

/// Trait for reminder service operations
#[async_trait]
pub trait ReminderServiceTrait: Send + Sync {
    fn get_reminders(&self) -> Result<Vec<Reminder>>;
    async fn add_reminder(&self, new_reminder: NewReminder) -> Result<Reminder>;
    async fn update_reminder(&self, reminder_id: &str, update: ReminderUpdate) -> Result<Reminder>;
    async fn delete_reminder(&self, reminder_id: &str) -> Result<usize>;
    async fn toggle_reminder(&self, reminder_id: &str) -> Result<Reminder>;
    /// Replaces every scheduled notification; returns how many were scheduled.
    async fn schedule_reminders(&self) -> Result<usize>;
}
