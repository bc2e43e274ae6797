use async_trait::async_trait;
use std::sync::Arc;

use crate::kv::KeyValueStore;
use tradejournal_core::errors::Result;
use tradejournal_core::reminders::{
    default_reminders, Reminder, ReminderError, ReminderRepositoryTrait,
};

pub const REMINDERS_KEY: &str = "reminders";

/// Stores the full reminder list under one key.
///
/// Until the list is first written, the default reminders are served.
pub struct ReminderRepository {
    kv: Arc<KeyValueStore>,
}

impl ReminderRepository {
    pub fn new(kv: Arc<KeyValueStore>) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl ReminderRepositoryTrait for ReminderRepository {
    fn load_reminders(&self) -> Result<Vec<Reminder>> {
        Ok(self
            .kv
            .get::<Vec<Reminder>>(REMINDERS_KEY)?
            .unwrap_or_else(default_reminders))
    }

    async fn insert(&self, reminder: Reminder) -> Result<Reminder> {
        self.kv
            .update(REMINDERS_KEY, move |current: Option<Vec<Reminder>>| {
                let mut reminders = current.unwrap_or_else(default_reminders);
                reminders.push(reminder.clone());
                Ok((reminders, reminder))
            })
            .await
    }

    async fn update(&self, reminder: Reminder) -> Result<Reminder> {
        self.kv
            .update(REMINDERS_KEY, move |current: Option<Vec<Reminder>>| {
                let mut reminders = current.unwrap_or_else(default_reminders);
                let slot = reminders
                    .iter_mut()
                    .find(|r| r.id == reminder.id)
                    .ok_or_else(|| ReminderError::NotFound(reminder.id.clone()))?;
                *slot = reminder.clone();
                Ok((reminders, reminder))
            })
            .await
    }

    async fn delete(&self, reminder_id: &str) -> Result<usize> {
        let reminder_id = reminder_id.to_string();
        self.kv
            .update(REMINDERS_KEY, move |current: Option<Vec<Reminder>>| {
                let mut reminders = current.unwrap_or_else(default_reminders);
                let before = reminders.len();
                reminders.retain(|r| r.id != reminder_id);
                let removed = before - reminders.len();
                Ok((reminders, removed))
            })
            .await
    }
}
