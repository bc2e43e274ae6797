use super::reminders_model::{notifications_for, NewReminder, Reminder, ReminderUpdate};
use super::reminders_traits::{ReminderRepositoryTrait, ReminderServiceTrait};
use super::scheduler::NotificationScheduler;
use super::ReminderError;
use crate::errors::Result;
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

pub struct ReminderService {
    repository: Arc<dyn ReminderRepositoryTrait>,
    scheduler: Arc<dyn NotificationScheduler>,
    has_permission: AtomicBool,
}

impl ReminderService {
    pub fn new(
        repository: Arc<dyn ReminderRepositoryTrait>,
        scheduler: Arc<dyn NotificationScheduler>,
    ) -> Self {
        Self {
            repository,
            scheduler,
            has_permission: AtomicBool::new(false),
        }
    }

    fn find(&self, reminder_id: &str) -> Result<Reminder> {
        self.repository
            .load_reminders()?
            .into_iter()
            .find(|r| r.id == reminder_id)
            .ok_or_else(|| ReminderError::NotFound(reminder_id.to_string()).into())
    }

    /// Reschedules after a mutation; the mutation stands even if this fails.
    async fn reschedule(&self) {
        if let Err(e) = self.schedule_reminders().await {
            warn!("Failed to reschedule reminders: {}", e);
        }
    }

    async fn ensure_permission(&self) -> Result<()> {
        if self.has_permission.load(Ordering::Acquire) {
            return Ok(());
        }
        let granted = self.scheduler.request_permission().await?;
        self.has_permission.store(granted, Ordering::Release);
        if granted {
            Ok(())
        } else {
            Err(ReminderError::PermissionDenied.into())
        }
    }
}

#[async_trait]
impl ReminderServiceTrait for ReminderService {
    fn get_reminders(&self) -> Result<Vec<Reminder>> {
        self.repository.load_reminders()
    }

    async fn add_reminder(&self, new_reminder: NewReminder) -> Result<Reminder> {
        new_reminder.validate()?;
        let reminder = Reminder::from_new(Uuid::new_v4().to_string(), new_reminder);
        let reminder = self.repository.insert(reminder).await?;
        if reminder.enabled {
            self.reschedule().await;
        }
        Ok(reminder)
    }

    async fn update_reminder(&self, reminder_id: &str, update: ReminderUpdate) -> Result<Reminder> {
        let merged = self.find(reminder_id)?.merged(update)?;
        let reminder = self.repository.update(merged).await?;
        self.reschedule().await;
        Ok(reminder)
    }

    async fn delete_reminder(&self, reminder_id: &str) -> Result<usize> {
        let deleted = self.repository.delete(reminder_id).await?;
        self.reschedule().await;
        Ok(deleted)
    }

    async fn toggle_reminder(&self, reminder_id: &str) -> Result<Reminder> {
        let current = self.find(reminder_id)?;
        self.update_reminder(
            reminder_id,
            ReminderUpdate {
                enabled: Some(!current.enabled),
                ..Default::default()
            },
        )
        .await
    }

    async fn schedule_reminders(&self) -> Result<usize> {
        if !self.scheduler.is_available() {
            debug!("Notifications unavailable on this platform, skipping scheduling");
            return Ok(0);
        }

        self.scheduler.cancel_all().await?;
        self.ensure_permission().await?;

        let mut scheduled = 0;
        for reminder in self.repository.load_reminders()?.iter().filter(|r| r.enabled) {
            let notifications = match notifications_for(reminder) {
                Ok(notifications) => notifications,
                Err(e) => {
                    warn!("Skipping reminder {}: {}", reminder.id, e);
                    continue;
                }
            };
            for notification in notifications {
                self.scheduler.schedule(notification).await?;
                scheduled += 1;
            }
        }

        debug!("Scheduled {} reminder notifications", scheduled);
        Ok(scheduled)
    }
}
