//! Notification capability used by reminder scheduling.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ReminderError, ScheduledNotification};

/// Platform capability for local, repeating notifications.
///
/// Hosts inject an implementation at construction time. Platforms without
/// notifications use [`NoOpNotificationScheduler`].
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Whether this platform can deliver notifications at all.
    fn is_available(&self) -> bool;

    /// Asks the platform for permission; returns whether it was granted.
    async fn request_permission(&self) -> Result<bool, ReminderError>;

    /// Removes every notification previously scheduled by this app.
    async fn cancel_all(&self) -> Result<(), ReminderError>;

    async fn schedule(&self, notification: ScheduledNotification) -> Result<(), ReminderError>;
}

/// Scheduler for platforms lacking notifications; every call succeeds and
/// nothing is delivered.
#[derive(Clone, Default)]
pub struct NoOpNotificationScheduler;

#[async_trait]
impl NotificationScheduler for NoOpNotificationScheduler {
    fn is_available(&self) -> bool {
        false
    }

    async fn request_permission(&self) -> Result<bool, ReminderError> {
        Ok(false)
    }

    async fn cancel_all(&self) -> Result<(), ReminderError> {
        Ok(())
    }

    async fn schedule(&self, _notification: ScheduledNotification) -> Result<(), ReminderError> {
        Ok(())
    }
}

/// Mock scheduler for testing - collects scheduled notifications.
#[derive(Clone)]
pub struct MockNotificationScheduler {
    grant_permission: bool,
    permission_requests: Arc<Mutex<usize>>,
    scheduled: Arc<Mutex<Vec<ScheduledNotification>>>,
}

impl MockNotificationScheduler {
    pub fn new(grant_permission: bool) -> Self {
        Self {
            grant_permission,
            permission_requests: Arc::new(Mutex::new(0)),
            scheduled: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the notifications currently scheduled.
    pub fn scheduled(&self) -> Vec<ScheduledNotification> {
        self.scheduled.lock().unwrap().clone()
    }

    pub fn permission_requests(&self) -> usize {
        *self.permission_requests.lock().unwrap()
    }
}

impl Default for MockNotificationScheduler {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl NotificationScheduler for MockNotificationScheduler {
    fn is_available(&self) -> bool {
        true
    }

    async fn request_permission(&self) -> Result<bool, ReminderError> {
        *self.permission_requests.lock().unwrap() += 1;
        Ok(self.grant_permission)
    }

    async fn cancel_all(&self) -> Result<(), ReminderError> {
        self.scheduled.lock().unwrap().clear();
        Ok(())
    }

    async fn schedule(&self, notification: ScheduledNotification) -> Result<(), ReminderError> {
        self.scheduled.lock().unwrap().push(notification);
        Ok(())
    }
}
