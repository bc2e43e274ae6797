//! Notification capability for the command-line host.
//!
//! There is no device notification centre here, so scheduled reminders are
//! written to the log instead.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

use tradejournal_core::reminders::{NotificationScheduler, ReminderError, ScheduledNotification};

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Default)]
pub struct LoggingNotificationScheduler {
    scheduled: AtomicUsize,
}

#[async_trait]
impl NotificationScheduler for LoggingNotificationScheduler {
    fn is_available(&self) -> bool {
        true
    }

    async fn request_permission(&self) -> Result<bool, ReminderError> {
        Ok(true)
    }

    async fn cancel_all(&self) -> Result<(), ReminderError> {
        let cancelled = self.scheduled.swap(0, Ordering::SeqCst);
        debug!("Cancelled {} scheduled notifications", cancelled);
        Ok(())
    }

    async fn schedule(&self, notification: ScheduledNotification) -> Result<(), ReminderError> {
        let trigger = notification.trigger;
        let day = WEEKDAY_NAMES
            .get(usize::from(trigger.weekday.saturating_sub(1)))
            .copied()
            .unwrap_or("?");
        info!(
            reminder_id = %notification.reminder_id,
            "Scheduled '{}' every {} at {:02}:{:02}",
            notification.title,
            day,
            trigger.hour,
            trigger.minute
        );
        self.scheduled.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
