//! Reminders module - recurring weekly reminders and their scheduling.

mod reminders_errors;
mod reminders_model;
mod reminders_service;
mod reminders_traits;
mod scheduler;

pub use reminders_errors::ReminderError;
pub use reminders_model::{
    default_reminders, notifications_for, parse_reminder_time, weekday_number, NewReminder,
    Reminder, ReminderUpdate, ScheduledNotification, WeeklyTrigger, TRADING_DAYS, WEEKDAYS,
};
pub use reminders_service::ReminderService;
pub use reminders_traits::{ReminderRepositoryTrait, ReminderServiceTrait};
pub use scheduler::{MockNotificationScheduler, NoOpNotificationScheduler, NotificationScheduler};

#[cfg(test)]
mod reminders_service_tests;
