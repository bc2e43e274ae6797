use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReminderError {
    #[error("Reminder not found: {0}")]
    NotFound(String),

    #[error("Permission to receive notifications was denied")]
    PermissionDenied,

    #[error("Invalid reminder: {0}")]
    InvalidSchedule(String),

    #[error("Notification scheduling failed: {0}")]
    Scheduler(String),
}
