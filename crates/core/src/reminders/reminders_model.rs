//! Reminder domain models.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::ReminderError;

/// Weekday names in trigger order: index 0 is Sunday.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const TRADING_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// A recurring weekly reminder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Local wall-clock time as `HH:MM`.
    pub time: String,
    pub days: Vec<String>,
    pub enabled: bool,
}

/// Input model for creating a reminder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub title: String,
    pub message: String,
    pub time: String,
    pub days: Vec<String>,
    pub enabled: bool,
}

impl NewReminder {
    pub fn validate(&self) -> std::result::Result<(), ReminderError> {
        if self.title.trim().is_empty() {
            return Err(ReminderError::InvalidSchedule("Title is required".to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ReminderError::InvalidSchedule("Message is required".to_string()));
        }
        validate_schedule(&self.time, &self.days)
    }
}

/// Partial update of a reminder; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderUpdate {
    pub title: Option<String>,
    pub message: Option<String>,
    pub time: Option<String>,
    pub days: Option<Vec<String>>,
    pub enabled: Option<bool>,
}

impl Reminder {
    pub fn from_new(id: String, new_reminder: NewReminder) -> Self {
        Self {
            id,
            title: new_reminder.title,
            message: new_reminder.message,
            time: new_reminder.time,
            days: new_reminder.days,
            enabled: new_reminder.enabled,
        }
    }

    /// Applies `update` and returns the merged reminder after validation.
    pub fn merged(&self, update: ReminderUpdate) -> std::result::Result<Reminder, ReminderError> {
        let merged = Reminder {
            id: self.id.clone(),
            title: update.title.unwrap_or_else(|| self.title.clone()),
            message: update.message.unwrap_or_else(|| self.message.clone()),
            time: update.time.unwrap_or_else(|| self.time.clone()),
            days: update.days.unwrap_or_else(|| self.days.clone()),
            enabled: update.enabled.unwrap_or(self.enabled),
        };
        validate_schedule(&merged.time, &merged.days)?;
        Ok(merged)
    }
}

/// Weekly repeating trigger handed to the notification capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrigger {
    /// 1 = Sunday .. 7 = Saturday.
    pub weekday: u8,
    pub hour: u32,
    pub minute: u32,
    pub repeats: bool,
}

/// One notification to schedule for a reminder on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledNotification {
    pub reminder_id: String,
    pub title: String,
    pub body: String,
    pub trigger: WeeklyTrigger,
}

/// Parses an `HH:MM` wall-clock time.
pub fn parse_reminder_time(time: &str) -> std::result::Result<NaiveTime, ReminderError> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| ReminderError::InvalidSchedule(format!("Invalid time '{}'", time)))
}

/// Trigger weekday for a day name, 1 = Sunday .. 7 = Saturday.
pub fn weekday_number(day: &str) -> Option<u8> {
    WEEKDAYS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(day.trim()))
        .map(|index| index as u8 + 1)
}

/// Expands a reminder into one weekly trigger per valid day.
///
/// Unknown day names are skipped.
pub fn notifications_for(
    reminder: &Reminder,
) -> std::result::Result<Vec<ScheduledNotification>, ReminderError> {
    let time = parse_reminder_time(&reminder.time)?;
    Ok(reminder
        .days
        .iter()
        .filter_map(|day| weekday_number(day))
        .map(|weekday| ScheduledNotification {
            reminder_id: reminder.id.clone(),
            title: reminder.title.clone(),
            body: reminder.message.clone(),
            trigger: WeeklyTrigger {
                weekday,
                hour: time.hour(),
                minute: time.minute(),
                repeats: true,
            },
        })
        .collect())
}

/// Reminders seeded for a fresh install.
pub fn default_reminders() -> Vec<Reminder> {
    let trading_days: Vec<String> = TRADING_DAYS.iter().map(|d| d.to_string()).collect();
    vec![
        Reminder {
            id: "1".to_string(),
            title: "New York Session".to_string(),
            message: "New York trading session is starting soon. Don't miss out!".to_string(),
            time: "13:30".to_string(),
            days: trading_days.clone(),
            enabled: true,
        },
        Reminder {
            id: "2".to_string(),
            title: "London Session".to_string(),
            message: "London trading session is starting soon. Get ready to trade!".to_string(),
            time: "08:00".to_string(),
            days: trading_days.clone(),
            enabled: true,
        },
        Reminder {
            id: "3".to_string(),
            title: "Daily Trading Record".to_string(),
            message: "You haven't recorded any trades today. Don't forget to log your activity!"
                .to_string(),
            time: "20:00".to_string(),
            days: trading_days,
            enabled: true,
        },
    ]
}

fn validate_schedule(time: &str, days: &[String]) -> std::result::Result<(), ReminderError> {
    parse_reminder_time(time)?;
    if days.is_empty() {
        return Err(ReminderError::InvalidSchedule(
            "Please select at least one day".to_string(),
        ));
    }
    if let Some(day) = days.iter().find(|d| weekday_number(d).is_none()) {
        return Err(ReminderError::InvalidSchedule(format!(
            "Unknown weekday '{}'",
            day
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(days: &[&str]) -> Reminder {
        Reminder {
            id: "r1".to_string(),
            title: "London Session".to_string(),
            message: "Get ready".to_string(),
            time: "08:05".to_string(),
            days: days.iter().map(|d| d.to_string()).collect(),
            enabled: true,
        }
    }

    #[test]
    fn test_weekday_numbers_start_at_sunday() {
        assert_eq!(weekday_number("Sunday"), Some(1));
        assert_eq!(weekday_number("monday"), Some(2));
        assert_eq!(weekday_number("Saturday"), Some(7));
        assert_eq!(weekday_number("Funday"), None);
    }

    #[test]
    fn test_notifications_skip_unknown_days() {
        let notifications = notifications_for(&reminder(&["Monday", "Someday", "Friday"])).unwrap();

        assert_eq!(notifications.len(), 2);
        assert_eq!(
            notifications[0].trigger,
            WeeklyTrigger {
                weekday: 2,
                hour: 8,
                minute: 5,
                repeats: true
            }
        );
        assert_eq!(notifications[1].trigger.weekday, 6);
    }

    #[test]
    fn test_invalid_time_is_rejected() {
        let mut bad = reminder(&["Monday"]);
        bad.time = "25:99".to_string();
        assert!(matches!(
            notifications_for(&bad),
            Err(ReminderError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn test_new_reminder_validation() {
        let valid = NewReminder {
            title: "Check journal".to_string(),
            message: "Log today's trades".to_string(),
            time: "09:00".to_string(),
            days: vec!["Monday".to_string()],
            enabled: true,
        };
        assert!(valid.validate().is_ok());

        let mut no_title = valid.clone();
        no_title.title = " ".to_string();
        assert!(no_title.validate().is_err());

        let mut no_days = valid.clone();
        no_days.days.clear();
        assert!(no_days.validate().is_err());

        let mut bad_day = valid;
        bad_day.days = vec!["Caturday".to_string()];
        assert!(bad_day.validate().is_err());
    }

    #[test]
    fn test_merged_keeps_untouched_fields() {
        let original = reminder(&["Monday"]);
        let merged = original
            .merged(ReminderUpdate {
                enabled: Some(false),
                ..Default::default()
            })
            .unwrap();

        assert!(!merged.enabled);
        assert_eq!(merged.title, original.title);
        assert_eq!(merged.days, original.days);
    }

    #[test]
    fn test_default_reminders_are_enabled_on_trading_days() {
        let defaults = default_reminders();
        assert_eq!(defaults.len(), 3);
        for reminder in &defaults {
            assert!(reminder.enabled);
            assert_eq!(notifications_for(reminder).unwrap().len(), 5);
        }
    }
}
