use super::*;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockReminderRepository {
    reminders: Mutex<Vec<Reminder>>,
}

impl MockReminderRepository {
    fn new(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: Mutex::new(reminders),
        }
    }
}

#[async_trait]
impl ReminderRepositoryTrait for MockReminderRepository {
    fn load_reminders(&self) -> Result<Vec<Reminder>> {
        Ok(self.reminders.lock().unwrap().clone())
    }

    async fn insert(&self, reminder: Reminder) -> Result<Reminder> {
        self.reminders.lock().unwrap().push(reminder.clone());
        Ok(reminder)
    }

    async fn update(&self, reminder: Reminder) -> Result<Reminder> {
        let mut reminders = self.reminders.lock().unwrap();
        let slot = reminders
            .iter_mut()
            .find(|r| r.id == reminder.id)
            .ok_or_else(|| Error::Repository(format!("Reminder {} not found", reminder.id)))?;
        *slot = reminder.clone();
        Ok(reminder)
    }

    async fn delete(&self, reminder_id: &str) -> Result<usize> {
        let mut reminders = self.reminders.lock().unwrap();
        let before = reminders.len();
        reminders.retain(|r| r.id != reminder_id);
        Ok(before - reminders.len())
    }
}

fn service_with(
    reminders: Vec<Reminder>,
    scheduler: MockNotificationScheduler,
) -> (ReminderService, Arc<MockReminderRepository>) {
    let repository = Arc::new(MockReminderRepository::new(reminders));
    let service = ReminderService::new(repository.clone(), Arc::new(scheduler));
    (service, repository)
}

fn new_reminder(days: &[&str]) -> NewReminder {
    NewReminder {
        title: "Review journal".to_string(),
        message: "Write down today's lessons".to_string(),
        time: "18:45".to_string(),
        days: days.iter().map(|d| d.to_string()).collect(),
        enabled: true,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_schedule_defaults_one_trigger_per_weekday() {
    let scheduler = MockNotificationScheduler::new(true);
    let (service, _) = service_with(default_reminders(), scheduler.clone());

    let scheduled = service.schedule_reminders().await.unwrap();

    assert_eq!(scheduled, 15);
    assert_eq!(scheduler.scheduled().len(), 15);
    assert_eq!(scheduler.permission_requests(), 1);

    // Permission is remembered once granted.
    service.schedule_reminders().await.unwrap();
    assert_eq!(scheduler.permission_requests(), 1);
    assert_eq!(scheduler.scheduled().len(), 15);
}

#[tokio::test]
async fn test_disabled_reminders_are_not_scheduled() {
    let mut reminders = default_reminders();
    reminders[0].enabled = false;
    let scheduler = MockNotificationScheduler::new(true);
    let (service, _) = service_with(reminders, scheduler.clone());

    assert_eq!(service.schedule_reminders().await.unwrap(), 10);
    assert!(scheduler
        .scheduled()
        .iter()
        .all(|n| n.title != "New York Session"));
}

#[tokio::test]
async fn test_denied_permission_is_reported() {
    let scheduler = MockNotificationScheduler::new(false);
    let (service, _) = service_with(default_reminders(), scheduler.clone());

    let result = service.schedule_reminders().await;

    assert!(matches!(
        result,
        Err(Error::Reminder(ReminderError::PermissionDenied))
    ));
    assert!(scheduler.scheduled().is_empty());
}

#[tokio::test]
async fn test_unavailable_platform_schedules_nothing() {
    let repository = Arc::new(MockReminderRepository::new(default_reminders()));
    let service = ReminderService::new(repository, Arc::new(NoOpNotificationScheduler));

    assert_eq!(service.schedule_reminders().await.unwrap(), 0);
}

#[tokio::test]
async fn test_add_reminder_assigns_id_and_reschedules() {
    let scheduler = MockNotificationScheduler::new(true);
    let (service, repository) = service_with(Vec::new(), scheduler.clone());

    let reminder = service
        .add_reminder(new_reminder(&["Saturday", "Sunday"]))
        .await
        .unwrap();

    assert!(!reminder.id.is_empty());
    assert_eq!(repository.load_reminders().unwrap().len(), 1);
    let triggers: Vec<u8> = scheduler
        .scheduled()
        .iter()
        .map(|n| n.trigger.weekday)
        .collect();
    assert_eq!(triggers, vec![7, 1]);
}

#[tokio::test]
async fn test_add_reminder_survives_denied_permission() {
    let scheduler = MockNotificationScheduler::new(false);
    let (service, repository) = service_with(Vec::new(), scheduler);

    let reminder = service.add_reminder(new_reminder(&["Monday"])).await;

    assert!(reminder.is_ok());
    assert_eq!(repository.load_reminders().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_reminder_rejects_empty_days() {
    let (service, repository) = service_with(Vec::new(), MockNotificationScheduler::default());

    let result = service.add_reminder(new_reminder(&[])).await;

    assert!(matches!(
        result,
        Err(Error::Reminder(ReminderError::InvalidSchedule(_)))
    ));
    assert!(repository.load_reminders().unwrap().is_empty());
}

#[tokio::test]
async fn test_toggle_flips_enabled_and_unschedules() {
    let scheduler = MockNotificationScheduler::new(true);
    let (service, _) = service_with(default_reminders(), scheduler.clone());

    let toggled = service.toggle_reminder("2").await.unwrap();

    assert!(!toggled.enabled);
    assert_eq!(scheduler.scheduled().len(), 10);

    let toggled = service.toggle_reminder("2").await.unwrap();
    assert!(toggled.enabled);
    assert_eq!(scheduler.scheduled().len(), 15);
}

#[tokio::test]
async fn test_toggle_unknown_reminder_is_not_found() {
    let (service, _) = service_with(default_reminders(), MockNotificationScheduler::default());

    let result = service.toggle_reminder("missing").await;

    assert!(matches!(
        result,
        Err(Error::Reminder(ReminderError::NotFound(id))) if id == "missing"
    ));
}

#[tokio::test]
async fn test_update_and_delete_reminder() {
    let scheduler = MockNotificationScheduler::new(true);
    let (service, repository) = service_with(default_reminders(), scheduler.clone());

    let updated = service
        .update_reminder(
            "3",
            ReminderUpdate {
                time: Some("21:15".to_string()),
                days: Some(vec!["Friday".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.time, "21:15");
    assert_eq!(updated.title, "Daily Trading Record");
    assert_eq!(scheduler.scheduled().len(), 11);

    let invalid = service
        .update_reminder(
            "3",
            ReminderUpdate {
                time: Some("noon".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(invalid.is_err());

    assert_eq!(service.delete_reminder("1").await.unwrap(), 1);
    assert_eq!(repository.load_reminders().unwrap().len(), 2);
    assert_eq!(scheduler.scheduled().len(), 6);
}
