use anyhow::{anyhow, Context};
use chrono_tz::Tz;

use tradejournal_core::constants::{DEFAULT_FORECAST_HORIZON, MAX_FORECAST_HORIZON};

const DEFAULT_DB_PATH: &str = "./data/tradejournal.db";
const DEFAULT_USER_ID: &str = "local-user";

/// How reminder notifications are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationMode {
    /// Scheduled notifications are written to the log.
    Log,
    /// No notification capability.
    Off,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub user_id: String,
    pub forecast_days: usize,
    pub timezone: Option<Tz>,
    pub notifications: NotificationMode,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let forecast_days = match value("TJ_FORECAST_DAYS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("TJ_FORECAST_DAYS must be a whole number, got '{}'", raw))?,
            None => DEFAULT_FORECAST_HORIZON,
        };
        if forecast_days > MAX_FORECAST_HORIZON {
            return Err(anyhow!(
                "TJ_FORECAST_DAYS must be at most {}, got {}",
                MAX_FORECAST_HORIZON,
                forecast_days
            ));
        }

        let timezone = value("TJ_TIMEZONE")
            .map(|raw| {
                raw.trim()
                    .parse::<Tz>()
                    .map_err(|e| anyhow!("TJ_TIMEZONE '{}' is not an IANA timezone: {}", raw, e))
            })
            .transpose()?;

        let notifications = match value("TJ_NOTIFICATIONS").as_deref().map(str::trim) {
            None => NotificationMode::Log,
            Some(mode) if mode.eq_ignore_ascii_case("log") => NotificationMode::Log,
            Some(mode) if mode.eq_ignore_ascii_case("off") => NotificationMode::Off,
            Some(other) => return Err(anyhow!("TJ_NOTIFICATIONS must be 'log' or 'off', got '{}'", other)),
        };

        Ok(Self {
            db_path: value("TJ_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            user_id: value("TJ_USER_ID").unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            forecast_days,
            timezone,
            notifications,
        })
    }
}
