//! Naive short-horizon profit/loss forecast from recent daily rollups.
//!
//! The forecast is the window's mean net plus a uniform random offset scaled by
//! half the window's volatility. Confidence and factors are computed once per
//! call and shared by every day of the horizon, and the factor check on the
//! random offset uses the offset drawn for the last day.
//!
//! Confidence divides volatility by `max(|avg net|, 1)`, so an average net
//! between -1 and 1 (exclusive, non-zero) is scaled by 1 rather than by its
//! own magnitude.

use chrono::{Local, NaiveDate};
use log::debug;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use super::forecast_errors::ForecastError;
use super::forecast_model::{
    Forecast, ForecastWindow, FACTOR_HIGH_VOLATILITY, FACTOR_NEGATIVE_TREND,
    FACTOR_POSITIVE_TREND, FACTOR_STABLE, FACTOR_UNPREDICTABLE, MAX_CONFIDENCE, MIN_CONFIDENCE,
};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, FORECAST_WINDOW_DAYS, MAX_FORECAST_HORIZON};
use crate::performance::DailyRollup;
use crate::utils::time_utils::add_days;

/// Forecasts the `days` dates after today on the device clock.
///
/// `daily_rollups` must be ordered most recent first, as produced by
/// [`compute_daily_rollups`](crate::performance::compute_daily_rollups).
pub fn generate_forecast(
    daily_rollups: &[DailyRollup],
    days: usize,
) -> Result<Vec<Forecast>, ForecastError> {
    let today = Local::now().date_naive();
    generate_forecast_from(daily_rollups, days, today, &mut rand::thread_rng())
}

/// Forecasts the `days` dates after `today`, drawing offsets from `rng`.
///
/// Horizons longer than [`MAX_FORECAST_HORIZON`] are rejected.
pub fn generate_forecast_from<R: Rng + ?Sized>(
    daily_rollups: &[DailyRollup],
    days: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<Forecast>, ForecastError> {
    if days > MAX_FORECAST_HORIZON {
        return Err(ForecastError::HorizonTooLong {
            requested: days,
            max: MAX_FORECAST_HORIZON,
        });
    }
    let window = summarize_window(daily_rollups)?;
    let spread = window.volatility * Decimal::new(5, 1);

    let confidence = confidence_for(&window);

    let mut forecasts = Vec::with_capacity(days);
    let mut last_offset = Decimal::ZERO;
    for day in 1..=days {
        let Some(date) = add_days(today, day as u64) else {
            break;
        };

        let draw = Decimal::from_f64(rng.gen_range(-1.0..=1.0)).unwrap_or_default();
        last_offset = draw * spread;

        forecasts.push(Forecast {
            date,
            predicted_profit: round_display(window.average_net + last_offset),
            confidence,
            factors: Vec::new(),
        });
    }

    let factors = factors_for(&window, last_offset);
    for forecast in &mut forecasts {
        forecast.factors = factors.clone();
    }

    debug!(
        "Generated {} forecasts from {} days (avg net {}, volatility {})",
        forecasts.len(),
        window.days,
        window.average_net,
        window.volatility
    );
    Ok(forecasts)
}

/// Mean and population standard deviation of the most recent rollups.
pub fn summarize_window(daily_rollups: &[DailyRollup]) -> Result<ForecastWindow, ForecastError> {
    let recent = &daily_rollups[..daily_rollups.len().min(FORECAST_WINDOW_DAYS)];
    let latest = recent.first().ok_or(ForecastError::InsufficientData)?;

    let count = Decimal::from(recent.len());
    let average_net = recent.iter().map(|r| r.net).sum::<Decimal>() / count;
    let variance = recent
        .iter()
        .map(|r| {
            let deviation = r.net - average_net;
            deviation * deviation
        })
        .sum::<Decimal>()
        / count;

    Ok(ForecastWindow {
        days: recent.len(),
        average_net,
        volatility: variance.sqrt().unwrap_or_default(),
        latest_net: latest.net,
    })
}

/// Confidence falls as volatility grows relative to the average net.
pub fn confidence_for(window: &ForecastWindow) -> Decimal {
    let scale = window.average_net.abs().max(Decimal::ONE);
    let raw = Decimal::ONE - window.volatility / scale;
    round_display(raw.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE))
}

/// Human-readable drivers of a forecast.
pub fn factors_for(window: &ForecastWindow, offset: Decimal) -> Vec<String> {
    let average_magnitude = window.average_net.abs();
    let mut factors = Vec::new();

    if window.latest_net > Decimal::ZERO {
        factors.push(FACTOR_POSITIVE_TREND.to_string());
    }
    if window.latest_net < Decimal::ZERO {
        factors.push(FACTOR_NEGATIVE_TREND.to_string());
    }
    if window.volatility > average_magnitude {
        factors.push(FACTOR_HIGH_VOLATILITY.to_string());
    }
    if offset.abs() > average_magnitude * Decimal::new(5, 1) {
        factors.push(FACTOR_UNPREDICTABLE.to_string());
    }
    if factors.is_empty() {
        factors.push(FACTOR_STABLE.to_string());
    }
    factors
}

fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
