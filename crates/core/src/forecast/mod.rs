//! Forecast generation from recent daily performance.

mod forecast_errors;
mod forecast_generator;
mod forecast_model;

pub use forecast_errors::ForecastError;
pub use forecast_generator::{
    confidence_for, factors_for, generate_forecast, generate_forecast_from, summarize_window,
};
pub use forecast_model::*;
