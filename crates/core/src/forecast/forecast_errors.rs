use thiserror::Error;

/// Errors raised while generating a forecast.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// The rollup window is empty.
    #[error("Not enough data for prediction")]
    InsufficientData,
    /// The requested horizon exceeds the supported maximum.
    #[error("Forecast horizon of {requested} days exceeds the maximum of {max}")]
    HorizonTooLong { requested: usize, max: usize },
}
