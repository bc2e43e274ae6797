use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const FACTOR_POSITIVE_TREND: &str = "Recent positive trend";
pub const FACTOR_NEGATIVE_TREND: &str = "Recent negative trend";
pub const FACTOR_HIGH_VOLATILITY: &str = "High market volatility";
pub const FACTOR_UNPREDICTABLE: &str = "Unpredictable market conditions";
pub const FACTOR_STABLE: &str = "Stable market conditions";

/// Lower bound of a forecast's confidence.
pub const MIN_CONFIDENCE: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

/// Upper bound of a forecast's confidence.
pub const MAX_CONFIDENCE: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// Predicted net result for one future day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub date: NaiveDate,
    /// Rounded to two decimals; may be negative.
    pub predicted_profit: Decimal,
    /// Within [`MIN_CONFIDENCE`, `MAX_CONFIDENCE`], rounded to two decimals.
    pub confidence: Decimal,
    pub factors: Vec<String>,
}

/// Statistics of the rollup window a forecast was drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastWindow {
    pub days: usize,
    pub average_net: Decimal,
    /// Population standard deviation of the window's net values.
    pub volatility: Decimal,
    pub latest_net: Decimal,
}
