/// Decimal precision for display and rounded forecast values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of most recent daily rollups a forecast looks at
pub const FORECAST_WINDOW_DAYS: usize = 14;

/// Default forecast horizon in days
pub const DEFAULT_FORECAST_HORIZON: usize = 7;

/// Longest forecast horizon accepted, in days
pub const MAX_FORECAST_HORIZON: usize = 366;

/// Key format for monthly rollups
pub const MONTH_KEY_FORMAT: &str = "%Y-%m";
