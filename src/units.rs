/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_HOURS: f64 = 60.0;

/// Distance covered by one step, in meters
pub const LEN_STEP: f64 = 0.65;
/// Distance covered by one swimming stroke, in meters
pub const LEN_STROKE: f64 = 1.38;

// Running
pub const CALORIES_RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const CALORIES_RUN_SPEED_SHIFT: f64 = 20.0;

// Sports walking
pub const CALORIES_WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const CALORIES_WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

// Swimming
pub const CALORIES_SWM_SPEED_SHIFT: f64 = 1.1;
pub const CALORIES_SWM_WEIGHT_MULTIPLIER: f64 = 2.0;
