use thiserror::Error;

use crate::dispatch::ActivityKind;

/// Errors raised while turning sensor packages into workouts
#[derive(Debug, Error, PartialEq)]
pub enum WorkoutError {
    /// Tag is not one of the known activity codes
    #[error("unknown activity type: {0:?}")]
    InvalidActivity(String),

    /// Argument list does not fit the activity's constructor
    #[error("{kind} expects {expected} arguments, got {got}")]
    ArityMismatch {
        kind: ActivityKind,
        expected: usize,
        got: usize,
    },

    /// Duration would be used as a divisor
    #[error("duration must be a positive number of hours, got {0}")]
    NonPositiveDuration(f64),

    /// Height would be used as a divisor
    #[error("height must be a positive number of centimeters, got {0}")]
    NonPositiveHeight(f64),

    /// Count field (steps, strokes, laps) is negative or fractional
    #[error("{field} must be a non-negative whole number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },

    /// Package text is not of the form TAG:ARG,ARG,...
    #[error("malformed package {0:?}, expected TAG:ARG,ARG,...")]
    InvalidPackage(String),
}

pub type Result<T> = std::result::Result<T, WorkoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WorkoutError::InvalidActivity("XYZ".into()).to_string(),
            "unknown activity type: \"XYZ\""
        );
        assert_eq!(
            WorkoutError::ArityMismatch {
                kind: ActivityKind::Swimming,
                expected: 5,
                got: 3
            }
            .to_string(),
            "Swimming expects 5 arguments, got 3"
        );
        assert_eq!(
            WorkoutError::InvalidCount {
                field: "action",
                value: 1.5
            }
            .to_string(),
            "action must be a non-negative whole number, got 1.5"
        );
    }
}
