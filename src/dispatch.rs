use std::str::FromStr;

use crate::{
    error::{Result, WorkoutError},
    training::{Running, SportsWalking, Swimming, Training},
};

/// Activities the tracker knows how to read
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum_macros::Display)]
pub enum ActivityKind {
    Swimming,
    Running,
    SportsWalking,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    /// Tag the sensor block sends for this activity
    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::Swimming => "SWM",
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
        }
    }

    /// Number of positional arguments the constructor takes
    pub fn arity(&self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }

    /// Build the training from positional sensor data
    pub fn build(&self, data: &[f64]) -> Result<Box<dyn Training>> {
        if data.len() != self.arity() {
            return Err(WorkoutError::ArityMismatch {
                kind: *self,
                expected: self.arity(),
                got: data.len(),
            });
        }

        let action = as_count("action", data[0])?;
        let (duration, weight) = (data[1], data[2]);

        let training: Box<dyn Training> = match self {
            ActivityKind::Running => Box::new(Running::new(action, duration, weight)?),
            ActivityKind::SportsWalking => {
                Box::new(SportsWalking::new(action, duration, weight, data[3])?)
            }
            ActivityKind::Swimming => Box::new(Swimming::new(
                action,
                duration,
                weight,
                data[3],
                as_count("count_pool", data[4])?,
            )?),
        };
        Ok(training)
    }
}

impl FromStr for ActivityKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| WorkoutError::InvalidActivity(s.to_string()))
    }
}

fn as_count(field: &'static str, value: f64) -> Result<u32> {
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(WorkoutError::InvalidCount { field, value });
    }
    Ok(value as u32)
}

/// Read a sensor package into the matching training
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let kind = workout_type.parse::<ActivityKind>()?;
    log::debug!("dispatching {} package {:?} to {}", workout_type, data, kind);
    kind.build(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_codes() {
        assert_eq!("SWM".parse::<ActivityKind>(), Ok(ActivityKind::Swimming));
        assert_eq!("RUN".parse::<ActivityKind>(), Ok(ActivityKind::Running));
        assert_eq!(
            "WLK".parse::<ActivityKind>(),
            Ok(ActivityKind::SportsWalking)
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_matches!(
            "run".parse::<ActivityKind>(),
            Err(WorkoutError::InvalidActivity(tag)) if tag == "run"
        );
    }

    #[test]
    fn test_code_roundtrip() {
        for kind in ActivityKind::ALL {
            assert_eq!(kind.code().parse::<ActivityKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_display_matches_training_type() {
        for kind in ActivityKind::ALL {
            let data: Vec<f64> = vec![1.0; kind.arity()];
            let training = kind.build(&data).unwrap();
            assert_eq!(kind.to_string(), training.training_type());
        }
    }

    #[test]
    fn test_unknown_tag_ignores_args() {
        assert_matches!(
            read_package("XYZ", &[]),
            Err(WorkoutError::InvalidActivity(_))
        );
        assert_matches!(
            read_package("XYZ", &[15000.0, 1.0, 75.0]),
            Err(WorkoutError::InvalidActivity(_))
        );
    }

    #[test]
    fn test_arity_checked() {
        assert_matches!(
            read_package("RUN", &[15000.0, 1.0]),
            Err(WorkoutError::ArityMismatch {
                kind: ActivityKind::Running,
                expected: 3,
                got: 2
            })
        );
        assert_matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]),
            Err(WorkoutError::ArityMismatch { expected: 4, got: 5, .. })
        );
        assert_matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0]),
            Err(WorkoutError::ArityMismatch { expected: 5, got: 4, .. })
        );
    }

    #[test]
    fn test_counts_must_be_whole() {
        assert_matches!(
            read_package("RUN", &[100.5, 1.0, 75.0]),
            Err(WorkoutError::InvalidCount { field: "action", .. })
        );
        assert_matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -2.0]),
            Err(WorkoutError::InvalidCount {
                field: "count_pool",
                ..
            })
        );
    }

    #[test]
    fn test_zero_divisors_surface() {
        assert_matches!(
            read_package("RUN", &[15000.0, 0.0, 75.0]),
            Err(WorkoutError::NonPositiveDuration(_))
        );
        assert_matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]),
            Err(WorkoutError::NonPositiveHeight(_))
        );
    }

    #[test]
    fn test_dispatch_builds_matching_variant() {
        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(swim.training_type(), "Swimming");
        assert!((swim.spent_calories() - 336.0).abs() < 1e-9);

        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walk.training_type(), "SportsWalking");
        assert!((walk.spent_calories() - 157.5).abs() < 1e-9);
    }
}
