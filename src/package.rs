use std::str::FromStr;

use crate::{
    error::{Result, WorkoutError},
    training::Training,
};

/// One reading from the sensor block: activity tag plus positional data
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    pub fn read(&self) -> Result<Box<dyn Training>> {
        crate::dispatch::read_package(&self.workout_type, &self.data)
    }
}

/// Parses `TAG:ARG,ARG,...`, e.g. `RUN:15000,1,75`
impl FromStr for Package {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || WorkoutError::InvalidPackage(s.to_string());

        let (tag, args) = s.split_once(':').ok_or_else(malformed)?;
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(malformed());
        }

        let data = if args.trim().is_empty() {
            Vec::new()
        } else {
            args.split(',')
                .map(|a| a.trim().parse::<f64>().map_err(|_| malformed()))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Self::new(tag, data))
    }
}

/// Readings processed when none are given on the command line
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
