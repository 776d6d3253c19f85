use std::fmt::Debug;

use crate::{
    error::{Result, WorkoutError},
    info::InfoMessage,
    units::*,
};

/// Sensor readings shared by every activity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    /// Steps or strokes reported by the sensor
    pub action: u32,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

impl Workout {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(WorkoutError::NonPositiveDuration(duration));
        }
        Ok(Self {
            action,
            duration,
            weight,
        })
    }
}

/// Calculations every activity provides
pub trait Training: Debug {
    fn workout(&self) -> &Workout;

    /// Name shown in the summary
    fn training_type(&self) -> &'static str;

    /// Meters covered per action
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km
    fn distance(&self) -> f64 {
        self.workout().action as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.workout().duration
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.training_type(),
            self.workout().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    workout: Workout,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            workout: Workout::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> f64 {
        let w = &self.workout;
        (CALORIES_RUN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_RUN_SPEED_SHIFT) * w.weight
            / M_IN_KM
            * w.duration
            * MIN_IN_HOURS
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    workout: Workout,
    /// Centimeters
    pub height: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self> {
        if !(height.is_finite() && height > 0.0) {
            return Err(WorkoutError::NonPositiveHeight(height));
        }
        Ok(Self {
            workout: Workout::new(action, duration, weight)?,
            height,
        })
    }
}

impl Training for SportsWalking {
    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn spent_calories(&self) -> f64 {
        let w = &self.workout;
        // speed^2 / height is floored, so the second term moves in whole steps
        let speed_height_ratio = (self.mean_speed().powi(2) / self.height).floor();
        (CALORIES_WLK_WEIGHT_MULTIPLIER * w.weight
            + speed_height_ratio * CALORIES_WLK_SPEED_HEIGHT_MULTIPLIER * w.weight)
            * w.duration
            * MIN_IN_HOURS
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    workout: Workout,
    /// Pool length in meters
    pub length_pool: f64,
    /// Laps swum
    pub count_pool: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self> {
        Ok(Self {
            workout: Workout::new(action, duration, weight)?,
            length_pool,
            count_pool,
        })
    }
}

impl Training for Swimming {
    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn len_step(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.workout.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_SWM_SPEED_SHIFT)
            * CALORIES_SWM_WEIGHT_MULTIPLIER
            * self.workout.weight
    }
}
