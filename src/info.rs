use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language used for the summary labels
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Russian,
}

/// Summary of a finished workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the one-line summary; all numbers carry three decimals
    pub fn get_message(&self, locale: Locale) -> String {
        match locale {
            Locale::English => format!(
                "Activity type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            Locale::Russian => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message(Locale::English))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swim_message() -> InfoMessage {
        InfoMessage::new("Swimming", 1.0, 0.9936, 1.0, 336.0)
    }

    #[test]
    fn test_english_message() {
        assert_eq!(
            swim_message().get_message(Locale::English),
            "Activity type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg. speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_russian_message() {
        assert_eq!(
            swim_message().get_message(Locale::Russian),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_display_uses_english() {
        let msg = swim_message();
        assert_eq!(msg.to_string(), msg.get_message(Locale::English));
    }

    #[test]
    fn test_integral_values_keep_three_decimals() {
        let msg = InfoMessage::new("Running", 2.0, 10.0, 5.0, 0.0);
        let text = msg.get_message(Locale::English);
        assert!(text.contains("Duration: 2.000 h."));
        assert!(text.contains("Distance: 10.000 km"));
        assert!(text.contains("Calories burned: 0.000."));
    }

    #[test]
    fn test_negative_calories_are_not_clamped() {
        let msg = InfoMessage::new("Running", 1.0, 0.1, 0.1, -88.65);
        assert!(msg.to_string().ends_with("Calories burned: -88.650."));
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(swim_message()).unwrap();
        assert_eq!(json["training_type"], "Swimming");
        assert_eq!(json["calories"], 336.0);
    }

    #[test]
    fn test_locale_display() {
        assert_eq!(Locale::English.to_string(), "English");
        assert_eq!(Locale::Russian.to_string(), "Russian");
        assert_eq!(Locale::default(), Locale::English);
    }
}
