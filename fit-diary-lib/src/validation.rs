//src/validation.rs
use crate::record::{format_number, Record, RecordFields};
use std::fmt;
use thiserror::Error;

/// Which form input a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Water,
    Exercise,
    Calories,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Water => write!(f, "water"),
            Self::Exercise => write!(f, "exercise"),
            Self::Calories => write!(f, "calories"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Please enter valid numeric values ({0} is not a number).")]
    InvalidNumber(FormField),
    #[error("Values must be greater than zero ({0} is not).")]
    NonPositiveValue(FormField),
}

impl Error {
    #[must_use]
    pub const fn field(&self) -> FormField {
        match self {
            Self::InvalidNumber(field) | Self::NonPositiveValue(field) => *field,
        }
    }
}

/// Parses one form input as a real number.
///
/// Surrounding whitespace is ignored and a single decimal comma is read as a
/// decimal point. Empty text, `NaN` and infinities are rejected.
///
/// The whole input must be a number: no numeric prefix is salvaged, so
/// `"10abc"` is rejected rather than read as 10.
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The raw text of the three form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub water: String,
    pub exercise: String,
    pub calories: String,
}

impl RecordForm {
    #[must_use]
    pub fn new(water: &str, exercise: &str, calories: &str) -> Self {
        Self {
            water: water.to_string(),
            exercise: exercise.to_string(),
            calories: calories.to_string(),
        }
    }

    /// Form pre-filled with a record's current values.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            water: format_number(record.water_liters()),
            exercise: format_number(record.exercise_minutes()),
            calories: format_number(record.calories()),
        }
    }

    pub fn clear(&mut self) {
        self.water.clear();
        self.exercise.clear();
        self.calories.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.water.is_empty() && self.exercise.is_empty() && self.calories.is_empty()
    }

    pub fn input_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Water => &mut self.water,
            FormField::Exercise => &mut self.exercise,
            FormField::Calories => &mut self.calories,
        }
    }

    /// Converts the inputs into a payload the store accepts.
    ///
    /// Every input is parsed before any sign is checked, so a form with both
    /// garbage and a negative value reports the garbage.
    /// # Errors
    /// - `Error::InvalidNumber` naming the first input that is not a number.
    /// - `Error::NonPositiveValue` naming the first input that is <= 0.
    pub fn validate(&self) -> Result<RecordFields, Error> {
        let parsed = [
            (FormField::Water, parse_number(&self.water)),
            (FormField::Exercise, parse_number(&self.exercise)),
            (FormField::Calories, parse_number(&self.calories)),
        ];

        let mut values = [0.0_f64; 3];
        for (slot, (field, value)) in values.iter_mut().zip(parsed) {
            *slot = value.ok_or(Error::InvalidNumber(field))?;
        }

        for (field, value) in [FormField::Water, FormField::Exercise, FormField::Calories]
            .into_iter()
            .zip(values)
        {
            if value <= 0.0 {
                return Err(Error::NonPositiveValue(field));
            }
        }

        Ok(RecordFields::new(values[0], values[1], values[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_number;

    #[test]
    fn parse_number_accepts_decimal_comma_and_whitespace() {
        assert_eq!(parse_number(" 1,5 "), Some(1.5));
        assert_eq!(parse_number("2"), Some(2.0));
        assert_eq!(parse_number("-1"), Some(-1.0));
    }

    #[test]
    fn parse_number_rejects_garbage() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("1,000.5"), None);
    }
}
