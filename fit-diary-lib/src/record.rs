//src/record.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// The three measurements of a logged day, already validated as positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordFields {
    pub water_liters: f64,
    pub exercise_minutes: f64,
    pub calories: f64,
}

impl RecordFields {
    #[must_use]
    pub const fn new(water_liters: f64, exercise_minutes: f64, calories: f64) -> Self {
        Self {
            water_liters,
            exercise_minutes,
            calories,
        }
    }

    #[must_use]
    pub const fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Water => self.water_liters,
            Metric::Exercise => self.exercise_minutes,
            Metric::Calories => self.calories,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u64,
    pub fields: RecordFields,
    /// Day the record was created on. Seed records have none.
    pub date: Option<NaiveDate>,
}

impl Record {
    #[must_use]
    pub const fn water_liters(&self) -> f64 {
        self.fields.water_liters
    }

    #[must_use]
    pub const fn exercise_minutes(&self) -> f64 {
        self.fields.exercise_minutes
    }

    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.fields.calories
    }

    /// Formats the creation date with a chrono format string, "-" when absent.
    #[must_use]
    pub fn date_display(&self, date_format: &str) -> String {
        self.date
            .map_or_else(|| "-".to_string(), |d| format_date(d, date_format))
    }
}

/// The records every session starts with (unless disabled in config).
#[must_use]
pub fn sample_records() -> Vec<Record> {
    vec![
        Record {
            id: 1,
            fields: RecordFields::new(2.0, 30.0, 500.0),
            date: None,
        },
        Record {
            id: 2,
            fields: RecordFields::new(1.5, 45.0, 600.0),
            date: None,
        },
        Record {
            id: 3,
            fields: RecordFields::new(3.0, 25.0, 450.0),
            date: None,
        },
    ]
}

// Measured quantities, used by the chart and the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Water,
    Exercise,
    Calories,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::Water, Self::Exercise, Self::Calories];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Exercise => "Exercise",
            Self::Calories => "Calories",
        }
    }

    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Water => "L",
            Self::Exercise => "min",
            Self::Calories => "kcal",
        }
    }

    /// Next metric in display order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Water => Self::Exercise,
            Self::Exercise => Self::Calories,
            Self::Calories => Self::Water,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}

/// Formats `date` with a chrono format string.
///
/// A format chrono cannot render for a bare date (unknown or time-of-day
/// specifiers) falls back to ISO `YYYY-MM-DD` instead of panicking.
#[must_use]
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        return date.format(ISO_DATE_FORMAT).to_string();
    }
    out
}

/// Renders a measurement the way the form shows it: no trailing ".0".
#[must_use]
pub fn format_number(value: f64) -> String {
    // f64's Display already drops the fractional part for whole numbers
    value.to_string()
}
