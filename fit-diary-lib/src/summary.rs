//src/summary.rs
use crate::record::{format_date, Metric, Record};
use std::collections::HashMap;

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub record_id: u64,
    pub label: String,
    pub value: f64,
}

/// One point per record, in the order given (callers pass an ordered view).
///
/// A record is labelled by its date when no other record in the sequence
/// shares that label, otherwise by its 1-based position.
#[must_use]
pub fn chart_series(records: &[Record], metric: Metric, date_format: &str) -> Vec<ChartPoint> {
    let dates: Vec<Option<String>> = records
        .iter()
        .map(|r| r.date.map(|d| format_date(d, date_format)))
        .collect();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for date in dates.iter().flatten() {
        *seen.entry(date.as_str()).or_default() += 1;
    }

    records
        .iter()
        .zip(&dates)
        .enumerate()
        .map(|(i, (r, date))| ChartPoint {
            record_id: r.id,
            label: match date {
                Some(d) if seen.get(d.as_str()) == Some(&1) => d.clone(),
                _ => format!("#{}", i + 1),
            },
            value: r.fields.value(metric),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricSummary {
    pub total: f64,
    pub average: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    pub water: MetricSummary,
    pub exercise: MetricSummary,
    pub calories: MetricSummary,
}

impl Summary {
    #[must_use]
    pub fn from_records(records: &[Record]) -> Self {
        Self {
            count: records.len(),
            water: summarize(records, Metric::Water),
            exercise: summarize(records, Metric::Exercise),
            calories: summarize(records, Metric::Calories),
        }
    }

    #[must_use]
    pub const fn metric(&self, metric: Metric) -> &MetricSummary {
        match metric {
            Metric::Water => &self.water,
            Metric::Exercise => &self.exercise,
            Metric::Calories => &self.calories,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn summarize(records: &[Record], metric: Metric) -> MetricSummary {
    if records.is_empty() {
        return MetricSummary::default();
    }
    let values = records.iter().map(|r| r.fields.value(metric));
    let total: f64 = values.clone().sum();
    let max = values.fold(f64::MIN, f64::max);
    MetricSummary {
        total,
        average: Some(total / records.len() as f64),
        max: Some(max),
    }
}
