//! Headline metrics for the summary cards.

use crate::core::{format, stats};
use crate::dataset::Dataset;

/// Aggregates shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub students: usize,
    pub mean_age: f64,
    pub mean_calories: f64,
    pub total_wins: u64,
}

impl SummaryMetrics {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let ages: Vec<f64> = dataset
            .students()
            .iter()
            .filter_map(|s| s.age.map(f64::from))
            .collect();

        Self {
            students: dataset.len(),
            mean_age: stats::mean(&ages),
            mean_calories: mean_calories(dataset),
            total_wins: dataset
                .students()
                .iter()
                .map(|s| u64::from(s.wins_or_zero()))
                .sum(),
        }
    }

    /// One decimal, e.g. `"25.5"`.
    pub fn age_display(&self) -> String {
        format::format_number(self.mean_age, 1)
    }

    /// Whole kilocalories, e.g. `"588"`.
    pub fn calories_display(&self) -> String {
        format::format_number(self.mean_calories, 0)
    }

    pub fn wins_display(&self) -> String {
        self.total_wins.to_string()
    }
}

/// Mean session calories; also the Poisson rate of the calorie explorer.
pub fn mean_calories(dataset: &Dataset) -> f64 {
    let calories: Vec<f64> = dataset.students().iter().filter_map(|s| s.calories).collect();
    stats::mean(&calories)
}
