//! Students per skill level.

use super::bars::{Bar, BarChart};
use super::palette;
use crate::dataset::Dataset;

#[derive(Debug, Clone, PartialEq)]
pub struct LevelCount {
    pub level: String,
    pub count: usize,
}

/// Counts per `Nivel`, in order of first appearance.
pub fn level_counts(dataset: &Dataset) -> Vec<LevelCount> {
    dataset
        .levels()
        .into_iter()
        .map(|level| {
            let count = dataset
                .students()
                .iter()
                .filter(|student| student.level == level)
                .count();
            LevelCount { level, count }
        })
        .collect()
}

pub fn level_chart(dataset: &Dataset) -> BarChart {
    let counts = level_counts(dataset);
    let colors = palette::coolwarm(counts.len());
    BarChart::new(
        counts
            .into_iter()
            .zip(colors)
            .map(|(entry, color)| Bar::new(entry.level, entry.count as f64, color))
            .collect(),
    )
}
