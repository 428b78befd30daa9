//! Equal-width histogram of weekly training frequency.

use super::bars::{Bar, BarChart};
use super::palette;
use crate::core::config::HISTOGRAM_BINS;
use crate::dataset::Dataset;

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending edges; the last bin is closed on the right.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

        let lowest = finite.iter().copied().reduce(f64::min);
        let highest = finite.iter().copied().reduce(f64::max);
        let (lo, hi) = match lowest.zip(highest) {
            None => (0.0, 1.0),
            Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
            Some(range) => range,
        };

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for value in finite {
            let index = (((value - lo) / width).floor() as usize).min(bins - 1);
            counts[index] += 1;
        }

        Self { edges, counts }
    }

    /// Weekly sessions split into the fixed number of bins.
    pub fn weekly_frequency(dataset: &Dataset) -> Self {
        let values: Vec<f64> = dataset
            .students()
            .iter()
            .filter_map(|student| student.weekly_sessions.map(f64::from))
            .collect();
        Self::from_values(&values, HISTOGRAM_BINS)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn to_chart(&self) -> BarChart {
        BarChart::contiguous(
            self.counts
                .iter()
                .zip(self.edges.windows(2))
                .map(|(count, edge)| {
                    let label = format!("{}–{}", edge_label(edge[0]), edge_label(edge[1]));
                    Bar::new(label, *count as f64, palette::GREEN)
                })
                .collect(),
        )
    }
}

fn edge_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::sample;

    #[test]
    fn seven_bins_over_the_observed_range() {
        let histogram = Histogram::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 7);
        assert_eq!(histogram.counts.len(), 7);
        assert_eq!(histogram.edges.len(), 8);
        assert_eq!(histogram.edges[0], 1.0);
        assert_eq!(histogram.edges[7], 8.0);
        assert_eq!(histogram.counts, vec![1, 1, 1, 1, 1, 1, 2]);
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let histogram = Histogram::from_values(&[0.0, 7.0], 7);
        assert_eq!(histogram.counts[0], 1);
        assert_eq!(histogram.counts[6], 1);
    }

    #[test]
    fn constant_values_get_a_unit_range() {
        let histogram = Histogram::from_values(&[3.0, 3.0, 3.0], 7);
        assert_eq!(histogram.edges[0], 2.5);
        assert!((histogram.edges[7] - 3.5).abs() < 1e-12);
        assert_eq!(histogram.total(), 3);
        assert_eq!(histogram.counts[3], 3);
    }

    #[test]
    fn empty_input_keeps_the_bin_count() {
        let histogram = Histogram::from_values(&[], 7);
        assert_eq!(histogram.counts, vec![0; 7]);
    }

    #[test]
    fn weekly_frequency_counts_every_student() {
        let dataset = sample();
        let histogram = Histogram::weekly_frequency(&dataset);
        assert_eq!(histogram.counts.len(), HISTOGRAM_BINS);
        assert_eq!(histogram.total(), dataset.len());
        let chart = histogram.to_chart();
        assert_eq!(chart.len(), HISTOGRAM_BINS);
        assert!(chart.contiguous);
        assert_eq!(chart.bars[0].label, "1–1.6");
    }
}
