//! Poisson view of per-session calorie burn.

use statrs::distribution::{Discrete, Poisson};

use super::ExplorerError;
use crate::charts::{palette, Bar, BarChart};
use crate::core::config::POISSON_WINDOW;
use crate::dataset::Dataset;
use crate::summary;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieExplorer {
    lambda: f64,
}

impl CalorieExplorer {
    pub fn new(lambda: f64) -> Result<Self, ExplorerError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(ExplorerError::InvalidRate(lambda));
        }
        Ok(Self { lambda })
    }

    /// Rate parameter is the same mean shown on the summary card.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, ExplorerError> {
        Self::new(summary::mean_calories(dataset))
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// PMF over the window `[target, target + POISSON_WINDOW)`.
    pub fn evaluate(&self, target: u32) -> Result<CalorieOutcome, ExplorerError> {
        let distribution = Poisson::new(self.lambda)
            .map_err(|err| ExplorerError::Distribution(err.to_string()))?;
        let points = (0..POISSON_WINDOW)
            .map(|offset| {
                let calories = u64::from(target) + u64::from(offset);
                (calories, distribution.pmf(calories))
            })
            .collect();
        Ok(CalorieOutcome {
            target,
            lambda: self.lambda,
            points,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalorieOutcome {
    pub target: u32,
    pub lambda: f64,
    pub points: Vec<(u64, f64)>,
}

impl CalorieOutcome {
    pub fn chart(&self) -> BarChart {
        BarChart::new(
            self.points
                .iter()
                .map(|(calories, probability)| {
                    Bar::new(calories.to_string(), *probability, palette::PURPLE)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::sample;

    #[test]
    fn lambda_is_mean_calories() {
        let explorer = CalorieExplorer::from_dataset(&sample()).unwrap();
        assert!((explorer.lambda() - 587.625).abs() < 1e-9);
    }

    #[test]
    fn window_has_twenty_consecutive_points() {
        let outcome = CalorieExplorer::new(600.0).unwrap().evaluate(550).unwrap();
        assert_eq!(outcome.points.len(), 20);
        assert_eq!(outcome.points.first().map(|p| p.0), Some(550));
        assert_eq!(outcome.points.last().map(|p| p.0), Some(569));
        assert!(outcome.points.windows(2).all(|w| w[1].0 == w[0].0 + 1));
    }

    #[test]
    fn small_rate_matches_closed_form() {
        // P(X = 2) for lambda = 2 is 2 e^-2
        let outcome = CalorieExplorer::new(2.0).unwrap().evaluate(2).unwrap();
        let expected = 2.0 * (-2.0f64).exp();
        assert!((outcome.points[0].1 - expected).abs() < 1e-12);
    }

    #[test]
    fn bars_are_purple_and_labelled_by_calories() {
        let chart = CalorieExplorer::new(600.0).unwrap().evaluate(600).unwrap().chart();
        assert_eq!(chart.len(), 20);
        assert!(chart.bars.iter().all(|bar| bar.color == palette::PURPLE));
        assert_eq!(chart.bars[0].label, "600");
        assert_eq!(chart.bars[19].label, "619");
    }

    #[test]
    fn far_tail_is_tiny_but_valid() {
        let outcome = CalorieExplorer::new(587.625).unwrap().evaluate(1200).unwrap();
        assert!(outcome.points.iter().all(|(_, p)| (0.0..1e-6).contains(p)));
    }

    #[test]
    fn non_positive_rate_is_rejected() {
        assert_eq!(
            CalorieExplorer::new(0.0).unwrap_err(),
            ExplorerError::InvalidRate(0.0)
        );
        assert!(CalorieExplorer::new(f64::NAN).is_err());
        assert!(CalorieExplorer::from_dataset(&Dataset::default()).is_err());
    }
}
