//! Request/response handler: widget state in, every displayed value out.

use dioxus::logger::tracing::debug;

use crate::charts::{level_chart, BarChart, CaloriesByLevel, Histogram, WinsVsLosses};
use crate::core::config::{CALORIE_TARGET_SLIDER, MIN_WINS_SLIDER, TRIALS_SLIDER};
use crate::dataset::Dataset;
use crate::probability::{
    CalorieExplorer, CalorieOutcome, ExplorerError, WinExplorer, WinOutcome,
};
use crate::summary::SummaryMetrics;

/// Current slider values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetState {
    /// Simulated students `n`.
    pub trials: u32,
    /// Minimum desired wins `k`.
    pub min_wins: u32,
    pub calorie_target: u32,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            trials: TRIALS_SLIDER.default,
            min_wins: MIN_WINS_SLIDER.default,
            calorie_target: CALORIE_TARGET_SLIDER.default,
        }
    }
}

impl WidgetState {
    /// Each field forced into its slider domain. `k > n` is left alone; the
    /// binomial explorer reports it.
    pub fn clamped(self) -> Self {
        Self {
            trials: TRIALS_SLIDER.clamp(self.trials),
            min_wins: MIN_WINS_SLIDER.clamp(self.min_wins),
            calorie_target: CALORIE_TARGET_SLIDER.clamp(self.calorie_target),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub state: WidgetState,
    pub summary: SummaryMetrics,
    pub levels: BarChart,
    pub frequency: Histogram,
    pub calories: CaloriesByLevel,
    pub scatter: WinsVsLosses,
    pub win_probability: Result<WinOutcome, ExplorerError>,
    pub calorie_distribution: Result<CalorieOutcome, ExplorerError>,
}

impl DashboardModel {
    pub fn respond(dataset: &Dataset, state: &WidgetState) -> Self {
        let state = state.clamped();
        debug!(?state, rows = dataset.len(), "deriving dashboard");

        let win_probability = WinExplorer::from_dataset(dataset)
            .and_then(|explorer| explorer.evaluate(state.trials, state.min_wins));
        let calorie_distribution = CalorieExplorer::from_dataset(dataset)
            .and_then(|explorer| explorer.evaluate(state.calorie_target));

        Self {
            state,
            summary: SummaryMetrics::from_dataset(dataset),
            levels: level_chart(dataset),
            frequency: Histogram::weekly_frequency(dataset),
            calories: CaloriesByLevel::from_dataset(dataset),
            scatter: WinsVsLosses::from_dataset(dataset),
            win_probability,
            calorie_distribution,
        }
    }
}
