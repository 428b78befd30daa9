//! Fixed dashboard configuration: file names, chart constants and slider domains.

/// Source dataset, read relative to the working directory.
pub const DATA_FILE: &str = "academia_boxe.csv";

pub const EXPORT_FILE_NAME: &str = "academia_boxe_export.csv";
pub const EXPORT_MIME: &str = "text/csv";

/// Fixed bin count for the weekly-frequency histogram.
pub const HISTOGRAM_BINS: usize = 7;

/// Number of calorie values covered by the Poisson chart, starting at the target.
pub const POISSON_WINDOW: u32 = 20;

/// Domain of an integer range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderSpec {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl SliderSpec {
    /// Clamp `value` into the domain and snap it down onto the step grid.
    pub fn clamp(&self, value: u32) -> u32 {
        let bounded = value.clamp(self.min, self.max);
        let step = self.step.max(1);
        self.min + (bounded - self.min) / step * step
    }
}

/// Simulated student count for the binomial explorer.
pub const TRIALS_SLIDER: SliderSpec = SliderSpec {
    min: 5,
    max: 50,
    step: 1,
    default: 10,
};

/// Minimum desired wins for the binomial explorer.
pub const MIN_WINS_SLIDER: SliderSpec = SliderSpec {
    min: 1,
    max: 50,
    step: 1,
    default: 5,
};

/// Calorie target for the Poisson explorer.
pub const CALORIE_TARGET_SLIDER: SliderSpec = SliderSpec {
    min: 100,
    max: 1200,
    step: 50,
    default: 600,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_bounds() {
        assert_eq!(TRIALS_SLIDER.clamp(0), 5);
        assert_eq!(TRIALS_SLIDER.clamp(99), 50);
        assert_eq!(MIN_WINS_SLIDER.clamp(7), 7);
    }

    #[test]
    fn clamp_snaps_to_step() {
        assert_eq!(CALORIE_TARGET_SLIDER.clamp(620), 600);
        assert_eq!(CALORIE_TARGET_SLIDER.clamp(1200), 1200);
        assert_eq!(CALORIE_TARGET_SLIDER.clamp(40), 100);
    }

    #[test]
    fn defaults_lie_inside_domains() {
        for spec in [TRIALS_SLIDER, MIN_WINS_SLIDER, CALORIE_TARGET_SLIDER] {
            assert_eq!(spec.clamp(spec.default), spec.default);
        }
    }
}
