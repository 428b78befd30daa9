//! Linear scales and "nice" axis ranges.

/// Maps a data interval onto a pixel interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}

/// Step of 1, 2 or 5 times a power of ten giving roughly `target_ticks` intervals.
pub fn nice_step(span: f64, target_ticks: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let raw = span / target_ticks.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Axis bounds snapped outward to whole steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Axis {
    pub fn nice(min: f64, max: f64, target_ticks: usize) -> Self {
        let (min, max) = if !min.is_finite() || !max.is_finite() {
            (0.0, 1.0)
        } else if max > min {
            (min, max)
        } else if min == 0.0 {
            (0.0, 1.0)
        } else {
            (min - 1.0, max + 1.0)
        };

        let step = nice_step(max - min, target_ticks);
        Self {
            min: (min / step).floor() * step,
            max: (max / step).ceil() * step,
            step,
        }
    }

    /// Axis starting at zero, for counts and probabilities.
    pub fn from_zero(max: f64, target_ticks: usize) -> Self {
        Self::nice(0.0, max.max(0.0), target_ticks)
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }

    pub fn scale(&self, range: (f64, f64)) -> LinearScale {
        LinearScale::new((self.min, self.max), range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_endpoints() {
        let scale = LinearScale::new((0.0, 10.0), (250.0, 50.0));
        assert_eq!(scale.map(0.0), 250.0);
        assert_eq!(scale.map(10.0), 50.0);
        assert_eq!(scale.map(5.0), 150.0);
    }

    #[test]
    fn degenerate_domain_maps_to_middle() {
        let scale = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert_eq!(scale.map(3.0), 50.0);
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(87.0, 5), 20.0);
        assert_eq!(nice_step(10.0, 5), 2.0);
        assert_eq!(nice_step(0.0, 5), 1.0);
    }

    #[test]
    fn axis_from_zero_covers_max() {
        let axis = Axis::from_zero(87.0, 5);
        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.max, 100.0);
        assert_eq!(axis.ticks().len(), 6);
    }

    #[test]
    fn empty_axis_falls_back_to_unit_range() {
        let axis = Axis::from_zero(0.0, 5);
        assert_eq!(axis.min, 0.0);
        assert!(axis.max >= 1.0);
    }
}
