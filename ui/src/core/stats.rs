//! Small descriptive-statistics helpers shared by the summary and chart models.

/// Arithmetic mean; `NaN` for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        f64::NAN
    } else {
        data.iter().sum::<f64>() / data.len() as f64
    }
}

/// Linear-interpolation percentile over already sorted data, `pct` in `[0, 1]`.
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    if sorted.len() == 1 {
        return sorted[0];
    }

    let clamped_pct = pct.clamp(0.0, 1.0);
    let rank = clamped_pct * (sorted.len() as f64 - 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = rank - lower as f64;
        sorted[lower] + (sorted[upper] - sorted[lower]) * weight
    }
}

/// Copy of `data` sorted ascending, non-finite values dropped.
pub fn sorted_finite(data: &[f64]) -> Vec<f64> {
    let mut values: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    values.sort_by(|a, b| a.total_cmp(b));
    values
}
