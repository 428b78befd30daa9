//! Formatting helpers for presenting metrics.

const PLACEHOLDER: &str = "—";

pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        PLACEHOLDER.to_string()
    }
}

/// `0.7901` becomes `"79.01%"`.
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}%", value * 100.0)
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Axis tick label with just enough decimals for the tick spacing.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let rendered = format!("{value:.decimals$}");
    // Avoid "-0" next to the origin.
    if rendered.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        rendered.trim_start_matches('-').to_string()
    } else {
        rendered
    }
}
