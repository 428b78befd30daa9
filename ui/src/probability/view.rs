use dioxus::prelude::*;

use super::{CalorieOutcome, ExplorerError, WinOutcome};
use crate::charts::{BarChartSvg, ChartCard};
use crate::components::RangeSlider;
use crate::core::config::{CALORIE_TARGET_SLIDER, MIN_WINS_SLIDER, TRIALS_SLIDER};
use crate::core::format::{format_number, format_percent};
use crate::t;

/// Localized text for a recoverable explorer failure.
pub fn explorer_message(err: &ExplorerError) -> String {
    match err {
        ExplorerError::TooManyWins { k, n } => {
            t!("error-too-many-wins", k = k.to_string(), n = n.to_string())
        }
        ExplorerError::UndefinedWinRate => t!("error-undefined-win-rate"),
        ExplorerError::InvalidRate(_) => t!("error-invalid-rate"),
        ExplorerError::Distribution(detail) => {
            t!("error-distribution", detail = detail.clone())
        }
    }
}

#[component]
fn ExplorerAlert(error: ExplorerError) -> Element {
    let message = explorer_message(&error);
    rsx! {
        p { class: "explorer__error", role: "alert", "⚠️ {message}" }
    }
}

#[component]
pub fn WinProbabilityPanel(
    trials: u32,
    min_wins: u32,
    outcome: Result<WinOutcome, ExplorerError>,
    on_trials: EventHandler<u32>,
    on_min_wins: EventHandler<u32>,
) -> Element {
    let body = match outcome {
        Ok(outcome) => rsx! {
            p { class: "explorer__result",
                {t!("binomial-result", k = outcome.k, n = outcome.n, probability = format_percent(outcome.at_least))}
            }
            p { class: "explorer__meta",
                {t!("binomial-rate", rate = format_percent(outcome.win_rate))}
            }
            ChartCard { title: t!("binomial-chart-title"),
                BarChartSvg {
                    chart: outcome.chart(),
                    x_label: t!("binomial-axis-wins"),
                    y_label: t!("axis-probability"),
                }
            }
        },
        Err(error) => rsx! {
            ExplorerAlert { error }
        },
    };

    rsx! {
        section { class: "explorer explorer--binomial",
            h2 { class: "explorer__title", {t!("binomial-title")} }
            div { class: "explorer__controls",
                RangeSlider {
                    id: "binomial-trials",
                    label: t!("binomial-trials-label"),
                    spec: TRIALS_SLIDER,
                    value: trials,
                    on_change: on_trials,
                }
                RangeSlider {
                    id: "binomial-min-wins",
                    label: t!("binomial-min-wins-label"),
                    spec: MIN_WINS_SLIDER,
                    value: min_wins,
                    on_change: on_min_wins,
                }
            }
            {body}
        }
    }
}

#[component]
pub fn CalorieDistributionPanel(
    target: u32,
    outcome: Result<CalorieOutcome, ExplorerError>,
    on_target: EventHandler<u32>,
) -> Element {
    let body = match outcome {
        Ok(outcome) => rsx! {
            p { class: "explorer__meta",
                {t!("poisson-lambda", lambda = format_number(outcome.lambda, 1))}
            }
            ChartCard { title: t!("poisson-chart-title"),
                BarChartSvg {
                    chart: outcome.chart(),
                    x_label: t!("poisson-axis-calories"),
                    y_label: t!("axis-probability"),
                }
            }
        },
        Err(error) => rsx! {
            ExplorerAlert { error }
        },
    };

    rsx! {
        section { class: "explorer explorer--poisson",
            h2 { class: "explorer__title", {t!("poisson-title")} }
            div { class: "explorer__controls",
                RangeSlider {
                    id: "poisson-target",
                    label: t!("poisson-target-label"),
                    spec: CALORIE_TARGET_SLIDER,
                    value: target,
                    on_change: on_target,
                }
            }
            {body}
        }
    }
}
