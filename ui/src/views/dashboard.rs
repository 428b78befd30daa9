use std::sync::Arc;

use dioxus::prelude::*;

use crate::charts::{BarChartSvg, BoxPlotSvg, ChartCard, ScatterSvg};
use crate::dashboard::{DashboardModel, WidgetState};
use crate::dataset::Dataset;
use crate::export::ExportPanel;
use crate::probability::{CalorieDistributionPanel, WinProbabilityPanel};
use crate::summary::SummaryMetrics;
use crate::t;

/// The whole page. Slider state lives here; everything else is re-derived.
#[component]
pub fn Dashboard(dataset: Arc<Dataset>) -> Element {
    let mut state = use_signal(WidgetState::default);
    let model = DashboardModel::respond(&dataset, &state());
    let count_label = t!("axis-students");

    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-heading")} }
            p { class: "page__lede", {t!("dashboard-lede")} }

            SummaryCards { metrics: model.summary.clone() }

            h2 { class: "section-title", {t!("section-charts")} }
            div { class: "chart-grid",
                ChartCard { title: t!("chart-levels-title"),
                    BarChartSvg {
                        chart: model.levels.clone(),
                        x_label: t!("axis-level"),
                        y_label: count_label.clone(),
                    }
                }
                ChartCard { title: t!("chart-frequency-title"),
                    BarChartSvg {
                        chart: model.frequency.to_chart(),
                        x_label: t!("axis-weekly-sessions"),
                        y_label: count_label.clone(),
                    }
                }
                ChartCard { title: t!("chart-calories-title"),
                    BoxPlotSvg {
                        plot: model.calories.clone(),
                        x_label: t!("axis-level"),
                        y_label: t!("axis-calories"),
                    }
                }
                ChartCard { title: t!("chart-scatter-title"),
                    ScatterSvg {
                        plot: model.scatter.clone(),
                        x_label: t!("axis-wins"),
                        y_label: t!("axis-losses"),
                    }
                }
            }

            ExportPanel { dataset: dataset.clone() }

            h2 { class: "section-title", {t!("section-probability")} }
            div { class: "explorer-grid",
                WinProbabilityPanel {
                    trials: model.state.trials,
                    min_wins: model.state.min_wins,
                    outcome: model.win_probability.clone(),
                    on_trials: move |n| state.with_mut(|s| s.trials = n),
                    on_min_wins: move |k| state.with_mut(|s| s.min_wins = k),
                }
                CalorieDistributionPanel {
                    target: model.state.calorie_target,
                    outcome: model.calorie_distribution.clone(),
                    on_target: move |target| state.with_mut(|s| s.calorie_target = target),
                }
            }
        }
    }
}

#[component]
pub fn SummaryCards(metrics: SummaryMetrics) -> Element {
    let cards = [
        (t!("summary-students"), metrics.students.to_string()),
        (t!("summary-mean-age"), t!("unit-years", value = metrics.age_display())),
        (
            t!("summary-mean-calories"),
            t!("unit-kcal", value = metrics.calories_display()),
        ),
        (t!("summary-total-wins"), metrics.wins_display()),
    ];

    rsx! {
        div { class: "summary-cards",
            for (label, value) in cards {
                div { class: "summary-card", key: "{label}",
                    span { class: "summary-card__label", "{label}" }
                    strong { class: "summary-card__value", "{value}" }
                }
            }
        }
    }
}
