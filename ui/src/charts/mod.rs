//! Chart models (pure, rebuilt on every render) and their SVG components.

mod bars;
mod boxplot;
mod frame;
mod histogram;
mod levels;
pub mod palette;
mod scale;
mod scatter;

pub use bars::{Bar, BarChart, BarChartSvg, BarLayout, BarRect};
pub use boxplot::{BoxPlotSvg, BoxStats, CaloriesByLevel, LevelBox};
pub use frame::{Axes, Frame, Tick};
pub use histogram::Histogram;
pub use levels::{level_chart, level_counts, LevelCount};
pub use scale::{nice_step, Axis, LinearScale};
pub use scatter::{LegendEntry, ScatterPoint, ScatterSvg, WinsVsLosses};

use dioxus::prelude::*;

/// Card wrapper giving every chart the same heading and frame.
#[component]
pub fn ChartCard(title: String, children: Element) -> Element {
    rsx! {
        figure { class: "chart-card",
            figcaption { class: "chart-card__title", "{title}" }
            {children}
        }
    }
}
