//! Sparring wins against losses, colored by skill level.

use dioxus::prelude::*;

use super::frame::{value_ticks, Axes, Frame, Tick};
use super::palette;
use super::scale::Axis;
use crate::dataset::Dataset;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub wins: f64,
    pub losses: f64,
    pub level: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WinsVsLosses {
    pub points: Vec<ScatterPoint>,
    pub legend: Vec<LegendEntry>,
}

impl WinsVsLosses {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let levels = dataset.levels();
        let color_of = |level: &str| {
            let index = levels.iter().position(|l| l == level).unwrap_or(0);
            palette::cycle(&palette::DEEP, index)
        };

        let points = dataset
            .students()
            .iter()
            .filter_map(|student| {
                Some(ScatterPoint {
                    wins: f64::from(student.wins?),
                    losses: f64::from(student.losses?),
                    level: student.level.clone(),
                    color: color_of(&student.level),
                })
            })
            .collect();
        let legend = levels
            .iter()
            .map(|level| LegendEntry {
                label: level.clone(),
                color: color_of(level),
            })
            .collect();

        Self { points, legend }
    }

    fn axes(&self) -> (Axis, Axis) {
        let span = |values: Vec<f64>| {
            let low = values.iter().copied().reduce(f64::min).unwrap_or(0.0);
            let high = values.iter().copied().reduce(f64::max).unwrap_or(1.0);
            Axis::nice(low, high, 5)
        };
        (
            span(self.points.iter().map(|p| p.wins).collect()),
            span(self.points.iter().map(|p| p.losses).collect()),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Dot {
    cx: f64,
    cy: f64,
    color: String,
}

#[derive(Debug, Clone, PartialEq)]
struct LegendRow {
    swatch_y: f64,
    text_y: f64,
    label: String,
    color: String,
}

#[derive(Debug, Clone, PartialEq)]
struct ScatterLayout {
    dots: Vec<Dot>,
    legend: Vec<LegendRow>,
    legend_swatch_x: f64,
    legend_text_x: f64,
    x_ticks: Vec<Tick>,
    y_ticks: Vec<Tick>,
}

impl ScatterLayout {
    fn compute(plot: &WinsVsLosses, frame: &Frame) -> Self {
        let (x_axis, y_axis) = plot.axes();
        let x = frame.x_scale(&x_axis);
        let y = frame.y_scale(&y_axis);

        let dots = plot
            .points
            .iter()
            .map(|point| Dot {
                cx: x.map(point.wins),
                cy: y.map(point.losses),
                color: point.color.clone(),
            })
            .collect();
        let legend = plot
            .legend
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let row_top = frame.top() + 6.0 + 16.0 * index as f64;
                LegendRow {
                    swatch_y: row_top,
                    text_y: row_top + 5.0,
                    label: entry.label.clone(),
                    color: entry.color.clone(),
                }
            })
            .collect();

        Self {
            dots,
            legend,
            legend_swatch_x: frame.right() - 96.0,
            legend_text_x: frame.right() - 84.0,
            x_ticks: value_ticks(&x_axis, &x),
            y_ticks: value_ticks(&y_axis, &y),
        }
    }
}

#[component]
pub fn ScatterSvg(plot: WinsVsLosses, x_label: String, y_label: String) -> Element {
    let frame = Frame::default();
    let layout = ScatterLayout::compute(&plot, &frame);
    let view_box = frame.view_box();

    rsx! {
        svg { class: "chart", view_box: "{view_box}",
            Axes {
                frame,
                x_ticks: layout.x_ticks.clone(),
                y_ticks: layout.y_ticks.clone(),
                x_label,
                y_label,
            }
            g { class: "chart__points",
                for dot in layout.dots.iter() {
                    circle { class: "chart__point", cx: "{dot.cx}", cy: "{dot.cy}", r: "4", fill: "{dot.color}" }
                }
            }
            g { class: "chart__legend",
                for row in layout.legend.iter() {
                    circle { cx: "{layout.legend_swatch_x}", cy: "{row.swatch_y}", r: "4", fill: "{row.color}" }
                    text { class: "chart__legend-label", x: "{layout.legend_text_x}", y: "{row.text_y}", "{row.label}" }
                }
            }
        }
    }
}
