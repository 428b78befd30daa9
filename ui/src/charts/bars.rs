//! Bar chart model and SVG renderer shared by the count, histogram and
//! probability charts.

use dioxus::prelude::*;

use super::frame::{value_ticks, Axes, Frame, Tick};
use super::scale::Axis;

/// Roughly this many category labels fit under the x axis.
const MAX_X_LABELS: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    /// Bars touch (histogram bins) instead of leaving gaps between categories.
    pub contiguous: bool,
}

impl BarChart {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self {
            bars,
            contiguous: false,
        }
    }

    pub fn contiguous(bars: Vec<Bar>) -> Self {
        Self {
            bars,
            contiguous: true,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.bars
            .iter()
            .map(|bar| bar.value)
            .filter(|value| value.is_finite())
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub rects: Vec<BarRect>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl BarLayout {
    pub fn compute(chart: &BarChart, frame: &Frame) -> Self {
        let axis = Axis::from_zero(chart.max_value(), 5);
        let y_scale = frame.y_scale(&axis);
        let slot = frame.plot_width() / chart.len().max(1) as f64;
        let fill = if chart.contiguous { 1.0 } else { 0.8 };
        let label_every = chart.len().div_ceil(MAX_X_LABELS).max(1);
        let baseline = y_scale.map(0.0);

        let mut rects = Vec::with_capacity(chart.len());
        let mut x_ticks = Vec::new();
        for (index, bar) in chart.bars.iter().enumerate() {
            let slot_left = frame.left() + slot * index as f64;
            let width = slot * fill;
            let top = y_scale.map(bar.value.max(0.0));
            rects.push(BarRect {
                x: slot_left + (slot - width) / 2.0,
                y: top,
                width,
                height: (baseline - top).max(0.0),
                color: bar.color.clone(),
            });
            if index % label_every == 0 {
                x_ticks.push(Tick {
                    position: slot_left + slot / 2.0,
                    label: bar.label.clone(),
                });
            }
        }

        Self {
            rects,
            x_ticks,
            y_ticks: value_ticks(&axis, &y_scale),
        }
    }
}

#[component]
pub fn BarChartSvg(chart: BarChart, x_label: String, y_label: String) -> Element {
    let frame = Frame::default();
    let layout = BarLayout::compute(&chart, &frame);
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
            g { class: "chart__bars",
                for bar in layout.rects.iter() {
                    rect {
                        class: "chart__bar",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: "{bar.color}",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(values: &[f64]) -> BarChart {
        BarChart::new(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| Bar::new(i.to_string(), *v, "#000000"))
                .collect(),
        )
    }

    #[test]
    fn one_rect_per_bar() {
        let layout = BarLayout::compute(&chart(&[1.0, 4.0, 2.0]), &Frame::default());
        assert_eq!(layout.rects.len(), 3);
        assert_eq!(layout.x_ticks.len(), 3);
    }

    #[test]
    fn heights_are_proportional() {
        let layout = BarLayout::compute(&chart(&[1.0, 2.0]), &Frame::default());
        let ratio = layout.rects[1].height / layout.rects[0].height;
        assert!((ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn long_charts_thin_their_labels() {
        let values = vec![0.1; 51];
        let layout = BarLayout::compute(&chart(&values), &Frame::default());
        assert_eq!(layout.rects.len(), 51);
        assert!(layout.x_ticks.len() <= MAX_X_LABELS + 1);
        assert_eq!(layout.x_ticks[0].label, "0");
    }

    #[test]
    fn contiguous_bars_fill_their_slot() {
        let mut bars = chart(&[1.0, 1.0]);
        bars.contiguous = true;
        let layout = BarLayout::compute(&bars, &Frame::default());
        let first = &layout.rects[0];
        let second = &layout.rects[1];
        assert!((first.x + first.width - second.x).abs() < 1e-9);
    }
}
