//! Shared SVG plot frame and axis rendering.

use dioxus::prelude::*;

use super::scale::{Axis, LinearScale};
use crate::core::format;

/// Outer size and margins of a chart, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            margin_left: 56.0,
            margin_right: 16.0,
            margin_top: 16.0,
            margin_bottom: 52.0,
        }
    }
}

impl Frame {
    pub fn left(&self) -> f64 {
        self.margin_left
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn top(&self) -> f64 {
        self.margin_top
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        self.right() - self.left()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Pixel scale for a vertical value axis (larger values further up).
    pub fn y_scale(&self, axis: &Axis) -> LinearScale {
        axis.scale((self.bottom(), self.top()))
    }

    /// Pixel scale for a horizontal value axis.
    pub fn x_scale(&self, axis: &Axis) -> LinearScale {
        axis.scale((self.left(), self.right()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Labelled ticks for every step of `axis`, positioned through `scale`.
pub fn value_ticks(axis: &Axis, scale: &LinearScale) -> Vec<Tick> {
    axis.ticks()
        .into_iter()
        .map(|value| Tick {
            position: scale.map(value),
            label: format::format_tick(value, axis.step),
        })
        .collect()
}

/// Pre-computed coordinates for [`Axes`]; keeps arithmetic out of markup.
#[derive(Debug, Clone, PartialEq)]
struct AxesGeometry {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    y_label_x: f64,
    x_tick_y: f64,
    x_label_x: f64,
    x_label_y: f64,
    y_title_x: f64,
}

impl AxesGeometry {
    fn new(frame: &Frame) -> Self {
        Self {
            left: frame.left(),
            right: frame.right(),
            top: frame.top(),
            bottom: frame.bottom(),
            y_label_x: frame.left() - 6.0,
            x_tick_y: frame.bottom() + 16.0,
            x_label_x: frame.left() + frame.plot_width() / 2.0,
            x_label_y: frame.height - 8.0,
            // Rotated by -90°, so x runs along the negative vertical.
            y_title_x: -(frame.top() + frame.bottom()) / 2.0,
        }
    }
}

#[component]
pub fn Axes(
    frame: Frame,
    x_ticks: Vec<Tick>,
    y_ticks: Vec<Tick>,
    x_label: String,
    y_label: String,
) -> Element {
    let geo = AxesGeometry::new(&frame);

    rsx! {
        g { class: "chart__axes",
            for tick in y_ticks.iter() {
                line {
                    class: "chart__grid",
                    x1: "{geo.left}",
                    y1: "{tick.position}",
                    x2: "{geo.right}",
                    y2: "{tick.position}",
                }
                text {
                    class: "chart__tick",
                    x: "{geo.y_label_x}",
                    y: "{tick.position}",
                    text_anchor: "end",
                    dominant_baseline: "middle",
                    "{tick.label}"
                }
            }
            for tick in x_ticks.iter() {
                text {
                    class: "chart__tick",
                    x: "{tick.position}",
                    y: "{geo.x_tick_y}",
                    text_anchor: "middle",
                    "{tick.label}"
                }
            }
            line {
                class: "chart__axis-line",
                x1: "{geo.left}",
                y1: "{geo.bottom}",
                x2: "{geo.right}",
                y2: "{geo.bottom}",
            }
            line {
                class: "chart__axis-line",
                x1: "{geo.left}",
                y1: "{geo.top}",
                x2: "{geo.left}",
                y2: "{geo.bottom}",
            }
            text {
                class: "chart__axis-label",
                x: "{geo.x_label_x}",
                y: "{geo.x_label_y}",
                text_anchor: "middle",
                "{x_label}"
            }
            text {
                class: "chart__axis-label",
                transform: "rotate(-90)",
                x: "{geo.y_title_x}",
                y: "14",
                text_anchor: "middle",
                "{y_label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_geometry() {
        let frame = Frame::default();
        assert_eq!(frame.plot_width(), 328.0);
        assert_eq!(frame.bottom(), 248.0);
        assert_eq!(frame.view_box(), "0 0 400 300");
    }

    #[test]
    fn value_ticks_run_bottom_to_top() {
        let frame = Frame::default();
        let axis = Axis::from_zero(10.0, 5);
        let ticks = value_ticks(&axis, &frame.y_scale(&axis));
        assert_eq!(ticks.first().map(|t| t.position), Some(frame.bottom()));
        assert_eq!(ticks.last().map(|t| t.position), Some(frame.top()));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("10"));
    }
}
