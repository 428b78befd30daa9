//! Session calories per skill level as box-and-whisker plots.

use dioxus::prelude::*;

use super::frame::{value_ticks, Axes, Frame, Tick};
use super::palette;
use super::scale::Axis;
use crate::core::stats;
use crate::dataset::Dataset;

/// Whiskers reach the furthest observation within this many IQRs of the box.
const WHISKER_IQR: f64 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = stats::sorted_finite(values);
        if sorted.is_empty() {
            return None;
        }

        let q1 = stats::percentile(&sorted, 0.25);
        let median = stats::percentile(&sorted, 0.5);
        let q3 = stats::percentile(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR * iqr;
        let high_fence = q3 + WHISKER_IQR * iqr;

        let inside: Vec<f64> = sorted
            .iter()
            .copied()
            .filter(|v| *v >= low_fence && *v <= high_fence)
            .collect();
        let whisker_low = inside.iter().copied().reduce(f64::min).unwrap_or(q1);
        let whisker_high = inside.iter().copied().reduce(f64::max).unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < whisker_low || *v > whisker_high)
            .collect();

        Some(Self {
            count: sorted.len(),
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    fn lowest(&self) -> f64 {
        self.outliers.iter().copied().fold(self.whisker_low, f64::min)
    }

    fn highest(&self) -> f64 {
        self.outliers.iter().copied().fold(self.whisker_high, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelBox {
    pub level: String,
    pub color: String,
    pub stats: BoxStats,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaloriesByLevel {
    pub boxes: Vec<LevelBox>,
}

impl CaloriesByLevel {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let boxes = dataset
            .levels()
            .into_iter()
            .enumerate()
            .filter_map(|(index, level)| {
                let calories: Vec<f64> = dataset
                    .students()
                    .iter()
                    .filter(|student| student.level == level)
                    .filter_map(|student| student.calories)
                    .collect();
                BoxStats::from_values(&calories).map(|stats| LevelBox {
                    color: palette::cycle(&palette::PASTEL, index),
                    level,
                    stats,
                })
            })
            .collect();

        Self { boxes }
    }

    fn value_range(&self) -> (f64, f64) {
        let low = self.boxes.iter().map(|b| b.stats.lowest()).reduce(f64::min);
        let high = self.boxes.iter().map(|b| b.stats.highest()).reduce(f64::max);
        low.zip(high).unwrap_or((0.0, 1.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BoxGlyph {
    color: String,
    center: f64,
    box_left: f64,
    box_width: f64,
    cap_left: f64,
    cap_right: f64,
    right: f64,
    q1: f64,
    q3: f64,
    box_height: f64,
    median: f64,
    whisker_low: f64,
    whisker_high: f64,
    outliers: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
struct BoxLayout {
    glyphs: Vec<BoxGlyph>,
    x_ticks: Vec<Tick>,
    y_ticks: Vec<Tick>,
}

impl BoxLayout {
    fn compute(plot: &CaloriesByLevel, frame: &Frame) -> Self {
        let (low, high) = plot.value_range();
        let axis = Axis::nice(low, high, 5);
        let y = frame.y_scale(&axis);
        let slot = frame.plot_width() / plot.boxes.len().max(1) as f64;

        let mut glyphs = Vec::with_capacity(plot.boxes.len());
        let mut x_ticks = Vec::with_capacity(plot.boxes.len());
        for (index, level_box) in plot.boxes.iter().enumerate() {
            let center = frame.left() + slot * (index as f64 + 0.5);
            let box_width = slot * 0.6;
            let stats = &level_box.stats;
            glyphs.push(BoxGlyph {
                color: level_box.color.clone(),
                center,
                box_left: center - box_width / 2.0,
                box_width,
                cap_left: center - box_width / 4.0,
                cap_right: center + box_width / 4.0,
                right: center + box_width / 2.0,
                q1: y.map(stats.q1),
                q3: y.map(stats.q3),
                box_height: (y.map(stats.q1) - y.map(stats.q3)).max(0.0),
                median: y.map(stats.median),
                whisker_low: y.map(stats.whisker_low),
                whisker_high: y.map(stats.whisker_high),
                outliers: stats.outliers.iter().map(|v| y.map(*v)).collect(),
            });
            x_ticks.push(Tick {
                position: center,
                label: level_box.level.clone(),
            });
        }

        Self {
            glyphs,
            x_ticks,
            y_ticks: value_ticks(&axis, &y),
        }
    }
}

#[component]
pub fn BoxPlotSvg(plot: CaloriesByLevel, x_label: String, y_label: String) -> Element {
    let frame = Frame::default();
    let layout = BoxLayout::compute(&plot, &frame);
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
            for glyph in layout.glyphs.iter() {
                g { class: "chart__box",
                    line { class: "chart__whisker", x1: "{glyph.center}", y1: "{glyph.whisker_high}", x2: "{glyph.center}", y2: "{glyph.q3}" }
                    line { class: "chart__whisker", x1: "{glyph.center}", y1: "{glyph.q1}", x2: "{glyph.center}", y2: "{glyph.whisker_low}" }
                    line { class: "chart__whisker", x1: "{glyph.cap_left}", y1: "{glyph.whisker_high}", x2: "{glyph.cap_right}", y2: "{glyph.whisker_high}" }
                    line { class: "chart__whisker", x1: "{glyph.cap_left}", y1: "{glyph.whisker_low}", x2: "{glyph.cap_right}", y2: "{glyph.whisker_low}" }
                    rect {
                        class: "chart__box-body",
                        x: "{glyph.box_left}",
                        y: "{glyph.q3}",
                        width: "{glyph.box_width}",
                        height: "{glyph.box_height}",
                        fill: "{glyph.color}",
                    }
                    line { class: "chart__median", x1: "{glyph.box_left}", y1: "{glyph.median}", x2: "{glyph.right}", y2: "{glyph.median}" }
                    for outlier in glyph.outliers.iter() {
                        circle { class: "chart__outlier", cx: "{glyph.center}", cy: "{outlier}", r: "3" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::sample;

    #[test]
    fn quartiles_and_whiskers() {
        let stats = BoxStats::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 5.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn far_points_become_outliers() {
        let stats = BoxStats::from_values(&[10.0, 11.0, 12.0, 13.0, 14.0, 100.0]).unwrap();
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.whisker_high, 14.0);
        assert!(stats.whisker_low <= stats.q1 && stats.q1 <= stats.median);
        assert!(stats.median <= stats.q3 && stats.q3 <= stats.whisker_high);
    }

    #[test]
    fn empty_group_has_no_box() {
        assert!(BoxStats::from_values(&[]).is_none());
    }

    #[test]
    fn one_box_per_level() {
        let plot = CaloriesByLevel::from_dataset(&sample());
        assert_eq!(plot.boxes.len(), 3);
        assert_eq!(plot.boxes[0].level, "Iniciante");
        assert_eq!(plot.boxes[0].stats.median, 500.0);
        assert_eq!(plot.boxes[0].color, palette::PASTEL[0]);
    }

    #[test]
    fn layout_places_boxes_inside_the_plot() {
        let frame = Frame::default();
        let layout = BoxLayout::compute(&CaloriesByLevel::from_dataset(&sample()), &frame);
        assert_eq!(layout.glyphs.len(), 3);
        for glyph in &layout.glyphs {
            assert!(glyph.whisker_high >= frame.top() && glyph.whisker_low <= frame.bottom());
            assert!(glyph.q3 <= glyph.median && glyph.median <= glyph.q1);
        }
    }
}
