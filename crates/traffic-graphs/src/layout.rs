//! Pixel geometry of the histogram, independent of any drawing backend.
//!
//! The image is divided into a margin and a plot area. The plot area holds
//! one slot per hour; each slot carries two half-width bars, Elm Avenue on
//! the left and Hanley Highway on the right. Bars are scaled so the tallest
//! bin fills the plot height.

use crate::histogram::HourlyHistogram;
use traffic_common::HOURS_PER_DAY;

/// Gap between a bar top and its value label, and between the axis and hour labels.
pub const LABEL_OFFSET: f64 = 10.0;

/// A point in image pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal pixel position.
    pub x: f64,
    /// Vertical pixel position, growing downwards.
    pub y: f64,
}

impl Point {
    /// Rounds to integer backend coordinates.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

/// One drawn bar with its value label anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// 0 for Elm Avenue, 1 for Hanley Highway.
    pub series: usize,
    /// Hour of day.
    pub hour: usize,
    /// Count the bar represents.
    pub count: u64,
    /// Top-left corner.
    pub top_left: Point,
    /// Bottom-right corner, on the x-axis.
    pub bottom_right: Point,
    /// Bottom-centre anchor of the value label.
    pub label: Point,
}

impl Bar {
    /// Drawn height in pixels.
    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }
}

/// Image size and margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Margin around the plot area.
    pub margin: u32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            margin: 50,
        }
    }
}

impl ChartLayout {
    /// Width of the plot area.
    pub fn plot_width(&self) -> f64 {
        f64::from(self.width.saturating_sub(self.margin.saturating_mul(2)))
    }

    /// Height of the plot area.
    pub fn plot_height(&self) -> f64 {
        f64::from(self.height.saturating_sub(self.margin.saturating_mul(2)))
    }

    /// Width of one hour slot.
    #[allow(clippy::cast_precision_loss)]
    pub fn slot_width(&self) -> f64 {
        self.plot_width() / HOURS_PER_DAY as f64
    }

    /// Left edge of the plot area.
    pub fn left(&self) -> f64 {
        f64::from(self.margin)
    }

    /// Top of the plot area, where the y-axis starts.
    pub fn top(&self) -> f64 {
        f64::from(self.margin)
    }

    /// Vertical position of the x-axis.
    pub fn baseline(&self) -> f64 {
        f64::from(self.height) - f64::from(self.margin)
    }

    /// Right end of the x-axis.
    pub fn right(&self) -> f64 {
        f64::from(self.width) - f64::from(self.margin)
    }

    /// End points of the x-axis, left to right along the baseline.
    pub fn x_axis(&self) -> [Point; 2] {
        let y = self.baseline();
        [Point { x: self.left(), y }, Point { x: self.right(), y }]
    }

    /// End points of the y-axis, top to bottom along the left edge.
    pub fn y_axis(&self) -> [Point; 2] {
        let x = self.left();
        [Point { x, y: self.top() }, Point { x, y: self.baseline() }]
    }

    /// Top-centre anchor of an hour label.
    #[allow(clippy::cast_precision_loss)]
    pub fn hour_label(&self, hour: usize) -> Point {
        Point {
            x: self.left() + (hour as f64 + 0.5) * self.slot_width(),
            y: self.baseline() + LABEL_OFFSET,
        }
    }

    /// Text and anchor of every hour label, `0` through `23`.
    pub fn hour_ticks(&self) -> impl Iterator<Item = (String, Point)> + '_ {
        (0..HOURS_PER_DAY).map(|hour| (hour.to_string(), self.hour_label(hour)))
    }

    /// Centre anchor of the title.
    pub fn title(&self) -> Point {
        Point {
            x: f64::from(self.width) / 2.0,
            y: f64::from(self.margin) / 2.0,
        }
    }

    /// Centre anchor of the x-axis caption, a third of the margin above the bottom edge.
    pub fn x_caption(&self) -> Point {
        Point {
            x: f64::from(self.width) / 2.0,
            y: f64::from(self.height) - f64::from(self.margin) / 3.0,
        }
    }

    /// Top-left anchor of the legend entry for a series.
    #[allow(clippy::cast_precision_loss)]
    pub fn legend_entry(&self, series: usize) -> Point {
        Point {
            x: self.left() + LABEL_OFFSET,
            y: f64::from(self.margin) + LABEL_OFFSET + series as f64 * 30.0,
        }
    }

    /// Every bar of the histogram, hour by hour, Elm before Hanley.
    ///
    /// When every bin is zero all bars have zero height.
    #[allow(clippy::cast_precision_loss)]
    pub fn bars(&self, histogram: &HourlyHistogram) -> Vec<Bar> {
        let max = histogram.max_count();
        let slot = self.slot_width();
        let bar_width = slot / 2.0;
        let baseline = self.baseline();

        let mut bars = Vec::with_capacity(HOURS_PER_DAY * histogram.series.len());
        for hour in 0..HOURS_PER_DAY {
            for (series, data) in histogram.series.iter().enumerate() {
                let count = data.counts[hour];
                let height = if max == 0 {
                    0.0
                } else {
                    count as f64 / max as f64 * self.plot_height()
                };
                let x0 = self.left() + hour as f64 * slot + series as f64 * bar_width;
                let top = baseline - height;

                bars.push(Bar {
                    series,
                    hour,
                    count,
                    top_left: Point { x: x0, y: top },
                    bottom_right: Point {
                        x: x0 + bar_width,
                        y: baseline,
                    },
                    label: Point {
                        x: x0 + bar_width / 2.0,
                        y: top - LABEL_OFFSET,
                    },
                });
            }
        }
        bars
    }
}
