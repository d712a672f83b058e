//! Histogram rendering trait and the plotters bitmap implementation.

use crate::histogram::{histogram_file_name, HourlyHistogram, X_AXIS_CAPTION};
use crate::layout::{ChartLayout, Point};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use traffic_analysis::TrafficRecord;
use traffic_common::{Result, SurveyDate, TrafficError};
use traffic_config::ChartConfig;

const TITLE_FONT_SIZE: f64 = 20.0;
const LABEL_FONT_SIZE: f64 = 12.0;
const LEGEND_SWATCH: (i32, i32) = (30, 15);

/// Trait for drawing a histogram to an image file.
pub trait ChartRenderer {
    /// Draws the histogram to `path`.
    fn render(&self, histogram: &HourlyHistogram, path: &Path) -> Result<()>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Parse a `#rrggbb` string to an [`RGBColor`], falling back to black.
pub fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

/// Resolved drawing style.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Image geometry.
    pub layout: ChartLayout,
    /// Bar colour per series, Elm Avenue first.
    pub series_colors: [RGBColor; 2],
    /// Image background.
    pub background: RGBColor,
    /// Axes, outlines and text.
    pub foreground: RGBColor,
    /// Font family for all text.
    pub font_family: String,
}

impl From<&ChartConfig> for ChartStyle {
    fn from(config: &ChartConfig) -> Self {
        Self {
            layout: ChartLayout {
                width: config.width,
                height: config.height,
                margin: config.margin,
            },
            series_colors: [
                parse_color(&config.colors.elm),
                parse_color(&config.colors.hanley),
            ],
            background: parse_color(&config.colors.background),
            foreground: parse_color(&config.colors.foreground),
            font_family: config.font_family.clone(),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&ChartConfig::default())
    }
}

/// Draws the histogram as a PNG with the plotters bitmap backend.
#[derive(Debug, Clone, Default)]
pub struct BitmapHistogramRenderer {
    style: ChartStyle,
}

impl BitmapHistogramRenderer {
    /// Creates a renderer with the given style.
    pub const fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// The style in use.
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }

    fn text_style(&self, size: f64, hpos: HPos, vpos: VPos) -> TextStyle<'_> {
        self.font_style(size, FontStyle::Normal, hpos, vpos)
    }

    fn font_style(
        &self,
        size: f64,
        weight: FontStyle,
        hpos: HPos,
        vpos: VPos,
    ) -> TextStyle<'_> {
        (self.style.font_family.as_str(), size, weight)
            .into_font()
            .color(&self.style.foreground)
            .pos(Pos::new(hpos, vpos))
    }
}

impl From<&ChartConfig> for BitmapHistogramRenderer {
    fn from(config: &ChartConfig) -> Self {
        Self::new(ChartStyle::from(config))
    }
}

impl ChartRenderer for BitmapHistogramRenderer {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn render(&self, histogram: &HourlyHistogram, path: &Path) -> Result<()> {
        let layout = self.style.layout;
        let root = BitMapBackend::new(path, (layout.width, layout.height)).into_drawing_area();
        root.fill(&self.style.background)?;

        let bars = layout.bars(histogram);
        debug!(bars = bars.len(), max = histogram.max_count(), "Drawing histogram bars");

        let value_style = self.text_style(LABEL_FONT_SIZE, HPos::Center, VPos::Bottom);
        for bar in &bars {
            let color = self.style.series_colors[bar.series];
            let corners = [bar.top_left.to_pixel(), bar.bottom_right.to_pixel()];
            root.draw(&Rectangle::new(corners, color.filled()))?;
            root.draw(&Rectangle::new(corners, self.style.foreground.stroke_width(1)))?;
            root.draw(&Text::new(
                bar.count.to_string(),
                bar.label.to_pixel(),
                value_style.clone(),
            ))?;
        }

        for axis in [layout.x_axis(), layout.y_axis()] {
            root.draw(&PathElement::new(
                axis.map(Point::to_pixel),
                self.style.foreground.stroke_width(1),
            ))?;
        }

        let hour_style = self.text_style(LABEL_FONT_SIZE, HPos::Center, VPos::Top);
        for (text, anchor) in layout.hour_ticks() {
            root.draw(&Text::new(text, anchor.to_pixel(), hour_style.clone()))?;
        }

        root.draw(&Text::new(
            X_AXIS_CAPTION,
            layout.x_caption().to_pixel(),
            self.text_style(LABEL_FONT_SIZE, HPos::Center, VPos::Center),
        ))?;
        root.draw(&Text::new(
            histogram.title.as_str(),
            layout.title().to_pixel(),
            self.font_style(TITLE_FONT_SIZE, FontStyle::Bold, HPos::Center, VPos::Center),
        ))?;

        let legend_style = self.text_style(LABEL_FONT_SIZE, HPos::Left, VPos::Center);
        for (index, series) in histogram.series.iter().enumerate() {
            let (x, y) = layout.legend_entry(index).to_pixel();
            let (w, h) = LEGEND_SWATCH;
            root.draw(&Rectangle::new(
                [(x, y), (x + w, y + h)],
                self.style.series_colors[index].filled(),
            ))?;
            root.draw(&Text::new(
                series.name.as_str(),
                (x + w + 8, y + h / 2),
                legend_style.clone(),
            ))?;
        }

        root.present()?;
        info!("Successfully rendered histogram to {}", path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "bitmap-histogram"
    }
}

/// Buckets `records` and renders `histogram_<DDMMYYYY>.png` into `output_dir`.
///
/// Returns the path of the image written.
pub fn render_histogram<R>(
    renderer: &R,
    records: &[TrafficRecord],
    date: &SurveyDate,
    output_dir: &Path,
) -> Result<PathBuf>
where
    R: ChartRenderer + ?Sized,
{
    let histogram = HourlyHistogram::from_records(records, date)?;

    std::fs::create_dir_all(output_dir).map_err(|e| {
        TrafficError::chart_with_source(
            format!("cannot create output directory {}", output_dir.display()),
            e,
        )
    })?;

    let path = output_dir.join(histogram_file_name(&date.key()));
    debug!(renderer = renderer.name(), "Rendering histogram");
    renderer.render(&histogram, &path)?;
    Ok(path)
}
