//! Bar chart rendering for the analysis results
//!
//! Charts are drawn with the [`plotters`] bitmap backend and saved as PNG.
//! Figure sizes are given in inches and converted to pixels at the configured
//! DPI, so a 12x8 inch figure at 300 DPI becomes a 3600x2400 image. Font sizes
//! are given in points and scaled the same way.

use crate::analyzers::WindAnalysis;
use crate::config::PlotSettings;
use crate::models::AggregateRow;
use crate::utils::format_minutes;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontStyle, FontTransform, TextStyle};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

const RED: (u8, u8, u8) = (255, 0, 0);
const ORANGE: (u8, u8, u8) = (255, 165, 0);
const SKY_BLUE: (u8, u8, u8) = (135, 206, 235);
const CORAL: (u8, u8, u8) = (255, 127, 80);

const BAR_ALPHA: f64 = 0.7;
const BAR_HALF_WIDTH: f64 = 0.4;
/// Extra room above the tallest bar for value annotations, as a share of the data span
const HEADROOM: f64 = 0.2;

const TITLE_PT: f64 = 14.0;
const AXIS_DESC_PT: f64 = 12.0;
const TICK_LABEL_PT: f64 = 10.0;
const ANNOTATION_PT: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    /// Bar height. Non-finite values are drawn as an empty bar.
    pub value: f64,
    /// Text lines drawn above the bar, top line first
    pub annotation: Vec<String>,
    pub color: (u8, u8, u8),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Figure size in inches
    pub figure: (f64, f64),
    pub rotate_labels: bool,
    /// Values are counts, so the y-axis gets whole-number ticks
    pub integer_values: bool,
    pub bars: Vec<Bar>,
}

pub struct PlotWriter {
    settings: PlotSettings,
}

impl PlotWriter {
    pub fn new(settings: PlotSettings) -> Self {
        Self { settings }
    }

    pub fn route_cancellations_chart(&self, top_routes: &[AggregateRow]) -> BarChart {
        BarChart {
            title: "Routes with Highest Number of Cancellations".to_string(),
            x_label: "Route".to_string(),
            y_label: "Total Cancellations".to_string(),
            figure: (self.settings.figure_width, self.settings.figure_height),
            rotate_labels: true,
            integer_values: true,
            bars: top_routes
                .iter()
                .map(|row| Bar {
                    label: row.key.clone(),
                    value: row.total_cancellations as f64,
                    annotation: vec![row.total_cancellations.to_string()],
                    color: RED,
                })
                .collect(),
        }
    }

    pub fn airline_delays_chart(&self, top_airlines: &[AggregateRow]) -> BarChart {
        BarChart {
            title: "Airlines with Highest Mean Departure Delays".to_string(),
            x_label: "Airline".to_string(),
            y_label: "Mean Departure Delay (minutes)".to_string(),
            figure: (self.settings.figure_width, self.settings.figure_height),
            rotate_labels: true,
            integer_values: false,
            bars: top_airlines
                .iter()
                .map(|row| Bar {
                    label: row.key.clone(),
                    value: row.mean_dep_delay,
                    annotation: vec![format_minutes(row.mean_dep_delay)],
                    color: ORANGE,
                })
                .collect(),
        }
    }

    pub fn wind_impact_chart(&self, wind: &WindAnalysis) -> BarChart {
        let palette = [SKY_BLUE, CORAL];

        BarChart {
            title: "Impact of Wind Conditions on Flight Delays".to_string(),
            x_label: "Wind Conditions".to_string(),
            y_label: "Mean Departure Delay (minutes)".to_string(),
            figure: (
                self.settings.wind_figure_width,
                self.settings.wind_figure_height,
            ),
            rotate_labels: false,
            integer_values: false,
            bars: wind
                .summary
                .iter()
                .enumerate()
                .map(|(i, (group, stats))| Bar {
                    label: group.label().to_string(),
                    value: stats.mean,
                    annotation: vec![
                        format!("{} min", format_minutes(stats.mean)),
                        format!("(n={})", stats.count),
                    ],
                    color: palette[i % palette.len()],
                })
                .collect(),
        }
    }

    pub fn write_route_cancellations(&self, top_routes: &[AggregateRow], path: &Path) -> Result<()> {
        info!("Creating route cancellations plot...");
        self.render(&self.route_cancellations_chart(top_routes), path)
    }

    pub fn write_airline_delays(&self, top_airlines: &[AggregateRow], path: &Path) -> Result<()> {
        info!("Creating airline delays plot...");
        self.render(&self.airline_delays_chart(top_airlines), path)
    }

    pub fn write_wind_impact(&self, wind: &WindAnalysis, path: &Path) -> Result<()> {
        info!("Creating wind impact plot...");
        self.render(&self.wind_impact_chart(wind), path)
    }

    /// Draw a bar chart and save it as a PNG file
    ///
    /// # Chart Properties
    /// * One bar per entry, category labels under the bars
    /// * Annotation lines centred above each bar
    /// * Y-axis always includes zero and extends below it for negative values
    pub fn render(&self, chart: &BarChart, output_path: &Path) -> Result<()> {
        if chart.bars.is_empty() {
            return Err(PlotError::InvalidData(format!(
                "'{}' has no bars to draw",
                chart.title
            )));
        }

        let (width, height) = self.settings.pixels(chart.figure.0, chart.figure.1);
        let font_px = |points: f64| self.settings.font_px(points);

        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let bar_count = chart.bars.len();
        let (y_min, y_max) = value_range(&chart.bars);
        let x_label_area = if chart.rotate_labels {
            font_px(150.0)
        } else {
            font_px(40.0)
        };

        let mut chart_context = ChartBuilder::on(&root)
            .caption(
                &chart.title,
                ("sans-serif", font_px(TITLE_PT))
                    .into_font()
                    .style(FontStyle::Bold),
            )
            .margin(font_px(10.0) as u32)
            .x_label_area_size(x_label_area as u32)
            .y_label_area_size(font_px(60.0) as u32)
            .build_cartesian_2d(-0.5..(bar_count as f64 - 0.5), y_min..y_max)
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        let tick_font = ("sans-serif", font_px(TICK_LABEL_PT)).into_font();
        let whole_numbers = |y: &f64| format!("{:.0}", y);

        let mut mesh = chart_context.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(0)
            .y_label_style(tick_font.clone())
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .axis_desc_style(("sans-serif", font_px(AXIS_DESC_PT)));
        if chart.integer_values {
            mesh.y_labels(integer_tick_count(y_min, y_max))
                .y_label_formatter(&whole_numbers);
        }
        mesh.draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        // Category names are drawn by hand: the mesh centres rotated tick
        // labels on the axis line, which puts them over the bars.
        let label_style = category_label_style(tick_font, chart.rotate_labels);
        let label_gap = font_px(4.0) as i32;
        for (index, bar) in chart.bars.iter().enumerate() {
            let (x, y) = chart_context.backend_coord(&(index as f64, y_min));
            root.draw_text(&bar.label, &label_style, (x, y + label_gap))
                .map_err(|e| PlotError::Drawing(e.to_string()))?;
        }

        let annotation_style = TextStyle::from(("sans-serif", font_px(ANNOTATION_PT)).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let line_height = font_px(ANNOTATION_PT * 1.2) as i32;
        let gap = font_px(3.0) as i32;

        for (index, bar) in chart.bars.iter().enumerate() {
            let x = index as f64;
            let value = if bar.value.is_finite() { bar.value } else { 0.0 };
            let (r, g, b) = bar.color;

            chart_context
                .draw_series(std::iter::once(Rectangle::new(
                    [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, value)],
                    RGBColor(r, g, b).mix(BAR_ALPHA).filled(),
                )))
                .map_err(|e| PlotError::Drawing(e.to_string()))?;

            let lines_below = bar.annotation.len() as i32;
            for (line_index, line) in bar.annotation.iter().enumerate() {
                let offset = -gap - (lines_below - 1 - line_index as i32) * line_height;
                chart_context
                    .draw_series(std::iter::once(
                        EmptyElement::at((x, value.max(0.0)))
                            + Text::new(line.clone(), (0, offset), annotation_style.clone()),
                    ))
                    .map_err(|e| PlotError::Drawing(e.to_string()))?;
            }
        }

        root.present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        debug!(
            path = %output_path.display(),
            width,
            height,
            bars = bar_count,
            "Saved bar chart"
        );
        Ok(())
    }
}

/// Y-axis bounds covering every finite value and zero, with headroom for annotations
fn value_range(bars: &[Bar]) -> (f64, f64) {
    let (low, high) = bars
        .iter()
        .map(|bar| bar.value)
        .filter(|value| value.is_finite())
        .fold((0.0f64, 0.0f64), |(low, high), value| {
            (low.min(value), high.max(value))
        });

    let span = (high - low).max(1.0);
    let low = if low < 0.0 { low - span * HEADROOM } else { 0.0 };
    (low, high + span * HEADROOM)
}

/// Style for category names under the x-axis. Rotated names hang down from
/// the axis, centred on their bar; upright names sit centred below it.
fn category_label_style(font: FontDesc<'_>, rotate: bool) -> TextStyle<'_> {
    if rotate {
        TextStyle::from(font.transform(FontTransform::Rotate90))
            .pos(Pos::new(HPos::Left, VPos::Center))
    } else {
        TextStyle::from(font).pos(Pos::new(HPos::Center, VPos::Top))
    }
}

/// Number of y ticks that keeps the step at one or more for count data
fn integer_tick_count(low: f64, high: f64) -> usize {
    ((high - low).floor() as usize + 1).clamp(2, 10)
}
