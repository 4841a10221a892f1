//! Headless PNG rendering of histograms.

use super::histogram::{Histogram, DEFAULT_BINS};
use crate::error::{InsightError, Result};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rendering options for histogram images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Number of equal-width bins.
    pub bins: usize,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Bar fill color as `#rrggbb`.
    pub bar_color: String,
    /// Bar outline color as `#rrggbb`.
    pub edge_color: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            width: 1000,
            height: 600,
            bar_color: "#3498db".to_string(),
            edge_color: "#000000".to_string(),
        }
    }
}

/// Parse a `#rrggbb` color.
pub fn parse_hex_color(hex: &str) -> Result<RGBColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || InsightError::InvalidParameter(format!("invalid color '{}'", hex));
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

fn render_error<E: std::fmt::Display>(e: E) -> InsightError {
    InsightError::Render(e.to_string())
}

/// Draw a histogram titled after `column` into a PNG file at `path`.
///
/// The bitmap backend is owned by this call and flushed before returning.
pub fn render_histogram(
    hist: &Histogram,
    column: &str,
    path: &Path,
    options: &PlotOptions,
) -> Result<()> {
    let bar_color = parse_hex_color(&options.bar_color)?;
    let edge_color = parse_hex_color(&options.edge_color)?;

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let y_max = (hist.max_count().max(1) as f64) * 1.05;
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Distribution of {}", column), ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(hist.min()..hist.max(), 0f64..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.25))
        .light_line_style(TRANSPARENT)
        .x_desc(column)
        .y_desc("Count")
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(hist.bins().map(|(x0, x1, count)| {
            Rectangle::new([(x0, 0.0), (x1, count as f64)], bar_color.filled())
        }))
        .map_err(render_error)?;
    chart
        .draw_series(hist.bins().map(|(x0, x1, count)| {
            Rectangle::new([(x0, 0.0), (x1, count as f64)], edge_color.stroke_width(1))
        }))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}
