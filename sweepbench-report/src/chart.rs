//! Chart Renderer
//!
//! The last stage of a sweep. Runs once, after every sweep point succeeded.

use crate::svg::render_svg;
use std::path::{Path, PathBuf};
use sweepbench_core::{ResultSeries, SweepError};

/// Where the chart lands when nothing else is configured
pub const DEFAULT_CHART_PATH: &str = "performance.svg";

/// Consumes a finalized series and persists a chart
pub trait ChartRenderer {
    /// Render `series`. Fails with [`SweepError::RenderFailure`] when the output cannot be written.
    fn render(&mut self, series: &ResultSeries) -> Result<(), SweepError>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for &mut R {
    fn render(&mut self, series: &ResultSeries) -> Result<(), SweepError> {
        (**self).render(series)
    }
}

/// Labels, color and canvas size of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Chart title
    pub title: String,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// Color of the data line and markers (any SVG color)
    pub line_color: String,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Performance en gigaflops".to_string(),
            x_label: "STENCIL_SIZE_X = STENCIL_SIZE_Y".to_string(),
            y_label: "gflops".to_string(),
            line_color: "green".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Writes the chart as an SVG file, replacing any existing file
#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    path: PathBuf,
    style: ChartStyle,
}

impl SvgChartRenderer {
    /// Renderer writing to `path` with the default style
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            style: ChartStyle::default(),
        }
    }

    /// Replace the style
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current style
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_PATH)
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&mut self, series: &ResultSeries) -> Result<(), SweepError> {
        let document = render_svg(series, &self.style);

        std::fs::write(&self.path, document.as_bytes()).map_err(|source| {
            SweepError::RenderFailure {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::info!(
            path = %self.path.display(),
            points = series.len(),
            bytes = document.len(),
            "chart written"
        );
        Ok(())
    }
}
