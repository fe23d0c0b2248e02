#![warn(missing_docs)]
//! SweepBench Report - Chart Rendering
//!
//! Turns a finalized `ResultSeries` into a line chart on disk.
//! The chart is a standalone SVG document: dimension on the x-axis,
//! Gflops on the y-axis, one fixed line color.

mod chart;
mod svg;

pub use chart::{ChartRenderer, ChartStyle, DEFAULT_CHART_PATH, SvgChartRenderer};
pub use svg::render_svg;
