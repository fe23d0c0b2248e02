#![warn(missing_docs)]
//! SweepBench Core - Sweep Model
//!
//! This crate holds the pure parts of a benchmark sweep:
//! - `SweepPlan` for the ordered sequence of problem sizes
//! - `extract_measurement` for turning raw kernel output into Gflops
//! - `ResultSeriesBuilder` / `ResultSeries` for accumulating sweep points
//! - `SweepError`, the error taxonomy shared by every stage
//!
//! Nothing in here spawns processes or touches the filesystem.

mod error;
mod extract;
mod plan;
mod series;

pub use error::{ParseFailureReason, ProcessFailureReason, SweepError};
pub use extract::{
    MARKER_CHARS, MEASUREMENT_LINE, MEASUREMENT_TOKEN, MFLOPS_PER_GFLOPS, extract_measurement,
};
pub use plan::{SweepPlan, SweepPlanIter};
pub use series::{ResultSeries, ResultSeriesBuilder, SweepPoint};
