#![warn(missing_docs)]
//! # SweepBench
//!
//! Benchmark sweep harness for external compute kernels.
//!
//! SweepBench runs a kernel executable once per square problem size,
//! reads its throughput from the kernel's own diagnostic output, and charts
//! Gflops against size:
//! - **Fixed sweep**: sizes 20, 60, ..., 780, strictly sequential
//! - **Fail-fast**: a crashing kernel or unreadable output aborts the sweep with no chart
//! - **Typed stages**: invocation, extraction and rendering each return an explicit `Result`
//! - **Observable**: progress is reported through `SweepObserver`, never printed by the core
//!
//! ## Quick Start
//!
//! ```ignore
//! use sweepbench::prelude::*;
//!
//! let mut harness = Harness::new(
//!     SweepPlan::STANDARD,
//!     KernelProcess::new("./stencil"),
//!     SvgChartRenderer::new("performance.svg"),
//! );
//! let series = harness.run(&mut |p: &SweepPoint| println!("{} done", p.dimension()))?;
//! ```

// Re-export core types
pub use sweepbench_core::{
    ParseFailureReason, ProcessFailureReason, ResultSeries, ResultSeriesBuilder, SweepError,
    SweepPlan, SweepPoint, extract_measurement,
};

// Re-export rendering
pub use sweepbench_report::{ChartRenderer, ChartStyle, SvgChartRenderer, render_svg};

// Re-export orchestration
pub use sweepbench_cli::{
    Harness, KernelInvoker, KernelProcess, ProgressObserver, Sweep, SweepConfig, SweepFailure,
    SweepObserver, SweepState,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ChartRenderer, Harness, KernelInvoker, KernelProcess, ResultSeries, SvgChartRenderer,
        SweepError, SweepObserver, SweepPlan, SweepPoint,
    };
}

/// Run the SweepBench CLI.
///
/// Call this from the binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     sweepbench::run()
/// }
/// ```
pub use sweepbench_cli::run;
