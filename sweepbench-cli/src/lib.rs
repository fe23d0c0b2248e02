#![warn(missing_docs)]
//! SweepBench CLI Library
//!
//! Orchestrates a benchmark sweep: launches the kernel once per problem size,
//! extracts the throughput from its output, and renders the collected series.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     sweepbench_cli::run()
//! }
//! ```

mod config;
mod formatting;
mod invoker;
mod progress;
mod sweep;

pub use config::*;
pub use formatting::format_human_summary;
pub use invoker::{DEFAULT_KERNEL, KernelInvoker, KernelProcess};
pub use progress::ProgressObserver;
pub use sweep::{Harness, Sweep, SweepFailure, SweepObserver, SweepState};

use anyhow::Context;
use clap::Parser;
use sweepbench_core::SweepPlan;
use sweepbench_report::SvgChartRenderer;

/// SweepBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sweepbench")]
#[command(
    author,
    version,
    about = "SweepBench - sweep a compute kernel over problem sizes and chart its Gflops"
)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the SweepBench CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` once the chart is written, or the error that aborted the sweep.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SweepBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    // Discover sweep.toml configuration (defaults when absent)
    let config = SweepConfig::discover()?.unwrap_or_default();
    let plan = SweepPlan::STANDARD;

    println!(
        "Sweeping {} over {} sizes ({}..{} step {})...\n",
        config.kernel.program,
        plan.len(),
        plan.start,
        plan.bound,
        plan.step
    );

    let kernel = KernelProcess::new(&config.kernel.program);
    let renderer =
        SvgChartRenderer::new(&config.output.chart_path).with_style(config.chart_style());
    let mut harness = Harness::new(plan, kernel, renderer);
    let mut progress = ProgressObserver::new(plan.len());

    let series = harness.run(&mut progress).with_context(|| {
        format!(
            "benchmark sweep of `{}` did not produce a chart",
            config.kernel.program
        )
    })?;

    print!(
        "{}",
        format_human_summary(&series, harness.renderer().path(), chrono::Utc::now())
    );
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "sweepbench=debug"
    } else {
        "sweepbench=info"
    };
    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["sweepbench", "-v"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["sweepbench"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_sweep_range_flags_are_rejected() {
        assert!(Cli::try_parse_from(["sweepbench", "--start", "10"]).is_err());
        assert!(Cli::try_parse_from(["sweepbench", "780"]).is_err());
    }
}
