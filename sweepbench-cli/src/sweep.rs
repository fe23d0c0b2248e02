//! Sweep Execution
//!
//! Drives one benchmark sweep from plan to chart.
//!
//! ## Data Flow
//!
//! ```text
//! SweepPlan ──► for each dimension (strictly sequential)
//!                 │
//!                 ├─ KernelInvoker::invoke      (blocks on the child process)
//!                 ├─ extract_measurement        (4th line → Gflops)
//!                 ├─ ResultSeriesBuilder::record
//!                 └─ SweepObserver::on_point
//!                        │
//!                        ▼
//!               ResultSeries ──► ChartRenderer::render (once, on success)
//! ```
//!
//! ## States
//!
//! `NotStarted → Running → Completed`, or `Running → Aborted` on the first
//! process or parse failure. An aborted sweep never reaches the renderer.

use crate::invoker::KernelInvoker;
use sweepbench_core::{
    ResultSeries, ResultSeriesBuilder, SweepError, SweepPlan, SweepPoint, extract_measurement,
};
use sweepbench_report::ChartRenderer;
use thiserror::Error;

/// Lifecycle of a single sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepState {
    /// No sweep point processed yet
    NotStarted,
    /// Processing sweep points
    Running,
    /// Every sweep point succeeded
    Completed,
    /// A sweep point failed; no chart is produced
    Aborted,
}

impl SweepState {
    /// Whether no further transition is possible
    pub fn is_terminal(self) -> bool {
        matches!(self, SweepState::Completed | SweepState::Aborted)
    }

    fn can_transition_to(self, next: SweepState) -> bool {
        matches!(
            (self, next),
            (SweepState::NotStarted, SweepState::Running)
                | (SweepState::NotStarted, SweepState::Completed)
                | (SweepState::Running, SweepState::Completed)
                | (SweepState::Running, SweepState::Aborted)
        )
    }
}

/// Receives sweep progress. Purely informational; the sweep never depends on it.
pub trait SweepObserver {
    /// Called once per successfully processed sweep point, in order
    fn on_point(&mut self, point: &SweepPoint);

    /// Called on every state transition
    fn on_state(&mut self, _state: SweepState) {}
}

impl<F> SweepObserver for F
where
    F: FnMut(&SweepPoint),
{
    fn on_point(&mut self, point: &SweepPoint) {
        self(point)
    }
}

/// A sweep that stopped early, with the points completed before the failure
#[derive(Debug, Error)]
#[error("sweep aborted after {} completed point(s)", completed.len())]
pub struct SweepFailure {
    /// Points that succeeded before the failure, in sweep order
    pub completed: ResultSeries,
    /// What stopped the sweep
    #[source]
    pub error: SweepError,
}

/// One pass over a sweep plan
pub struct Sweep<I> {
    plan: SweepPlan,
    invoker: I,
    builder: ResultSeriesBuilder,
    state: SweepState,
}

impl<I: KernelInvoker> Sweep<I> {
    /// Prepare a sweep; nothing runs until [`Sweep::run`]
    pub fn new(plan: SweepPlan, invoker: I) -> Self {
        Self {
            plan,
            builder: ResultSeriesBuilder::with_capacity(plan.len()),
            invoker,
            state: SweepState::NotStarted,
        }
    }

    /// Current state
    pub fn state(&self) -> SweepState {
        self.state
    }

    /// Process every sweep point in order, stopping at the first failure.
    pub fn run(mut self, observer: &mut dyn SweepObserver) -> Result<ResultSeries, SweepFailure> {
        for dimension in self.plan.iter() {
            if self.state == SweepState::NotStarted {
                self.transition(SweepState::Running, observer);
            }

            match self.process_point(dimension) {
                Ok(point) => observer.on_point(&point),
                Err(error) => {
                    tracing::error!(dimension, error = %error, "sweep aborted");
                    self.transition(SweepState::Aborted, observer);
                    return Err(SweepFailure {
                        completed: self.builder.finish(),
                        error,
                    });
                }
            }
        }

        self.transition(SweepState::Completed, observer);
        Ok(self.builder.finish())
    }

    fn process_point(&mut self, dimension: u32) -> Result<SweepPoint, SweepError> {
        let output = self.invoker.invoke(dimension)?;
        let measurement = extract_measurement(&output).map_err(|e| e.at_dimension(dimension))?;
        tracing::debug!(dimension, gflops = measurement, "measurement extracted");
        Ok(self.builder.record(dimension, measurement))
    }

    fn transition(&mut self, next: SweepState, observer: &mut dyn SweepObserver) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid sweep transition {:?} -> {:?}",
            self.state,
            next
        );
        self.state = next;
        observer.on_state(next);
    }
}

/// Sweep plus chart: runs the plan, then renders exactly once on success
pub struct Harness<I, R> {
    plan: SweepPlan,
    invoker: I,
    renderer: R,
}

impl<I: KernelInvoker, R: ChartRenderer> Harness<I, R> {
    /// Create a harness
    pub fn new(plan: SweepPlan, invoker: I, renderer: R) -> Self {
        Self {
            plan,
            invoker,
            renderer,
        }
    }

    /// Kernel invoker
    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Chart renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run the full sweep and render the chart.
    ///
    /// Process and parse failures abort before the renderer is touched.
    /// A render failure is reported with the complete series attached.
    pub fn run(&mut self, observer: &mut dyn SweepObserver) -> Result<ResultSeries, SweepFailure> {
        tracing::info!(
            start = self.plan.start,
            bound = self.plan.bound,
            step = self.plan.step,
            points = self.plan.len(),
            "starting sweep"
        );

        let series = Sweep::new(self.plan, &mut self.invoker).run(observer)?;

        if let Err(error) = self.renderer.render(&series) {
            return Err(SweepFailure {
                completed: series,
                error,
            });
        }

        tracing::info!(points = series.len(), "sweep completed");
        Ok(series)
    }
}
