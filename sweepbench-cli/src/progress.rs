//! Console Progress
//!
//! Terminal progress bar driven through [`SweepObserver`]; one tick per
//! completed sweep point.

use crate::sweep::{SweepObserver, SweepState};
use indicatif::{ProgressBar, ProgressStyle};
use sweepbench_core::SweepPoint;

/// Progress bar observer for interactive runs
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    /// Bar sized for `total` sweep points
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }

    /// Hidden bar, for non-interactive use
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Points ticked so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl SweepObserver for ProgressObserver {
    fn on_point(&mut self, point: &SweepPoint) {
        self.bar.set_message(format!(
            "{}x{}: {:.3} gflops",
            point.dimension(),
            point.dimension(),
            point.measurement()
        ));
        self.bar.inc(1);
    }

    fn on_state(&mut self, state: SweepState) {
        match state {
            SweepState::Running => self.bar.set_message("Starting kernel..."),
            SweepState::Completed => self.bar.finish_with_message("Complete"),
            SweepState::Aborted => self.bar.abandon_with_message("Aborted"),
            SweepState::NotStarted => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_point() {
        let mut progress = ProgressObserver::hidden();
        progress.on_state(SweepState::Running);
        progress.on_point(&SweepPoint::new(20, 0.2));
        progress.on_point(&SweepPoint::new(60, 0.6));
        progress.on_state(SweepState::Completed);

        assert_eq!(progress.position(), 2);
    }
}
