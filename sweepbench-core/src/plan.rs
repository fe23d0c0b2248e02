//! Sweep Planner
//!
//! Produces the ordered sequence of problem sizes to benchmark.
//!
//! A plan is `start, start + step, start + 2·step, ...` stopping before `bound`.
//! It is lazy and restartable: iterating a plan never consumes it.

use std::iter::FusedIterator;

/// Arithmetic sweep over square problem sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SweepPlan {
    /// First dimension
    pub start: u32,
    /// Exclusive upper bound
    pub bound: u32,
    /// Distance between consecutive dimensions
    pub step: u32,
}

impl SweepPlan {
    /// The harness' fixed sweep: 20, 60, 100, ..., 780
    pub const STANDARD: SweepPlan = SweepPlan::new(20, 800, 40);

    /// Create a plan. A zero step or `start >= bound` yields an empty plan.
    pub const fn new(start: u32, bound: u32, step: u32) -> Self {
        Self { start, bound, step }
    }

    /// Iterate the dimensions in ascending order
    pub fn iter(&self) -> SweepPlanIter {
        SweepPlanIter {
            next: self.start,
            bound: self.bound,
            step: self.step,
        }
    }

    /// Number of sweep points, `ceil((bound - start) / step)`
    pub fn len(&self) -> usize {
        self.iter().len()
    }

    /// Whether the plan yields no points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl IntoIterator for SweepPlan {
    type Item = u32;
    type IntoIter = SweepPlanIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &SweepPlan {
    type Item = u32;
    type IntoIter = SweepPlanIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the dimensions of a [`SweepPlan`]
#[derive(Debug, Clone)]
pub struct SweepPlanIter {
    next: u32,
    bound: u32,
    step: u32,
}

impl SweepPlanIter {
    fn remaining(&self) -> usize {
        if self.step == 0 || self.next >= self.bound {
            return 0;
        }
        u64::from(self.bound - self.next).div_ceil(u64::from(self.step)) as usize
    }
}

impl Iterator for SweepPlanIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.step == 0 || self.next >= self.bound {
            return None;
        }
        let current = self.next;
        // Saturate at the bound so a step past u32::MAX still terminates
        self.next = current.checked_add(self.step).unwrap_or(self.bound);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for SweepPlanIter {}

impl FusedIterator for SweepPlanIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_plan() {
        let dims: Vec<u32> = SweepPlan::STANDARD.iter().collect();

        assert_eq!(dims.len(), 20);
        assert_eq!(dims.first(), Some(&20));
        assert_eq!(dims.last(), Some(&780));
        assert_eq!(&dims[..4], &[20, 60, 100, 140]);
        assert_eq!(SweepPlan::STANDARD.len(), 20);
    }

    #[test]
    fn test_len_matches_ceil_division() {
        for (start, bound, step) in [(0, 10, 3), (5, 6, 1), (1, 100, 7), (20, 800, 40), (0, 9, 9)] {
            let plan = SweepPlan::new(start, bound, step);
            let dims: Vec<u32> = plan.iter().collect();
            let expected = (bound - start).div_ceil(step) as usize;

            assert_eq!(dims.len(), expected, "plan {:?}", plan);
            assert_eq!(plan.len(), expected);
            assert!(dims.windows(2).all(|w| w[0] < w[1]));
            assert!(dims.iter().all(|d| (start..bound).contains(d)));
        }
    }

    #[test]
    fn test_empty_plans() {
        assert!(SweepPlan::new(10, 10, 1).is_empty());
        assert!(SweepPlan::new(20, 10, 1).is_empty());
        assert!(SweepPlan::new(0, 10, 0).is_empty());
        assert_eq!(SweepPlan::new(0, 10, 0).iter().next(), None);
    }

    #[test]
    fn test_plan_is_restartable() {
        let plan = SweepPlan::STANDARD;
        let first: Vec<u32> = plan.iter().collect();
        let second: Vec<u32> = (&plan).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_step_near_u32_max_terminates() {
        let plan = SweepPlan::new(u32::MAX - 5, u32::MAX, 4);
        let dims: Vec<u32> = plan.iter().collect();
        assert_eq!(dims, vec![u32::MAX - 5, u32::MAX - 1]);
        assert_eq!(plan.len(), 2);
    }
}
