//! Records the swaps a Lomuto quicksort performs without touching live data.

use std::cmp::Ordering;

use shared::domain::{SortDirection, SwapStep};

/// Returns every swap an in-place Lomuto quicksort makes on a private copy of
/// `values`, in execution order.
///
/// Swaps of a position with itself are never recorded. In particular the
/// pivot placement at the end of a partition is skipped when the pivot is
/// already in place, so an already-sorted input plans zero steps.
pub fn plan(values: &[u32], direction: SortDirection) -> Vec<SwapStep> {
    let mut planner = Planner {
        snapshot: values.to_vec(),
        direction,
        steps: Vec::new(),
    };
    if !planner.snapshot.is_empty() {
        planner.quicksort(0, planner.snapshot.len() - 1);
    }
    tracing::debug!(
        len = values.len(),
        ?direction,
        steps = planner.steps.len(),
        "planned quicksort"
    );
    planner.steps
}

/// Replays a plan onto `values` in order.
pub fn apply_plan<T>(values: &mut [T], steps: &[SwapStep]) {
    for step in steps {
        step.apply(values);
    }
}

struct Planner {
    snapshot: Vec<u32>,
    direction: SortDirection,
    steps: Vec<SwapStep>,
}

impl Planner {
    fn quicksort(&mut self, lo: usize, hi: usize) {
        if lo >= hi {
            return;
        }
        let p = self.partition(lo, hi);
        if p > lo {
            self.quicksort(lo, p - 1);
        }
        self.quicksort(p + 1, hi);
    }

    // Returns the final pivot position. `boundary` is one past the Lomuto
    // `i`, which keeps it unsigned when `lo == 0`.
    fn partition(&mut self, lo: usize, hi: usize) -> usize {
        let pivot = self.snapshot[hi];
        let mut boundary = lo;

        for j in lo..hi {
            if self.direction.compare(self.snapshot[j], pivot) != Ordering::Greater {
                self.record(boundary, j);
                boundary += 1;
            }
        }

        self.record(boundary, hi);
        boundary
    }

    fn record(&mut self, i: usize, j: usize) {
        if let Some(step) = SwapStep::new(i, j) {
            step.apply(&mut self.snapshot);
            self.steps.push(step);
        }
    }
}

#[cfg(test)]
#[path = "tests/planner_tests.rs"]
mod tests;
