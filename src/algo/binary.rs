//! Binary search stepping engine.
//!
//! Precondition: the array passes the sortedness check. An unsorted array
//! makes the engine complete immediately with `NotSorted`, performing no
//! steps and touching no bars.
//!
//! Direction is detected once (first versus last element) and decides
//! which half is eliminated on each mismatch. Eliminated halves are marked
//! checked/excluded wholesale; rejected midpoints are marked
//! checked/examined. Every examined midpoint is logged, including the one
//! that matches.

use crate::algo::sorted::{sort_direction, SortDirection};
use crate::algo::{SearchEngine, SearchKind, SearchStatus, StepContext, StepEvent, StepOutcome};
use crate::bars::{clear_active, CheckedReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    RejectUnsorted,
    Visit,
    Resolve,
}

/// Binary search over a sorted array, ascending or descending.
#[derive(Debug, Clone)]
pub struct BinarySearch {
    target: f64,
    direction: Option<SortDirection>,
    /// Live inclusive search window, `None` once exhausted.
    window: Option<(usize, usize)>,
    phase: Phase,
    iteration: u64,
    comparisons: u64,
    status: Option<SearchStatus>,
}

impl BinarySearch {
    /// Create an engine searching `values` for `target`.
    ///
    /// Sortedness and direction are probed here, against the same array
    /// the engine will be stepped with.
    #[must_use]
    pub fn new(values: &[f64], target: f64) -> Self {
        let direction = sort_direction(values);
        let (phase, window) = match direction {
            None => (Phase::RejectUnsorted, None),
            Some(_) if values.is_empty() => (Phase::Visit, None),
            Some(_) => (Phase::Visit, Some((0, values.len() - 1))),
        };
        Self {
            target,
            direction,
            window,
            phase,
            iteration: 0,
            comparisons: 0,
            status: None,
        }
    }

    /// Detected sort direction, `None` if the array is unsorted.
    #[must_use]
    pub const fn direction(&self) -> Option<SortDirection> {
        self.direction
    }

    /// Current inclusive search window.
    #[must_use]
    pub const fn window(&self) -> Option<(usize, usize)> {
        self.window
    }

    fn exhaust(&mut self, cx: &mut StepContext<'_>) -> StepOutcome {
        // cleanup pass: everything outside the final window is excluded
        for bar in cx.bars.iter_mut() {
            if !bar.found && bar.checked.is_none() {
                bar.mark_checked(CheckedReason::Excluded);
            }
        }
        let status = SearchStatus::NotFound;
        self.status = Some(status);
        cx.emit(StepEvent::Exhausted);
        StepOutcome::Complete(status)
    }
}

impl SearchEngine for BinarySearch {
    fn kind(&self) -> SearchKind {
        SearchKind::Binary
    }

    fn step(&mut self, cx: &mut StepContext<'_>) -> StepOutcome {
        if let Some(status) = self.status {
            return StepOutcome::Complete(status);
        }

        match self.phase {
            Phase::RejectUnsorted => {
                let status = SearchStatus::NotSorted;
                self.status = Some(status);
                cx.emit(StepEvent::NotSorted);
                StepOutcome::Complete(status)
            }
            Phase::Visit => {
                let Some((lo, hi)) = self.window else {
                    return self.exhaust(cx);
                };
                let mid = (lo + hi) / 2;
                clear_active(cx.bars);
                cx.bars[mid].set_active();
                self.iteration += 1;
                cx.trace.push(self.iteration, mid, cx.values[mid]);
                cx.emit(StepEvent::Visit {
                    iteration: self.iteration,
                    index: mid,
                    value: cx.values[mid],
                });
                self.phase = Phase::Resolve;
                StepOutcome::Observing
            }
            Phase::Resolve => {
                // window is present: Resolve is only entered from a visited window
                let Some((lo, hi)) = self.window else {
                    return self.exhaust(cx);
                };
                let mid = (lo + hi) / 2;
                let value = cx.values[mid];
                self.comparisons += 1;

                if value == self.target {
                    let status = SearchStatus::Found { index: mid };
                    self.status = Some(status);
                    cx.bars[mid].mark_found();
                    cx.emit(StepEvent::Found { index: mid });
                    return StepOutcome::Complete(status);
                }

                let go_right = match self.direction {
                    Some(SortDirection::Ascending) => value < self.target,
                    Some(SortDirection::Descending) => value > self.target,
                    None => false,
                };

                cx.bars[mid].mark_checked(CheckedReason::Examined);
                if go_right {
                    // target can only be right of mid: drop [lo, mid]
                    if mid > lo {
                        for bar in &mut cx.bars[lo..mid] {
                            bar.mark_checked(CheckedReason::Excluded);
                        }
                        cx.emit(StepEvent::Exclude { lo, hi: mid - 1 });
                    }
                    self.window = if mid < hi { Some((mid + 1, hi)) } else { None };
                } else {
                    // target can only be left of mid: drop [mid, hi]
                    if mid < hi {
                        for bar in &mut cx.bars[mid + 1..=hi] {
                            bar.mark_checked(CheckedReason::Excluded);
                        }
                        cx.emit(StepEvent::Exclude { lo: mid + 1, hi });
                    }
                    self.window = if mid > lo { Some((lo, mid - 1)) } else { None };
                }

                self.phase = Phase::Visit;
                StepOutcome::Progress
            }
        }
    }

    fn status(&self) -> Option<SearchStatus> {
        self.status
    }

    fn comparisons(&self) -> u64 {
        self.comparisons
    }

    fn target(&self) -> f64 {
        self.target
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::algo::{CollectObserver, NullObserver, StepObserver};
    use crate::bars::BarState;
    use crate::trace::SearchTrace;

    fn run_with(
        values: &[f64],
        target: f64,
        observer: &mut dyn StepObserver,
    ) -> (BinarySearch, SearchTrace, Vec<BarState>) {
        let mut engine = BinarySearch::new(values, target);
        let mut bars = vec![BarState::default(); values.len()];
        let mut trace = SearchTrace::new();
        loop {
            let mut cx = StepContext {
                values,
                bars: &mut bars,
                trace: &mut trace,
                observer: &mut *observer,
            };
            if let StepOutcome::Complete(_) = engine.step(&mut cx) {
                break;
            }
        }
        (engine, trace, bars)
    }

    fn run(values: &[f64], target: f64) -> (BinarySearch, SearchTrace, Vec<BarState>) {
        run_with(values, target, &mut NullObserver)
    }

    #[test]
    fn test_ascending_found_first_probe() {
        // classroom walkthrough: [1,3,5,8,9] target 5 found at mid=2 on iteration 1
        let (engine, trace, bars) = run(&[1.0, 3.0, 5.0, 8.0, 9.0], 5.0);
        assert_eq!(engine.status(), Some(SearchStatus::Found { index: 2 }));
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.records()[0].iteration, 1);
        assert_eq!(trace.records()[0].index, 2);
        assert!(bars[2].found);
        assert!(!bars[2].active);
    }

    #[test]
    fn test_descending_direction_detected() {
        // classroom walkthrough: [9,8,5,3,1] target 5, descending since 9 > 1
        let (engine, _, _) = run(&[9.0, 8.0, 5.0, 3.0, 1.0], 5.0);
        assert_eq!(engine.direction(), Some(SortDirection::Descending));
        assert_eq!(engine.status(), Some(SearchStatus::Found { index: 2 }));
    }

    #[test]
    fn test_unsorted_rejected_without_steps() {
        // classroom walkthrough: [3,1,2] fails both monotone checks
        let mut observer = CollectObserver::new();
        let (engine, trace, bars) = run_with(&[3.0, 1.0, 2.0], 2.0, &mut observer);
        assert_eq!(engine.status(), Some(SearchStatus::NotSorted));
        assert!(trace.is_empty());
        assert_eq!(engine.comparisons(), 0);
        assert!(bars.iter().all(BarState::is_default));
        assert_eq!(observer.events, vec![StepEvent::NotSorted]);
    }

    #[test]
    fn test_ascending_narrows_right() {
        let (engine, trace, bars) = run(&[1.0, 3.0, 5.0, 8.0, 9.0], 8.0);
        assert_eq!(engine.status(), Some(SearchStatus::Found { index: 3 }));
        // first probe mid=2 rejected, left half excluded
        assert_eq!(bars[2].checked, Some(CheckedReason::Examined));
        assert_eq!(bars[0].checked, Some(CheckedReason::Excluded));
        assert_eq!(bars[1].checked, Some(CheckedReason::Excluded));
        assert_eq!(trace.records()[0].index, 2);
    }

    #[test]
    fn test_not_found_marks_everything() {
        let (engine, _, bars) = run(&[1.0, 3.0, 5.0, 8.0, 9.0], 4.0);
        assert_eq!(engine.status(), Some(SearchStatus::NotFound));
        assert!(bars.iter().all(|b| b.checked.is_some()));
        assert!(bars.iter().all(|b| !b.active && !b.found));
    }

    #[test]
    fn test_trace_length_logarithmic() {
        let values: Vec<f64> = (0..1000).map(f64::from).collect();
        for target in [0.0, 499.0, 999.0, 1000.5] {
            let (_, trace, _) = run(&values, target);
            let bound = ((values.len() + 1) as f64).log2().ceil() as usize;
            assert!(
                trace.len() <= bound,
                "trace {} exceeds bound {bound}",
                trace.len()
            );
        }
    }

    #[test]
    fn test_empty_array() {
        let mut observer = CollectObserver::new();
        let (engine, trace, _) = run_with(&[], 1.0, &mut observer);
        assert_eq!(engine.status(), Some(SearchStatus::NotFound));
        assert!(trace.is_empty());
        assert_eq!(engine.comparisons(), 0);
        assert_eq!(observer.events, vec![StepEvent::Exhausted]);
    }

    #[test]
    fn test_singleton_found() {
        let (engine, trace, bars) = run(&[7.0], 7.0);
        assert_eq!(engine.status(), Some(SearchStatus::Found { index: 0 }));
        assert_eq!(trace.len(), 1);
        assert!(bars[0].found);
    }

    #[test]
    fn test_singleton_not_found() {
        let (engine, _, bars) = run(&[7.0], 3.0);
        assert_eq!(engine.status(), Some(SearchStatus::NotFound));
        assert_eq!(bars[0].checked, Some(CheckedReason::Examined));
    }

    #[test]
    fn test_descending_not_found() {
        let (engine, _, bars) = run(&[9.0, 7.0, 4.0, 2.0], 5.0);
        assert_eq!(engine.status(), Some(SearchStatus::NotFound));
        assert!(bars.iter().all(|b| b.checked.is_some()));
    }

    #[test]
    fn test_constant_array_treated_ascending() {
        let (engine, _, _) = run(&[4.0, 4.0, 4.0], 4.0);
        assert_eq!(engine.direction(), Some(SortDirection::Ascending));
        assert!(engine.status().is_some_and(|s| s.found()));
    }

    #[test]
    fn test_exclude_events_report_ranges() {
        let mut observer = CollectObserver::new();
        let _ = run_with(&[1.0, 3.0, 5.0, 8.0, 9.0], 9.0, &mut observer);
        assert!(observer
            .events
            .contains(&StepEvent::Exclude { lo: 0, hi: 1 }));
    }

    #[test]
    fn test_step_after_complete_is_idempotent() {
        let values = [1.0, 2.0];
        let mut engine = BinarySearch::new(&values, 2.0);
        let mut bars = vec![BarState::default(); 2];
        let mut trace = SearchTrace::new();
        let mut observer = NullObserver;
        for _ in 0..10 {
            let mut cx = StepContext {
                values: &values,
                bars: &mut bars,
                trace: &mut trace,
                observer: &mut observer,
            };
            let _ = engine.step(&mut cx);
        }
        assert_eq!(engine.status(), Some(SearchStatus::Found { index: 1 }));
        let n = trace.len();
        assert!(n <= 2);
    }

    #[test]
    fn test_found_agrees_with_contains() {
        let values: Vec<f64> = (0..64).map(|i| f64::from(i) * 2.0).collect();
        for target in [0.0, 2.0, 63.0, 126.0, 127.0] {
            let (engine, _, _) = run(&values, target);
            let expected = values.contains(&target);
            assert_eq!(
                engine.status().is_some_and(|s| s.found()),
                expected,
                "target {target}"
            );
        }
    }
}
