//! Linear search stepping engine.
//!
//! Walks indices in order. Each iteration visits one index (marks it
//! active), then resolves it: a match becomes `found` and terminates; a
//! mismatch becomes `checked` and logs a trace record. Bars past a match
//! point stay in the default state, so the terminal display partitions
//! cleanly into found / checked / untouched.

use crate::algo::{SearchEngine, SearchKind, SearchStatus, StepContext, StepEvent, StepOutcome};
use crate::bars::CheckedReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Visit,
    Resolve,
}

/// Linear search over an arbitrary array.
#[derive(Debug, Clone)]
pub struct LinearSearch {
    target: f64,
    index: usize,
    phase: Phase,
    comparisons: u64,
    status: Option<SearchStatus>,
}

impl LinearSearch {
    /// Create an engine searching for `target`.
    #[must_use]
    pub const fn new(target: f64) -> Self {
        Self {
            target,
            index: 0,
            phase: Phase::Visit,
            comparisons: 0,
            status: None,
        }
    }

    /// Index the engine will examine (or just examined).
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.index
    }
}

impl SearchEngine for LinearSearch {
    fn kind(&self) -> SearchKind {
        SearchKind::Linear
    }

    fn step(&mut self, cx: &mut StepContext<'_>) -> StepOutcome {
        if let Some(status) = self.status {
            return StepOutcome::Complete(status);
        }

        match self.phase {
            Phase::Visit => {
                if self.index >= cx.values.len() {
                    let status = SearchStatus::NotFound;
                    self.status = Some(status);
                    cx.emit(StepEvent::Exhausted);
                    return StepOutcome::Complete(status);
                }
                let index = self.index;
                cx.bars[index].set_active();
                cx.emit(StepEvent::Visit {
                    iteration: index as u64 + 1,
                    index,
                    value: cx.values[index],
                });
                self.phase = Phase::Resolve;
                StepOutcome::Observing
            }
            Phase::Resolve => {
                let index = self.index;
                let value = cx.values[index];
                self.comparisons += 1;

                if value == self.target {
                    let status = SearchStatus::Found { index };
                    self.status = Some(status);
                    cx.bars[index].mark_found();
                    cx.emit(StepEvent::Found { index });
                    return StepOutcome::Complete(status);
                }

                cx.bars[index].mark_checked(CheckedReason::Examined);
                // mismatches are logged; the found step is not
                cx.trace.push(index as u64 + 1, index, value);
                cx.emit(StepEvent::Mismatch { index });
                self.index += 1;
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
