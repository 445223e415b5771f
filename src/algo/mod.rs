//! Search engines and the stepping contract.
//!
//! Both algorithms are pull-based stepping engines: construct one over the
//! session's array and a target, then call `step` until it reports
//! completion. Engines never render and never sleep — they mutate bar
//! flags, append trace records, and emit `StepEvent`s through a
//! `StepObserver`. Any frontend driving the same engine over the same
//! array observes the same state sequence.
//!
//! Each algorithmic iteration splits into two phases: a *visit* phase that
//! marks the examined bar active, and a *resolve* phase that compares and
//! marks the outcome. The driver paces between the two, which is the one
//! well-defined suspension point per iteration.

pub mod binary;
pub mod linear;
pub mod sorted;

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::bars::BarState;
use crate::trace::SearchTrace;

pub use binary::BinarySearch;
pub use linear::LinearSearch;
pub use sorted::{is_sorted, sort_direction, SortDirection};

/// Which search algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Walk indices in order.
    Linear,
    /// Halve a sorted range per iteration.
    Binary,
}

impl SearchKind {
    /// Parse from a CLI token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "linear" => Some(Self::Linear),
            "binary" => Some(Self::Binary),
            _ => None,
        }
    }

    /// Reported complexity of this algorithm.
    #[must_use]
    pub const fn complexity(self) -> ComplexityLabel {
        match self {
            Self::Linear => ComplexityLabel::new("O(n)", "O(1)"),
            Self::Binary => ComplexityLabel::new("O(log n)", "O(1)"),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

/// Reported time/space complexity of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityLabel {
    /// Time complexity, e.g. "O(n)".
    #[serde(skip_deserializing)]
    pub time: &'static str,
    /// Auxiliary space complexity, e.g. "O(1)".
    #[serde(skip_deserializing)]
    pub space: &'static str,
}

impl ComplexityLabel {
    /// Create a label from time and space strings.
    #[must_use]
    pub const fn new(time: &'static str, space: &'static str) -> Self {
        Self { time, space }
    }
}

impl fmt::Display for ComplexityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time Complexity: {}, Space Complexity: {}",
            self.time, self.space
        )
    }
}

/// Terminal status of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SearchStatus {
    /// The target was found at `index`.
    Found {
        /// Match site.
        index: usize,
    },
    /// The array was exhausted without a match.
    NotFound,
    /// Binary search precondition failed; no steps were performed.
    NotSorted,
}

impl SearchStatus {
    /// True if the target was found.
    #[must_use]
    pub const fn found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { index } => write!(f, "found at index {index}"),
            Self::NotFound => write!(f, "not found"),
            Self::NotSorted => write!(f, "array not sorted"),
        }
    }
}

/// Final result of a completed search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Algorithm that ran.
    pub kind: SearchKind,
    /// Terminal status.
    pub status: SearchStatus,
    /// Target value searched for.
    pub target: f64,
    /// Number of value comparisons performed.
    pub comparisons: u64,
    /// Step log of the run.
    pub trace: SearchTrace,
    /// Reported complexity label.
    pub complexity: ComplexityLabel,
}

impl SearchOutcome {
    /// True if the target was found.
    #[must_use]
    pub const fn found(&self) -> bool {
        self.status.found()
    }
}

/// One visual transition emitted by an engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum StepEvent {
    /// An index was marked active for examination.
    Visit {
        /// 1-based iteration number.
        iteration: u64,
        /// Index under examination.
        index: usize,
        /// Value at that index.
        value: f64,
    },
    /// The examined index did not match.
    Mismatch {
        /// Rejected index.
        index: usize,
    },
    /// The target matched.
    Found {
        /// Match site.
        index: usize,
    },
    /// Binary search eliminated an inclusive index range.
    Exclude {
        /// First excluded index.
        lo: usize,
        /// Last excluded index.
        hi: usize,
    },
    /// Binary search refused to run over an unsorted array.
    NotSorted,
    /// The search space was exhausted without a match.
    Exhausted,
}

/// Receiver for step events.
///
/// Called after the engine has applied the event's bar mutations, so
/// `bars` reflects the state the event describes.
pub trait StepObserver {
    /// Observe one step transition.
    fn on_step(&mut self, event: &StepEvent, bars: &[BarState]);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn on_step(&mut self, _event: &StepEvent, _bars: &[BarState]) {}
}

/// Observer that records every event, for tests and trace inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectObserver {
    /// Events in emission order.
    pub events: Vec<StepEvent>,
}

impl CollectObserver {
    /// Create an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl StepObserver for CollectObserver {
    fn on_step(&mut self, event: &StepEvent, _bars: &[BarState]) {
        self.events.push(*event);
    }
}

/// Adapter turning a closure into an observer.
#[derive(Debug, Clone, Copy)]
pub struct FnObserver<F>(pub F);

impl<F> StepObserver for FnObserver<F>
where
    F: FnMut(&StepEvent, &[BarState]),
{
    fn on_step(&mut self, event: &StepEvent, bars: &[BarState]) {
        (self.0)(event, bars);
    }
}

/// Pacing policy between the visit and resolve phases of an iteration.
///
/// Classroom demos pause 500 ms per iteration so the active bar can be
/// seen; the delay is an injected parameter and defaults to none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// No suspension (library, tests, tick-driven frontends).
    #[default]
    None,
    /// Sleep for a fixed interval at each pacing point.
    Fixed(Duration),
}

impl Pacing {
    /// The classroom default: 500 ms per iteration.
    #[must_use]
    pub const fn classroom() -> Self {
        Self::Fixed(Duration::from_millis(500))
    }

    /// Pacing from a millisecond count; zero means none.
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Self::None
        } else {
            Self::Fixed(Duration::from_millis(ms))
        }
    }

    /// Suspend for the configured interval.
    pub fn pause(&self) {
        if let Self::Fixed(delay) = self {
            std::thread::sleep(*delay);
        }
    }
}

/// Mutable state an engine steps against.
pub struct StepContext<'a> {
    /// The array being searched. Never mutated by engines.
    pub values: &'a [f64],
    /// Bar flags, parallel to `values`.
    pub bars: &'a mut [BarState],
    /// Step log for the run.
    pub trace: &'a mut SearchTrace,
    /// Event receiver.
    pub observer: &'a mut dyn StepObserver,
}

impl StepContext<'_> {
    /// Notify the observer of an applied transition.
    pub fn emit(&mut self, event: StepEvent) {
        self.observer.on_step(&event, self.bars);
    }
}

/// Result of advancing an engine by one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A bar was marked active; pace here so the state can be observed.
    Observing,
    /// Internal progress; step again immediately.
    Progress,
    /// The run is complete.
    Complete(SearchStatus),
}

/// A pull-based search engine.
pub trait SearchEngine {
    /// Which algorithm this engine implements.
    fn kind(&self) -> SearchKind;

    /// Advance by one phase.
    ///
    /// Calling `step` after completion returns the terminal status again
    /// without further mutation.
    fn step(&mut self, cx: &mut StepContext<'_>) -> StepOutcome;

    /// Terminal status, once complete.
    fn status(&self) -> Option<SearchStatus>;

    /// Number of value comparisons performed so far.
    fn comparisons(&self) -> u64;

    /// Target value this engine searches for.
    fn target(&self) -> f64;

    /// True once the run has reached a terminal status.
    fn is_complete(&self) -> bool {
        self.status().is_some()
    }
}

/// Construct the engine for a search kind.
#[must_use]
pub fn engine_for(kind: SearchKind, values: &[f64], target: f64) -> Box<dyn SearchEngine> {
    match kind {
        SearchKind::Linear => Box::new(LinearSearch::new(target)),
        SearchKind::Binary => Box::new(BinarySearch::new(values, target)),
    }
}
