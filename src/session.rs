//! Search session: the context object owning all run state.
//!
//! A `SearchSession` is the explicit owner of the array, the bar flags,
//! and the trace; nothing lives in global state. Exactly one
//! search may be in flight at a time; starting another, or replacing the
//! array mid-run, is a typed error rather than undefined behavior.
//!
//! Two driving styles:
//! - `search` runs an algorithm to completion, applying a pacing policy at
//!   each observation point (the CLI path);
//! - `begin` + `step` advance one phase per call (the TUI tick path).

use crate::algo::{
    engine_for, Pacing, SearchEngine, SearchKind, SearchOutcome, StepContext,
    StepObserver, StepOutcome,
};
use crate::bars::{clear_all, BarState};
use crate::error::{VizError, VizResult};
use crate::rng::VizRng;
use crate::trace::SearchTrace;

/// Validate candidate array values: non-empty, all finite.
///
/// # Errors
///
/// Returns `EmptyArray` or `NonFiniteValue` without mutating anything.
pub fn validate_values(values: &[f64]) -> VizResult<()> {
    if values.is_empty() {
        return Err(VizError::EmptyArray);
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(VizError::NonFiniteValue { index });
    }
    Ok(())
}

/// Parse a comma-separated list of numbers, e.g. `"5, 3, 8, 1"`.
///
/// # Errors
///
/// Returns `EmptyArray` for a blank string and `InvalidNumber` for any
/// entry that does not parse.
pub fn parse_array(text: &str) -> VizResult<Vec<f64>> {
    let entries: Vec<&str> = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if entries.is_empty() {
        return Err(VizError::EmptyArray);
    }
    entries
        .iter()
        .map(|entry| {
            entry
                .parse::<f64>()
                .map_err(|_| VizError::invalid_number(*entry))
        })
        .collect()
}

/// Result of advancing an in-flight search by one phase.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStep {
    /// A bar was marked active; observe (and pace) before stepping again.
    Observing,
    /// Internal progress; step again.
    Progress,
    /// The run completed with this outcome.
    Complete(SearchOutcome),
}

/// Owner of the array, bar states, and trace for one visualization.
#[derive(Default)]
pub struct SearchSession {
    values: Vec<f64>,
    bars: Vec<BarState>,
    trace: SearchTrace,
    run: Option<Box<dyn SearchEngine>>,
    last_outcome: Option<SearchOutcome>,
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("values", &self.values)
            .field("bars", &self.bars)
            .field("trace", &self.trace)
            .field("in_flight", &self.run.is_some())
            .finish()
    }
}

impl SearchSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current array.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Bar states, parallel to `values`.
    #[must_use]
    pub fn bars(&self) -> &[BarState] {
        &self.bars
    }

    /// Trace of the current or most recent run.
    #[must_use]
    pub const fn trace(&self) -> &SearchTrace {
        &self.trace
    }

    /// Outcome of the most recently completed run.
    #[must_use]
    pub const fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    /// True if no array has been supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Array length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True while a search is in flight.
    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.run.is_some()
    }

    /// Replace the array. Bars are rebuilt and the trace cleared.
    ///
    /// # Errors
    ///
    /// Rejects empty input, non-finite values, and calls made while a
    /// search is in flight; the session is unchanged on error.
    pub fn set_array(&mut self, values: Vec<f64>) -> VizResult<()> {
        if self.in_flight() {
            return Err(VizError::SearchInProgress);
        }
        validate_values(&values)?;
        self.bars = vec![BarState::default(); values.len()];
        self.values = values;
        self.trace.clear();
        self.last_outcome = None;
        Ok(())
    }

    /// Replace the array with seeded random values in `[1, max_value]`.
    ///
    /// # Errors
    ///
    /// Rejects `len == 0` and calls made while a search is in flight.
    pub fn generate_array(&mut self, len: usize, max_value: u32, seed: u64) -> VizResult<()> {
        let mut rng = VizRng::new(seed);
        self.set_array(rng.gen_values(len, max_value))
    }

    /// Clear array, bars, and trace back to the initial empty state.
    ///
    /// Also aborts any in-flight run. Idempotent.
    pub fn reset(&mut self) {
        self.run = None;
        self.values.clear();
        self.bars.clear();
        self.trace.clear();
        self.last_outcome = None;
    }

    /// Start a step-driven search.
    ///
    /// Bar flags and the trace are cleared first (the array is not
    /// touched). Drive the run with `step` until it completes.
    ///
    /// # Errors
    ///
    /// Returns `SearchInProgress` if a run is already in flight.
    pub fn begin(&mut self, kind: SearchKind, target: f64) -> VizResult<()> {
        if self.in_flight() {
            return Err(VizError::SearchInProgress);
        }
        clear_all(&mut self.bars);
        self.trace.clear();
        self.last_outcome = None;
        self.run = Some(engine_for(kind, &self.values, target));
        Ok(())
    }

    /// Abandon the in-flight run, if any, releasing the guard.
    ///
    /// Bars keep their last state until the next search or reset.
    pub fn abort(&mut self) {
        self.run = None;
    }

    /// Advance the in-flight run by one phase.
    ///
    /// # Errors
    ///
    /// Returns `Config` error if no run is in flight.
    pub fn step(&mut self, observer: &mut dyn StepObserver) -> VizResult<SessionStep> {
        let Some(engine) = self.run.as_mut() else {
            return Err(VizError::config("no search in flight; call begin first"));
        };
        let mut cx = StepContext {
            values: &self.values,
            bars: &mut self.bars,
            trace: &mut self.trace,
            observer,
        };
        match engine.step(&mut cx) {
            StepOutcome::Observing => Ok(SessionStep::Observing),
            StepOutcome::Progress => Ok(SessionStep::Progress),
            StepOutcome::Complete(status) => {
                let outcome = SearchOutcome {
                    kind: engine.kind(),
                    status,
                    target: engine.target(),
                    comparisons: engine.comparisons(),
                    trace: self.trace.clone(),
                    complexity: engine.kind().complexity(),
                };
                self.run = None;
                self.last_outcome = Some(outcome.clone());
                Ok(SessionStep::Complete(outcome))
            }
        }
    }

    /// Run a search to completion.
    ///
    /// Applies `pacing` at each observation point so the active bar stays
    /// visible for the configured interval, exactly one suspension per
    /// iteration.
    ///
    /// # Errors
    ///
    /// Returns `SearchInProgress` if a run is already in flight.
    pub fn search(
        &mut self,
        kind: SearchKind,
        target: f64,
        pacing: Pacing,
        observer: &mut dyn StepObserver,
    ) -> VizResult<SearchOutcome> {
        self.begin(kind, target)?;
        loop {
            match self.step(observer)? {
                SessionStep::Observing => pacing.pause(),
                SessionStep::Progress => {}
                SessionStep::Complete(outcome) => return Ok(outcome),
            }
        }
    }

    /// Partition check: after a completed run every bar is in exactly one
    /// of the default, found, or checked states, with no stray `active`.
    #[must_use]
    pub fn bars_settled(&self) -> bool {
        self.bars.iter().all(|b| {
            !b.active && (u32::from(b.found) + u32::from(b.checked.is_some()) <= 1)
        })
    }
}
