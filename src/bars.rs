//! Visual bar state model.
//!
//! One `BarState` per array element, parallel to the array. The search
//! engines mutate these flags step by step; renderers read them. The flag
//! set is the whole visual vocabulary of the system:
//!
//! - `active`: the index currently under examination
//! - `found`: the index where the target matched
//! - `checked`: the index has been ruled out, with the reason recorded
//!
//! A bar with no flags set is in the default (unvisited) state. Engines
//! clear `active` before setting `found` or `checked`, so every bar ends a
//! run in exactly one of: default, found, or checked.

use serde::{Deserialize, Serialize};

/// Why a bar was marked as checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckedReason {
    /// The element was directly compared against the target.
    Examined,
    /// The element was eliminated without comparison (binary half
    /// exclusion or the final cleanup pass).
    Excluded,
}

/// Visual state of a single bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarState {
    /// Currently under examination.
    pub active: bool,
    /// The target matched here.
    pub found: bool,
    /// Ruled out, and why. `None` until the bar is checked.
    pub checked: Option<CheckedReason>,
}

impl BarState {
    /// Reset to the default (unvisited) state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Mark as under examination.
    pub fn set_active(&mut self) {
        self.active = true;
    }

    /// Clear the examination marker.
    pub fn clear_active(&mut self) {
        self.active = false;
    }

    /// Mark as the match site. Clears `active`.
    pub fn mark_found(&mut self) {
        self.active = false;
        self.found = true;
    }

    /// Mark as checked. Clears `active`; the first recorded reason wins.
    pub fn mark_checked(&mut self, reason: CheckedReason) {
        self.active = false;
        if self.checked.is_none() {
            self.checked = Some(reason);
        }
    }

    /// True if no flag is set.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        !self.active && !self.found && self.checked.is_none()
    }

    /// Single-character glyph for compact rendering.
    #[must_use]
    pub const fn glyph(&self) -> char {
        if self.found {
            '✓'
        } else if self.active {
            '*'
        } else if self.checked.is_some() {
            '·'
        } else {
            ' '
        }
    }
}

/// Reset every bar in a slice to the default state.
pub fn clear_all(bars: &mut [BarState]) {
    for bar in bars {
        bar.clear();
    }
}

/// Clear the `active` flag on every bar in a slice.
pub fn clear_active(bars: &mut [BarState]) {
    for bar in bars {
        bar.clear_active();
    }
}

/// Proportional bar-height scaling for renderers.
///
/// Heights are scaled so the largest value fills `max_height` display
/// units; values at or below zero render with height zero.
#[derive(Debug, Clone, Copy)]
pub struct BarChart {
    /// Display height of the tallest bar.
    max_height: u32,
}

impl BarChart {
    /// Create a chart scaler with the given maximum display height.
    #[must_use]
    pub const fn new(max_height: u32) -> Self {
        Self { max_height }
    }

    /// Maximum display height.
    #[must_use]
    pub const fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Scaled display heights, one per value.
    #[must_use]
    pub fn heights(&self, values: &[f64]) -> Vec<u32> {
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !max.is_finite() || max <= 0.0 {
            return vec![0; values.len()];
        }
        let scale = f64::from(self.max_height) / max;
        values
            .iter()
            .map(|&v| {
                if v <= 0.0 {
                    0
                } else {
                    (v * scale).round() as u32
                }
            })
            .collect()
    }

    /// Display width per bar given a total column budget.
    ///
    /// At least one column per bar; a one-column gap is reserved between
    /// bars when space allows.
    #[must_use]
    pub fn bar_width(columns: u16, count: usize) -> u16 {
        if count == 0 {
            return 0;
        }
        let per_bar = columns / count.min(u16::MAX as usize) as u16;
        per_bar.saturating_sub(1).max(1)
    }
}
