//! Sortedness check and direction detection for binary search.

use serde::{Deserialize, Serialize};

/// Monotonic order of an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Monotonically non-decreasing.
    Ascending,
    /// Monotonically non-increasing.
    Descending,
}

/// Detect the monotonic order of `values`, if any.
///
/// Arrays of length <= 1 and constant arrays satisfy both checks; they
/// resolve to ascending via the first-versus-last probe, matching how
/// binary search picks its half-exclusion rule.
#[must_use]
pub fn sort_direction(values: &[f64]) -> Option<SortDirection> {
    let ascending = values.windows(2).all(|w| w[0] <= w[1]);
    let descending = values.windows(2).all(|w| w[0] >= w[1]);

    if !ascending && !descending {
        return None;
    }

    // first <= last decides the tie for constant and trivial arrays
    let first = values.first().copied().unwrap_or(0.0);
    let last = values.last().copied().unwrap_or(0.0);
    if ascending && first <= last {
        Some(SortDirection::Ascending)
    } else {
        Some(SortDirection::Descending)
    }
}

/// True if `values` is monotonically non-decreasing or non-increasing.
#[must_use]
pub fn is_sorted(values: &[f64]) -> bool {
    sort_direction(values).is_some()
}
