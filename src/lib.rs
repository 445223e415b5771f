//! # buscar
//!
//! Deterministic search-algorithm visualization engine.
//!
//! Steps through linear and binary search over a numeric array, one
//! observable transition at a time. Each array element is a "bar" carrying
//! a visual flag set (active / found / checked); every step mutates the
//! bars, appends to an auditable trace, and notifies an observer, so any
//! frontend (CLI, TUI, test harness) replays the same state sequence.
//!
//! ## Example
//!
//! ```rust
//! use buscar::prelude::*;
//!
//! let mut session = SearchSession::new();
//! session.set_array(vec![1.0, 3.0, 5.0, 8.0, 9.0]).unwrap();
//!
//! let outcome = session
//!     .search(SearchKind::Binary, 5.0, Pacing::None, &mut NullObserver)
//!     .unwrap();
//! assert_eq!(outcome.status, SearchStatus::Found { index: 2 });
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp, // Targets match by exact equality
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
    clippy::needless_range_loop, // Sometimes range loops are clearer
)]

pub mod algo;
pub mod bars;
pub mod cli;
pub mod config;
pub mod error;
pub mod rng;
pub mod scenario;
pub mod session;
pub mod trace;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::algo::{
        ComplexityLabel, NullObserver, Pacing, SearchKind, SearchOutcome, SearchStatus, StepEvent,
        StepObserver,
    };
    pub use crate::bars::{BarState, CheckedReason};
    pub use crate::config::{VizConfig, VizConfigBuilder};
    pub use crate::error::{VizError, VizResult};
    pub use crate::rng::VizRng;
    pub use crate::session::{SearchSession, SessionStep};
    pub use crate::trace::{SearchTrace, TraceRecord};
}

/// Re-export for public API
pub use error::{VizError, VizResult};
