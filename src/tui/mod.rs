//! TUI module for buscar.
//!
//! This module contains reusable TUI application state and logic
//! extracted from bin/*.rs to enable testing.
//!
//! The actual terminal I/O remains in the binary, but all testable
//! state management and business logic lives here.

#[cfg(feature = "tui")]
pub mod app;

#[cfg(feature = "tui")]
pub use app::SearchApp;
