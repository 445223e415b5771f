//! Search visualization TUI application state and logic.
//!
//! This module contains the testable state and logic for the bars TUI.
//! Terminal I/O is handled by the binary, but all state management lives
//! here: the binary calls `tick` once per frame and `handle_key` per key
//! event, then renders from the session's bars and trace.

use crossterm::event::KeyCode;

use crate::algo::{NullObserver, SearchKind, SearchStatus};
use crate::config::VizConfig;
use crate::error::VizResult;
use crate::session::{SearchSession, SessionStep};

/// Application state for the bars TUI.
pub struct SearchApp {
    /// The underlying search session.
    pub session: SearchSession,
    /// Configuration (pacing, demo generation).
    pub config: VizConfig,
    /// Current target value.
    pub target: f64,
    /// Whether stepping is paused.
    pub paused: bool,
    /// Frame counter.
    pub frame_count: u64,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Seed used for the current demo array.
    seed: u64,
    /// Human-readable status line.
    pub status_line: String,
}

impl SearchApp {
    /// Create an application with a generated demo array.
    ///
    /// # Errors
    ///
    /// Returns error if demo generation fails (zero-length config).
    pub fn new(config: VizConfig) -> VizResult<Self> {
        let mut session = SearchSession::new();
        let seed = config.seed;
        session.generate_array(config.demo_len, config.demo_max_value, seed)?;

        // default target: the middle element, so both searches can hit
        let target = session.values()[session.len() / 2];

        Ok(Self {
            session,
            config,
            target,
            paused: false,
            frame_count: 0,
            should_quit: false,
            seed,
            status_line: "press 'l' or 'b' to start a search".to_string(),
        })
    }

    /// Advance one frame: steps the in-flight search unless paused.
    pub fn tick(&mut self) {
        self.frame_count += 1;
        if self.paused || !self.session.in_flight() {
            return;
        }
        self.advance();
    }

    /// Advance the in-flight search by one phase.
    fn advance(&mut self) {
        match self.session.step(&mut NullObserver) {
            Ok(SessionStep::Complete(outcome)) => {
                self.status_line = match outcome.status {
                    SearchStatus::Found { index } => {
                        format!("element {} found at index {index}", outcome.target)
                    }
                    SearchStatus::NotFound => format!("element {} not found", outcome.target),
                    SearchStatus::NotSorted => {
                        "array not sorted: binary search refused".to_string()
                    }
                };
            }
            Ok(SessionStep::Observing | SessionStep::Progress) => {}
            Err(e) => self.status_line = e.to_string(),
        }
    }

    /// Start a search of the given kind for the current target.
    pub fn start(&mut self, kind: SearchKind) {
        match self.session.begin(kind, self.target) {
            Ok(()) => {
                self.paused = false;
                self.status_line = format!("{kind} search for {}", self.target);
            }
            Err(e) => self.status_line = e.to_string(),
        }
    }

    /// Regenerate the demo array with the next seed.
    pub fn regenerate(&mut self) {
        self.session.abort();
        self.seed = self.seed.wrapping_add(1);
        if let Err(e) =
            self.session
                .generate_array(self.config.demo_len, self.config.demo_max_value, self.seed)
        {
            self.status_line = e.to_string();
            return;
        }
        self.target = self.session.values()[self.session.len() / 2];
        self.status_line = format!("new array (seed {})", self.seed);
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('s') => {
                // single step while paused
                if self.session.in_flight() {
                    self.paused = true;
                    self.advance();
                }
            }
            KeyCode::Char('l') => self.start(SearchKind::Linear),
            KeyCode::Char('b') => self.start(SearchKind::Binary),
            KeyCode::Char('r') => self.regenerate(),
            KeyCode::Char('+' | '=') => {
                if !self.session.in_flight() {
                    self.target += 1.0;
                }
            }
            KeyCode::Char('-') => {
                if !self.session.in_flight() {
                    self.target -= 1.0;
                }
            }
            _ => {}
        }
    }

    /// Check if the app should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current demo seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn app() -> SearchApp {
        SearchApp::new(VizConfig::builder().pacing_ms(0).build()).unwrap()
    }

    #[test]
    fn test_new_app() {
        let app = app();
        assert!(!app.paused);
        assert!(!app.should_quit);
        assert_eq!(app.frame_count, 0);
        assert_eq!(app.session.len(), 12);
        assert!(!app.session.in_flight());
    }

    #[test]
    fn test_default_target_is_present() {
        let app = app();
        assert!(app.session.values().contains(&app.target));
    }

    #[test]
    fn test_handle_key_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_handle_key_esc() {
        let mut app = app();
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_pause_toggle() {
        let mut app = app();
        app.handle_key(KeyCode::Char(' '));
        assert!(app.paused);
        app.handle_key(KeyCode::Char(' '));
        assert!(!app.paused);
    }

    #[test]
    fn test_start_linear() {
        let mut app = app();
        app.handle_key(KeyCode::Char('l'));
        assert!(app.session.in_flight());
        assert!(app.status_line.contains("linear"));
    }

    #[test]
    fn test_run_to_completion() {
        let mut app = app();
        app.handle_key(KeyCode::Char('l'));
        for _ in 0..100 {
            app.tick();
        }
        assert!(!app.session.in_flight());
        assert!(app.status_line.contains("found"));
        assert!(app.session.last_outcome().is_some());
    }

    #[test]
    fn test_tick_increments_frame() {
        let mut app = app();
        app.tick();
        assert_eq!(app.frame_count, 1);
    }

    #[test]
    fn test_paused_tick_does_not_advance() {
        let mut app = app();
        app.handle_key(KeyCode::Char('l'));
        app.paused = true;
        let trace_before = app.session.trace().len();
        app.tick();
        assert!(app.session.in_flight());
        assert_eq!(app.session.trace().len(), trace_before);
    }

    #[test]
    fn test_single_step_pauses() {
        let mut app = app();
        app.handle_key(KeyCode::Char('b'));
        app.handle_key(KeyCode::Char('s'));
        assert!(app.paused);
    }

    #[test]
    fn test_regenerate_changes_values() {
        let mut app = app();
        let before = app.session.values().to_vec();
        let seed_before = app.seed();
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.seed(), seed_before + 1);
        assert_ne!(app.session.values(), before.as_slice());
    }

    #[test]
    fn test_target_adjustment() {
        let mut app = app();
        let before = app.target;
        app.handle_key(KeyCode::Char('+'));
        assert!((app.target - before - 1.0).abs() < f64::EPSILON);
        app.handle_key(KeyCode::Char('-'));
        assert!((app.target - before).abs() < f64::EPSILON);
    }

    #[test]
    fn test_target_locked_mid_run() {
        let mut app = app();
        app.handle_key(KeyCode::Char('b'));
        let before = app.target;
        app.handle_key(KeyCode::Char('+'));
        assert!((app.target - before).abs() < f64::EPSILON);
    }

    #[test]
    fn test_start_while_running_reports_guard() {
        let mut app = app();
        app.handle_key(KeyCode::Char('l'));
        app.handle_key(KeyCode::Char('b'));
        assert!(app.status_line.contains("already in progress"));
    }
}
