//! Keeps a selection alive while the user works in the settings panel.
//!
//! Pressing the mouse inside the panel moves focus out of the iframe, which
//! would otherwise finalize the selection. The panel marks the guard on
//! pointer-down; the next focus-out inside the window consumes it.

/// Length of the suppression window in milliseconds
pub const GUARD_WINDOW_MS: f64 = 300.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EditGuard {
    deadline: Option<f64>,
}

impl EditGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the suppression window at `now` (milliseconds).
    pub fn mark_external_interaction(&mut self, now: f64) {
        self.deadline = Some(now + GUARD_WINDOW_MS);
    }

    pub fn is_active(&self, now: f64) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Whether a focus loss at `now` should be ignored. Consulting the guard
    /// consumes it.
    pub fn take_suppression(&mut self, now: f64) -> bool {
        self.deadline
            .take()
            .is_some_and(|deadline| now < deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppresses_inside_window() {
        let mut guard = EditGuard::new();
        guard.mark_external_interaction(1_000.0);
        assert!(guard.is_active(1_100.0));
        assert!(guard.take_suppression(1_299.0));
    }

    #[test]
    fn expires_after_window() {
        let mut guard = EditGuard::new();
        guard.mark_external_interaction(1_000.0);
        assert!(!guard.is_active(1_300.0));
        assert!(!guard.take_suppression(1_301.0));
    }

    #[test]
    fn is_consumed_once_consulted() {
        let mut guard = EditGuard::new();
        guard.mark_external_interaction(0.0);
        assert!(guard.take_suppression(10.0));
        assert!(!guard.take_suppression(20.0));
    }

    #[test]
    fn latest_mark_wins() {
        let mut guard = EditGuard::new();
        guard.mark_external_interaction(0.0);
        guard.mark_external_interaction(250.0);
        assert!(guard.take_suppression(500.0));
    }

    #[test]
    fn idle_guard_never_suppresses() {
        assert!(!EditGuard::new().take_suppression(0.0));
    }
}
