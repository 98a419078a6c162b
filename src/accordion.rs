//! Headless collapsible-section state.
//!
//! Models the expanded/collapsed flag of a disclosure panel and the rules
//! around toggling it; rendering, animation, and input plumbing belong to
//! the host UI. Hosts that persist the flag do so through the gateway like
//! any other preference (see [`ActiveKey::ExploreMetricsTips`]).
//!
//! [`ActiveKey::ExploreMetricsTips`]: crate::domain::ActiveKey::ExploreMetricsTips

use std::fmt;

type ChangeCallback = Box<dyn FnMut(bool) + Send>;

/// Expand/collapse state for one collapsible section.
pub struct Accordion {
    expanded: bool,
    on_change: Option<ChangeCallback>,
}

impl Accordion {
    /// Create a section with the given initial state.
    #[must_use]
    pub fn new(default_expanded: bool) -> Self {
        Self {
            expanded: default_expanded,
            on_change: None,
        }
    }

    /// Attach a callback invoked with the new state after every toggle.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(bool) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Current expanded state.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Resync the flag from the host without firing the change callback.
    ///
    /// For host-driven default changes, which are not user toggles.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Flip the flag and fire the change callback.
    ///
    /// # Returns
    ///
    /// The new expanded state.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(self.expanded);
        }
        self.expanded
    }

    /// Handle a click on the section header.
    ///
    /// A click made while the host reports an active text selection does
    /// not toggle, so selecting header text never collapses the section
    /// under the user.
    ///
    /// # Returns
    ///
    /// Whether the click toggled the section.
    pub fn handle_click(&mut self, selection_active: bool) -> bool {
        if selection_active {
            return false;
        }
        self.toggle();
        true
    }
}

impl fmt::Debug for Accordion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accordion")
            .field("expanded", &self.expanded)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use parking_lot::Mutex;

    #[test]
    fn test_starts_in_default_state() {
        assert!(Accordion::new(true).is_expanded());
        assert!(!Accordion::new(false).is_expanded());
    }

    #[test]
    fn test_toggle_flips_and_reports() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut section = Accordion::new(false).with_on_change(move |expanded| {
            sink.lock().push(expanded);
        });

        assert!(section.toggle());
        assert!(!section.toggle());
        assert_eq!(*seen.lock(), vec![true, false]);
    }

    #[test]
    fn test_set_expanded_is_silent() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let mut section = Accordion::new(false).with_on_change(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        section.set_expanded(true);
        assert!(section.is_expanded());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_click_ignored_while_selecting_text() {
        let mut section = Accordion::new(true);

        assert!(!section.handle_click(true));
        assert!(section.is_expanded());

        assert!(section.handle_click(false));
        assert!(!section.is_expanded());
    }

    #[test]
    fn test_toggle_without_callback() {
        let mut section = Accordion::new(false);
        assert!(section.toggle());
        assert!(section.is_expanded());
    }
}
