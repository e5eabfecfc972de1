//! Poll-edge detection for appearance changes.

use crate::preference::Appearance;

use super::AppearanceSignal;

/// Turns a synchronous [`AppearanceSignal`] into change notifications.
///
/// The OS exposes only a point-in-time query, so the subscription half is a
/// poll: the host's event loop calls [`poll`](ChangeDetector::poll) on its
/// tick and forwards each reported edge to
/// [`ThemeController::system_changed`](crate::ThemeController::system_changed).
///
/// # Example
///
/// ```rust
/// use themeshift::{Appearance, ChangeDetector};
///
/// let mut detector = ChangeDetector::new(|| Appearance::Light);
///
/// // No transition between polls: nothing to report.
/// assert_eq!(detector.poll(), None);
/// assert_eq!(detector.last(), Appearance::Light);
/// ```
#[derive(Debug)]
pub struct ChangeDetector<G: AppearanceSignal> {
    signal: G,
    last: Appearance,
}

impl<G: AppearanceSignal> ChangeDetector<G> {
    /// Creates a detector, capturing the signal's current value as the
    /// baseline so the first poll only reports a real transition.
    pub fn new(signal: G) -> Self {
        let last = signal.current();
        Self { signal, last }
    }

    /// Polls the signal, returning `Some(new)` exactly when the appearance
    /// changed since the previous observation.
    pub fn poll(&mut self) -> Option<Appearance> {
        let now = self.signal.current();
        if now == self.last {
            return None;
        }
        self.last = now;
        Some(now)
    }

    /// Returns the most recently observed appearance.
    pub fn last(&self) -> Appearance {
        self.last
    }
}
