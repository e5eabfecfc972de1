//! OS color-scheme signal sources.
//!
//! This module provides:
//!
//! - [`AppearanceSignal`]: the injected capability for querying the
//!   OS-level light/dark signal
//! - [`OsSignal`]: the production source, backed by OS detection
//! - [`ChangeDetector`]: poll-edge helper that turns the synchronous query
//!   into change notifications a host event loop can forward
//!
//! Any `Fn() -> Appearance` closure is also a signal source, which is how
//! tests substitute deterministic doubles without global state.

mod os;
mod watch;

pub use os::OsSignal;
pub use watch::ChangeDetector;

use crate::preference::Appearance;

/// Capability for querying the OS-level color-scheme signal.
///
/// The query is synchronous and infallible; sources that cannot determine
/// the OS preference report [`Appearance::Light`].
pub trait AppearanceSignal {
    /// Returns the current OS appearance.
    fn current(&self) -> Appearance;
}

impl<F: Fn() -> Appearance> AppearanceSignal for F {
    fn current(&self) -> Appearance {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_signal_source() {
        let signal = || Appearance::Dark;
        assert_eq!(signal.current(), Appearance::Dark);
    }
}
