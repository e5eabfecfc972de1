//! Light/dark/system theme preference management with OS detection.
//!
//! `themeshift` resolves, applies, and persists a user's display-theme
//! choice across three modes (light, dark, system), and keeps the applied
//! appearance synchronized with live OS color-scheme changes while the
//! user has chosen automatic mode.
//!
//! The crate is built around injected capabilities rather than hidden
//! globals: [`PreferenceStore`] owns persistence, [`AppearanceSignal`] owns
//! the OS query, and [`ThemeController`] is the single authority wiring the
//! two together. Everything degrades silently: a broken theme preference
//! must never block the host application.
//!
//! # Example
//!
//! ```rust
//! use themeshift::{
//!     default_pair, Appearance, MemoryStore, ThemeController, ThemePreference,
//! };
//!
//! let store = MemoryStore::new();
//! let mut controller = ThemeController::new(&store, || Appearance::Dark);
//!
//! // Before initialization the appearance is the neutral placeholder.
//! assert_eq!(controller.appearance(), None);
//!
//! controller.initialize();
//! controller.apply(ThemePreference::Dark);
//!
//! // The resolved appearance selects the active palette.
//! let theme = default_pair().select(controller.appearance());
//! println!("{}", theme.apply("accent", "dark mode engaged"));
//! ```
//!
//! For production use, swap [`MemoryStore`] for [`FileStore`] and the
//! closure for [`OsSignal`], and drive [`ChangeDetector`] from the host's
//! event loop to deliver OS change edges to
//! [`ThemeController::system_changed`].

mod controller;
mod preference;
mod signal;
mod store;
mod theme;

pub use controller::ThemeController;
pub use preference::{Appearance, ParsePreferenceError, ThemePreference, STORAGE_KEY};
pub use signal::{AppearanceSignal, ChangeDetector, OsSignal};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use theme::{default_pair, Theme, ThemePair};
