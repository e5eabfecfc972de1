//! Light/dark style palettes driven by the resolved appearance.
//!
//! This module provides:
//!
//! - [`Theme`]: a named collection of styles with a fluent builder API
//! - [`ThemePair`]: light and dark themes selected by [`Appearance`]
//! - [`default_pair`]: built-in light/dark palettes
//!
//! Themes are the consumer-facing half of the crate: the controller
//! resolves a preference to an appearance, and a `ThemePair` turns that
//! appearance into the palette the host renders with.
//!
//! [`Appearance`]: crate::Appearance

mod pair;
#[allow(clippy::module_inception)]
mod theme;

pub use pair::{default_pair, ThemePair};
pub use theme::Theme;
