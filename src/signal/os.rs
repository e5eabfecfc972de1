//! OS-backed appearance detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use crate::preference::Appearance;

use super::AppearanceSignal;

/// The production signal source, querying the OS color-scheme setting.
///
/// Environments where the setting cannot be determined (headless sessions,
/// unsupported desktops) report [`Appearance::Light`].
///
/// # Example
///
/// ```rust
/// use themeshift::{AppearanceSignal, OsSignal};
///
/// let appearance = OsSignal.current();
/// println!("OS prefers {appearance}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSignal;

impl AppearanceSignal for OsSignal {
    fn current(&self) -> Appearance {
        match detect_os_theme() {
            OsThemeMode::Dark => Appearance::Dark,
            OsThemeMode::Light => Appearance::Light,
        }
    }
}
