//! Theme preference and resolved appearance types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key under which the preference is persisted in a [`PreferenceStore`].
///
/// [`PreferenceStore`]: crate::PreferenceStore
pub const STORAGE_KEY: &str = "theme-preference";

/// The user's chosen display mode.
///
/// This is the only persisted entity in the crate. It is stored as one of
/// the strings `"light"`, `"dark"` or `"system"`; anything else read back
/// from storage is treated as [`ThemePreference::System`].
///
/// # Example
///
/// ```rust
/// use themeshift::ThemePreference;
///
/// assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
/// assert_eq!(ThemePreference::from_stored(Some("bogus")), ThemePreference::System);
/// assert_eq!(ThemePreference::from_stored(None), ThemePreference::System);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Always use the light appearance.
    Light,
    /// Always use the dark appearance.
    Dark,
    /// Follow the OS-level color-scheme signal.
    #[default]
    System,
}

impl ThemePreference {
    /// Returns the canonical storage string for this preference.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Interprets a raw stored value leniently.
    ///
    /// Missing or unrecognized values fall back to `System`. This is the
    /// read path the controller uses; callers who want to detect corrupted
    /// values instead can use the strict [`FromStr`] impl.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// Resolves this preference to a concrete appearance.
    ///
    /// `Light` and `Dark` resolve to themselves; `System` resolves to the
    /// supplied OS appearance.
    pub fn resolve(self, system: Appearance) -> Appearance {
        match self {
            ThemePreference::Light => Appearance::Light,
            ThemePreference::Dark => Appearance::Dark,
            ThemePreference::System => system,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(ParsePreferenceError(other.to_string())),
        }
    }
}

/// Error from the strict [`FromStr`] parse of [`ThemePreference`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized theme preference \"{0}\"")]
pub struct ParsePreferenceError(pub String);

/// A concrete appearance after resolving the preference.
///
/// Derived, never stored: there is no `System` variant here, so an applied
/// appearance is always exactly light or dark by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    /// Returns `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_stored_recognized_values() {
        assert_eq!(
            ThemePreference::from_stored(Some("light")),
            ThemePreference::Light
        );
        assert_eq!(
            ThemePreference::from_stored(Some("dark")),
            ThemePreference::Dark
        );
        assert_eq!(
            ThemePreference::from_stored(Some("system")),
            ThemePreference::System
        );
    }

    #[test]
    fn test_from_stored_defaults_to_system() {
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::System);
        assert_eq!(
            ThemePreference::from_stored(Some("")),
            ThemePreference::System
        );
        assert_eq!(
            ThemePreference::from_stored(Some("Dark")),
            ThemePreference::System
        );
        assert_eq!(
            ThemePreference::from_stored(Some("auto")),
            ThemePreference::System
        );
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "sepia".parse::<ThemePreference>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_resolve_explicit_ignores_system_appearance() {
        assert_eq!(
            ThemePreference::Light.resolve(Appearance::Dark),
            Appearance::Light
        );
        assert_eq!(
            ThemePreference::Dark.resolve(Appearance::Light),
            Appearance::Dark
        );
    }

    #[test]
    fn test_resolve_system_follows_signal() {
        assert_eq!(
            ThemePreference::System.resolve(Appearance::Light),
            Appearance::Light
        );
        assert_eq!(
            ThemePreference::System.resolve(Appearance::Dark),
            Appearance::Dark
        );
    }

    #[test]
    fn test_display_matches_storage_strings() {
        assert_eq!(ThemePreference::Light.to_string(), "light");
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(ThemePreference::System.to_string(), "system");
        assert_eq!(Appearance::Light.to_string(), "light");
        assert_eq!(Appearance::Dark.to_string(), "dark");
    }

    #[test]
    fn test_serde_uses_lowercase_strings() {
        assert_eq!(
            serde_json::to_string(&ThemePreference::System).unwrap(),
            "\"system\""
        );
        let parsed: ThemePreference = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemePreference::Dark);
    }

    proptest! {
        #[test]
        fn prop_lenient_read_never_invents_explicit_modes(raw in "\\PC*") {
            let parsed = ThemePreference::from_stored(Some(&raw));
            if raw != "light" && raw != "dark" && raw != "system" {
                prop_assert_eq!(parsed, ThemePreference::System);
            } else {
                prop_assert_eq!(parsed.as_str(), raw);
            }
        }
    }
}
