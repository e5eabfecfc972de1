//! Light/dark theme pairs selected by the resolved appearance.

use console::Style;
use once_cell::sync::Lazy;

use crate::preference::Appearance;

use super::theme::Theme;

/// A theme that adapts to the resolved appearance.
///
/// Contains separate themes for light and dark appearances. Selection is
/// driven by the controller's resolved appearance rather than by a hidden
/// OS probe, so the pair stays consistent with whatever the controller
/// applied.
///
/// # Example
///
/// ```rust
/// use themeshift::{Appearance, Theme, ThemePair};
/// use console::Style;
///
/// let light = Theme::new().add("tone", Style::new().green());
/// let dark = Theme::new().add("tone", Style::new().yellow().italic());
/// let pair = ThemePair::new(light, dark);
///
/// let active = pair.select(Some(Appearance::Dark));
/// assert!(active.has("tone"));
/// ```
#[derive(Debug, Clone)]
pub struct ThemePair {
    light: Theme,
    dark: Theme,
}

impl ThemePair {
    /// Creates a pair with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Selects the theme for an applied appearance.
    ///
    /// `None` is the pre-initialization placeholder state and yields an
    /// empty theme, so hosts render unstyled rather than guessing light or
    /// dark before the stored preference has been read.
    pub fn select(&self, appearance: Option<Appearance>) -> Theme {
        match appearance {
            Some(Appearance::Light) => self.light.clone(),
            Some(Appearance::Dark) => self.dark.clone(),
            None => Theme::new(),
        }
    }

    /// The light variant.
    pub fn light(&self) -> &Theme {
        &self.light
    }

    /// The dark variant.
    pub fn dark(&self) -> &Theme {
        &self.dark
    }
}

static DEFAULT_PAIR: Lazy<ThemePair> = Lazy::new(|| {
    let light = Theme::new()
        .add("text", Style::new().black())
        .add("muted", Style::new().dim())
        .add("accent", Style::new().blue().bold())
        .add("success", Style::new().green())
        .add("warning", Style::new().yellow())
        .add("error", Style::new().red().bold());
    let dark = Theme::new()
        .add("text", Style::new().white())
        .add("muted", Style::new().dim())
        .add("accent", Style::new().cyan().bold())
        .add("success", Style::new().green().italic())
        .add("warning", Style::new().yellow().italic())
        .add("error", Style::new().red().bold());
    ThemePair::new(light, dark)
});

/// Returns the built-in light/dark palettes.
pub fn default_pair() -> &'static ThemePair {
    &DEFAULT_PAIR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_selects_by_appearance() {
        let light = Theme::new().add("only-light", Style::new().green());
        let dark = Theme::new().add("only-dark", Style::new().red());
        let pair = ThemePair::new(light, dark);

        assert!(pair.select(Some(Appearance::Light)).has("only-light"));
        assert!(pair.select(Some(Appearance::Dark)).has("only-dark"));
    }

    #[test]
    fn test_pair_placeholder_is_neutral() {
        let pair = ThemePair::new(
            Theme::new().add("tone", Style::new().green()),
            Theme::new().add("tone", Style::new().red()),
        );

        let placeholder = pair.select(None);
        assert!(placeholder.is_empty());
        assert_eq!(placeholder.apply("tone", "text"), "text");
    }

    #[test]
    fn test_default_pair_has_both_variants() {
        let pair = default_pair();
        assert!(!pair.light().is_empty());
        assert!(!pair.dark().is_empty());
        assert!(pair.light().has("accent"));
        assert!(pair.dark().has("accent"));
    }
}
