//! Theme struct for building style collections.

use std::collections::HashMap;

use console::Style;

/// A named collection of styles used when rendering output.
///
/// # Example
///
/// ```rust
/// use themeshift::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("muted", Style::new().dim())
///     .add("accent", Style::new().cyan().bold());
///
/// assert!(theme.has("accent"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    /// Creates an empty theme. An empty theme renders everything
    /// unstyled, which is also the neutral placeholder palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Looks up a style by name.
    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Returns true if a style with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Returns true if the theme has no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Applies the named style to `text`.
    ///
    /// Unknown names return the text unstyled; like the rest of the crate,
    /// a missing style degrades rather than fails.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }
}
