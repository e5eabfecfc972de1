//! The theme preference controller.

use crate::preference::{Appearance, ThemePreference};
use crate::signal::AppearanceSignal;
use crate::store::PreferenceStore;

/// Single authority for reading, applying, and persisting the user's theme
/// choice, and for keeping the applied appearance synchronized with
/// OS-level changes while the preference is [`ThemePreference::System`].
///
/// The controller owns no environment of its own: the persistent store and
/// the OS signal are injected capabilities, constructed once per
/// application lifetime and driven by the host's event loop.
///
/// # Lifecycle
///
/// 1. Construct with a store and a signal source.
/// 2. Call [`initialize`](Self::initialize) once the store is readable;
///    until then [`appearance`](Self::appearance) is `None`, the neutral
///    placeholder the host should render unstyled.
/// 3. Forward user selections to [`apply`](Self::apply) and OS change
///    edges to [`system_changed`](Self::system_changed).
/// 4. Call [`detach`](Self::detach) on teardown.
///
/// # Example
///
/// ```rust
/// use themeshift::{Appearance, MemoryStore, PreferenceStore, ThemeController, ThemePreference};
///
/// let store = MemoryStore::new();
/// let mut controller = ThemeController::new(&store, || Appearance::Dark);
///
/// controller.initialize();
/// assert_eq!(controller.appearance(), Some(Appearance::Dark)); // system default
///
/// controller.apply(ThemePreference::Light);
/// assert_eq!(controller.appearance(), Some(Appearance::Light));
/// assert_eq!(store.load().as_deref(), Some("light"));
/// ```
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore, G: AppearanceSignal> {
    store: S,
    signal: G,
    /// Cache of the stored preference, re-synchronized on initialize.
    preference: ThemePreference,
    /// `None` until the first resolution: the anti-flicker placeholder.
    applied: Option<Appearance>,
    menu_open: bool,
    attached: bool,
}

impl<S: PreferenceStore, G: AppearanceSignal> ThemeController<S, G> {
    /// Creates a controller. No store read happens yet; the appearance
    /// stays in the placeholder state until [`initialize`](Self::initialize)
    /// or [`apply`](Self::apply).
    pub fn new(store: S, signal: G) -> Self {
        Self {
            store,
            signal,
            preference: ThemePreference::System,
            applied: None,
            menu_open: false,
            attached: true,
        }
    }

    /// Reads the stored preference.
    ///
    /// Missing, unreadable, or unrecognized values read as `System`. Pure
    /// read: no side effects, safe before any UI exists.
    pub fn stored_preference(&self) -> ThemePreference {
        ThemePreference::from_stored(self.store.load().as_deref())
    }

    /// Queries the OS-level appearance.
    pub fn system_appearance(&self) -> Appearance {
        self.signal.current()
    }

    /// Synchronizes the cache from the store and resolves the appearance.
    ///
    /// Deliberately does not write the store: a fresh session with no
    /// stored value renders per the OS signal but leaves the store unset
    /// until the user makes an explicit selection.
    pub fn initialize(&mut self) {
        self.preference = self.stored_preference();
        self.applied = Some(self.preference.resolve(self.signal.current()));
    }

    /// Applies an explicit user selection.
    ///
    /// Resolves the preference, records the appearance synchronously,
    /// persists the preference (not the resolved appearance) best-effort,
    /// updates the cache, and closes the selection menu. Never fails: a
    /// store that cannot be written leaves the in-memory state correct for
    /// the current session.
    pub fn apply(&mut self, preference: ThemePreference) {
        self.applied = Some(preference.resolve(self.signal.current()));
        self.store.save(preference.as_str());
        self.preference = preference;
        self.menu_open = false;
    }

    /// Handles an OS color-scheme change notification.
    ///
    /// The stored preference is re-read at fire time so a selection made
    /// concurrently (this session or another) is never overridden by a
    /// stale value. Only a `System` preference recomputes the appearance;
    /// explicit `Light`/`Dark` make the notification a no-op, as does a
    /// detached controller.
    pub fn system_changed(&mut self) {
        if !self.attached {
            return;
        }
        // When the store is unavailable the in-memory cache stands in, so
        // a session whose persist failed still follows its own selection.
        let current = match self.store.load() {
            Some(raw) => ThemePreference::from_stored(Some(&raw)),
            None => self.preference,
        };
        self.preference = current;
        if current == ThemePreference::System {
            self.applied = Some(self.signal.current());
        }
    }

    /// Revokes the OS-change subscription. Idempotent; safe during
    /// teardown even if no notification ever fired.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Returns whether the controller still reacts to OS changes.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The currently applied appearance, or `None` before the first
    /// resolution (the neutral placeholder state).
    pub fn appearance(&self) -> Option<Appearance> {
        self.applied
    }

    /// The cached preference for the current session.
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Opens the theme selection menu.
    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    /// Closes the theme selection menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Returns whether the selection menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}
