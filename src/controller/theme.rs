//! Light/dark theme preference

use std::fmt;

use tracing::{debug, warn};

use crate::dom::{Document, ElementId};
use crate::store::KeyValueStore;

/// Store key holding the preference
pub const THEME_KEY: &str = "theme";
/// Document-element attribute the stylesheet keys off
pub const THEME_ATTR: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than `"dark"` is light
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle: the theme a click would switch to
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective theme of a document
pub fn current(document: &Document) -> Theme {
    Theme::from_attr(document.root_attr(THEME_ATTR))
}

/// Apply a stored preference, if any, and sync the toggle glyph.
///
/// Without a stored value the document keeps the theme its markup declares.
pub fn apply_saved<S: KeyValueStore>(
    document: &mut Document,
    toggle: Option<ElementId>,
    store: &S,
) -> Theme {
    if let Some(saved) = store.get(THEME_KEY) {
        let theme = Theme::from_attr(Some(&saved));
        debug!(%theme, "applying saved theme");
        document.set_root_attr(THEME_ATTR, theme.as_str());
    }
    let theme = current(document);
    if let Some(toggle) = toggle {
        document.get_mut(toggle).text = theme.glyph().to_string();
    }
    theme
}

/// Flip the document theme, persist it, and update the toggle glyph
pub fn toggle<S: KeyValueStore>(
    document: &mut Document,
    toggle: Option<ElementId>,
    store: &mut S,
) -> Theme {
    let theme = current(document).toggled();
    document.set_root_attr(THEME_ATTR, theme.as_str());
    if let Some(toggle) = toggle {
        document.get_mut(toggle).text = theme.glyph().to_string();
    }
    if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
        warn!(error = %e, "failed to persist theme preference");
    }
    debug!(%theme, "theme toggled");
    theme
}
