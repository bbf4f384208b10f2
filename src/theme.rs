//! Light/Dark Theme
//!
//! Reads the saved preference from `localStorage`, applies it as the
//! `data-theme` attribute on `<html>`, and writes it back on every change.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Current theme plus its toggle, provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn load_preference(key: &str) -> Option<Theme> {
    local_storage()
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .and_then(|value| Theme::parse(&value))
}

fn save_preference(key: &str, theme: Theme) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(key, theme.as_str()).is_err() {
                tracing::warn!(%key, "Theme preference not saved");
            }
        }
        None => tracing::debug!("localStorage unavailable, theme not persisted"),
    }
}

fn apply_to_document(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Create the theme signal, keep document and storage in sync, and provide it
pub fn provide_theme(storage_key: String) -> ThemeContext {
    let initial = load_preference(&storage_key).unwrap_or_default();
    let (theme, set_theme) = signal(initial);

    Effect::new(move |_| {
        let current = theme.get();
        tracing::debug!(theme = current.as_str(), "Applying theme");
        apply_to_document(current);
        save_preference(&storage_key, current);
    });

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse(" dark\n"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
