use codee::string::JsonSerdeWasmCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;
use leptos_use::use_preferred_dark;
use serde::{Deserialize, Serialize};

/// localStorage key holding the persisted preference.
const THEME_STORAGE_KEY: &str = "theme";

/// Used when neither a stored preference nor an OS hint is available.
pub const FALLBACK_THEME: Theme = Theme::Light;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Resolution order: stored preference, then the OS color-scheme hint,
    /// then the configured fallback.
    pub fn initial(stored: Option<Theme>, prefers_dark: bool) -> Theme {
        match stored {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => FALLBACK_THEME,
        }
    }
}

/// Owns the process-wide theme preference: reads it from storage (or the OS
/// hint), persists every change, and keeps the `dark` class on the document
/// element in sync for the stylesheet.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: Signal<Theme>,
    set_stored: WriteSignal<Option<Theme>>,
}

impl ThemeStore {
    /// Storage-read failures decode to `None` and take the fallback path.
    pub fn new() -> Self {
        let (stored, set_stored, _) =
            use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
        let prefers_dark = use_preferred_dark();
        let theme = Signal::derive(move || Theme::initial(stored(), prefers_dark()));

        // Client-only: mark the document root so `dark:` styles apply.
        Effect::new(move |_| {
            let theme = theme();
            if let Some(root) = document().document_element() {
                let classes = root.class_list();
                let res = match theme {
                    Theme::Dark => classes.add_1("dark"),
                    Theme::Light => classes.remove_1("dark"),
                };
                if res.is_err() {
                    log::warn!("couldn't set {} class on document root", theme.as_str());
                }
            }
        });

        Self { theme, set_stored }
    }

    pub fn theme(&self) -> Signal<Theme> {
        self.theme
    }

    /// Flips the preference and persists the new value.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggle();
        (self.set_stored)(Some(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involutive() {
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_stored_preference_wins_over_os_hint() {
        assert_eq!(Theme::initial(Some(Theme::Dark), false), Theme::Dark);
        assert_eq!(Theme::initial(Some(Theme::Light), true), Theme::Light);
    }

    #[test]
    fn test_absent_preference_follows_os_hint() {
        assert_eq!(Theme::initial(None, true), Theme::Dark);
        assert_eq!(Theme::initial(None, false), FALLBACK_THEME);
    }

    #[test]
    fn test_storage_encoding_round_trips() {
        let encoded = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(encoded, "\"dark\"");
        let decoded: Theme = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, Theme::Dark);
    }
}
