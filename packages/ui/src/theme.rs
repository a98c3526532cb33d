//! Light/dark theme, persisted in local storage and applied as `data-theme`
//! on the document element.

use dioxus::prelude::*;

use crate::icons::{FaMoon, FaSun};
use crate::storage::{self, THEME_KEY};
use crate::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
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

pub type ThemeSignal = Signal<Theme>;

/// Restore the stored theme into `theme` and apply it.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    let stored = storage::load(THEME_KEY)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default();
    apply_theme(stored);
    theme.set(stored);
}

pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeSignal>();
    let current = theme();

    rsx! {
        button {
            class: "theme-toggle",
            title: if current == Theme::Dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                let next = theme().toggled();
                apply_theme(next);
                storage::save(THEME_KEY, next.as_str());
                theme.set(next);
            },
            if current == Theme::Dark {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_toggle() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }
}
